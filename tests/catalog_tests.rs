use tripoint_quote::catalog::Catalog;
use tripoint_quote::core::calculator::zone::resolve_zone;
use tripoint_quote::core::logic::Core;
use tripoint_quote::errors::AppError;
use tripoint_quote::models::zone::ZoneId;

const SMALL: &str = r#"
version: test-1
bases:
  - name: Tonbridge
    postcode: TN9 1PP
zones:
  - id: A
    max_drive_minutes: 20
    label: "0-20 mins"
    note: Core area
  - id: B
    max_drive_minutes: 40
    label: "20-40 mins"
  - id: Out of area
    label: "40+ mins"
    note: Quote only
services:
  - service_id: callout
    label: Callout
    price_per_zone:
      A: 100
      B: 110
    included_minutes: 45
"#;

fn assert_invalid(yaml: &str, fragment: &str) {
    match Catalog::from_yaml(yaml) {
        Err(AppError::Catalog(msg)) => assert!(msg.contains(fragment), "{msg}"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("catalog should have been rejected ({fragment})"),
    }
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    catalog.validate().unwrap();

    assert_eq!(catalog.zones.len(), 4);
    assert_eq!(catalog.services.len(), 12);
    assert_eq!(catalog.bases.len(), 2);
    assert_eq!(catalog.catch_all().map(|z| z.id), Some(ZoneId::OutOfArea));
}

#[test]
fn builtin_catalog_survives_yaml() {
    let catalog = Catalog::builtin();
    let yaml = catalog.to_yaml().unwrap();
    assert_eq!(Catalog::from_yaml(&yaml).unwrap(), catalog);
}

#[test]
fn custom_catalog_drives_resolution() {
    let catalog = Catalog::from_yaml(SMALL).unwrap();

    assert_eq!(resolve_zone(&catalog, 20.0).unwrap().id, ZoneId::A);
    assert_eq!(resolve_zone(&catalog, 30.0).unwrap().id, ZoneId::B);
    assert_eq!(resolve_zone(&catalog, 41.0).unwrap().id, ZoneId::OutOfArea);

    let quote = Core::quote_for_drive_time(&catalog, "callout", 35.0).unwrap();
    assert_eq!(quote.price, Some(110));
    assert_eq!(quote.included_minutes, 45);

    // rules fall back to defaults when omitted
    assert_eq!(catalog.rules.standard_deposit, 30);
    // per-service defaults
    assert_eq!(catalog.services[0].travel_buffer_minutes, 20);
}

#[test]
fn unsorted_zones_are_rejected() {
    let yaml = SMALL.replace("max_drive_minutes: 40", "max_drive_minutes: 15");
    assert_invalid(&yaml, "bound must be lower");
}

#[test]
fn missing_zone_price_is_rejected() {
    let yaml = SMALL.replace("      B: 110\n", "");
    assert_invalid(&yaml, "no price for zone B");
}

#[test]
fn catch_all_must_be_last() {
    let yaml = r#"
version: bad
bases: [{ name: Eltham, postcode: SE9 4HA }]
zones:
  - { id: Out of area, label: "any" }
  - { id: A, max_drive_minutes: 20, label: "0-20" }
services: []
"#;
    assert_invalid(yaml, "must be last");
}

#[test]
fn exactly_one_catch_all_is_required() {
    let none = r#"
version: bad
bases: [{ name: Eltham, postcode: SE9 4HA }]
zones:
  - { id: A, max_drive_minutes: 20, label: "0-20" }
services: []
"#;
    assert_invalid(none, "found 0");
}

#[test]
fn catch_all_cannot_have_a_price() {
    let yaml = SMALL.replace("      B: 110\n", "      B: 110\n      Out of area: 300\n");
    assert_invalid(&yaml, "quote only");
}

#[test]
fn prices_must_not_decrease_with_distance() {
    let yaml = SMALL.replace("B: 110", "B: 90");
    assert_invalid(&yaml, "decrease");
}

#[test]
fn duplicate_services_are_rejected() {
    let yaml = format!(
        "{SMALL}  - service_id: callout\n    label: Again\n    price_per_zone: {{ A: 1, B: 2 }}\n    included_minutes: 10\n"
    );
    assert_invalid(&yaml, "listed twice");
}

#[test]
fn bases_are_required() {
    let yaml = SMALL.replace(
        "bases:\n  - name: Tonbridge\n    postcode: TN9 1PP\n",
        "bases: []\n",
    );
    assert_invalid(&yaml, "base");
}

#[test]
fn unknown_service_lookup() {
    let catalog = Catalog::builtin();
    assert!(matches!(
        catalog.service("nonexistent-service"),
        Err(AppError::UnknownService(_))
    ));
}

#[test]
fn rules_can_move_the_higher_deposit_zone() {
    let yaml = format!("{SMALL}rules:\n  higher_deposit_zone: B\n");
    let catalog = Catalog::from_yaml(&yaml).unwrap();

    assert_eq!(catalog.rules.higher_deposit_zone, ZoneId::B);
    // Unset rules keep their defaults.
    assert_eq!(catalog.rules.higher_deposit, 50);
    assert_eq!(Catalog::builtin().rules.higher_deposit_zone, ZoneId::C);

    let e = Core::estimate(&catalog, &["callout".to_string()], 30.0, None).unwrap();
    assert_eq!(e.zone_id, ZoneId::B);
    assert_eq!(e.deposit, Some(50));
}
