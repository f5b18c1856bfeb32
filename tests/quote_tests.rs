use tripoint_quote::catalog::Catalog;
use tripoint_quote::core::logic::Core;
use tripoint_quote::errors::AppError;
use tripoint_quote::models::zone::ZoneId;

#[test]
fn diagnostic_callout_at_thirty_minutes() {
    let catalog = Catalog::builtin();
    let quote = Core::quote_for_drive_time(&catalog, "diagnostic-callout", 30.0).unwrap();

    assert_eq!(quote.zone_id, ZoneId::B);
    assert_eq!(quote.price, Some(135));
    assert_eq!(quote.included_minutes, 60);
    assert!(!quote.quote_only);
    assert_eq!(quote.price_display(), "£135");
}

#[test]
fn published_zone_prices() {
    let catalog = Catalog::builtin();
    let prices: Vec<_> = [ZoneId::A, ZoneId::B, ZoneId::C]
        .into_iter()
        .map(|z| Core::quote(&catalog, "emissions-fault-decision", z).unwrap().price)
        .collect();
    assert_eq!(prices, vec![Some(170), Some(185), Some(200)]);
}

#[test]
fn unknown_service_fails() {
    let catalog = Catalog::builtin();
    let err = Core::quote(&catalog, "nonexistent-service", ZoneId::A).unwrap_err();
    assert!(matches!(err, AppError::UnknownService(ref s) if s == "nonexistent-service"));
}

#[test]
fn unknown_service_fails_before_drive_time_checks() {
    let catalog = Catalog::builtin();
    let err = Core::quote_for_drive_time(&catalog, "nonexistent-service", -5.0).unwrap_err();
    assert!(matches!(err, AppError::UnknownService(_)));
}

#[test]
fn out_of_area_is_quote_only() {
    let catalog = Catalog::builtin();
    let quote = Core::quote_for_drive_time(&catalog, "diagnostic-callout", 90.0).unwrap();

    assert_eq!(quote.zone_id, ZoneId::OutOfArea);
    assert_eq!(quote.price, None);
    assert!(quote.quote_only);
    assert_eq!(quote.included_minutes, 60);
    assert_eq!(quote.price_display(), "Quote only");
}

#[test]
fn quoting_is_idempotent() {
    let catalog = Catalog::builtin();
    let first = Core::quote(&catalog, "vor-priority-triage", ZoneId::C).unwrap();
    let second = Core::quote(&catalog, "vor-priority-triage", ZoneId::C).unwrap();
    assert_eq!(first, second);
}

#[test]
fn price_never_decreases_with_drive_time() {
    let catalog = Catalog::builtin();

    for service in &catalog.services {
        let mut last = 0;
        for step in 0..=60 {
            let quote =
                Core::quote_for_drive_time(&catalog, &service.service_id, f64::from(step)).unwrap();
            let price = quote.price.expect("bounded zones are priced");
            assert!(price >= last, "{} got cheaper at {step} min", service.service_id);
            last = price;
        }
    }
}
