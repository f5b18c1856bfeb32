mod common;

use common::{static_config, temp_home, test_db, tp, write_config, write_file};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;

/// Home with an initialised audit log; returns (home, db).
fn initialised(name: &str) -> (String, String) {
    let home = temp_home(name);
    let db = test_db(&home);

    tp(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    (home, db)
}

#[test]
fn init_writes_config_outside_test_mode() {
    let home = temp_home("cli_init_config");

    tp(&home).arg("init").assert().success();

    let conf = std::path::Path::new(&home)
        .join(".tripoint")
        .join("tripoint.conf");
    assert!(conf.exists(), "config file should be created");

    tp(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn quote_by_drive_time() {
    let (home, db) = initialised("cli_quote_minutes");

    tp(&home)
        .args(["--db", &db, "quote", "--service", "diagnostic-callout", "--minutes", "30"])
        .assert()
        .success()
        .stdout(contains("Zone B"))
        .stdout(contains("£135"))
        .stdout(contains("1h 00m"));
}

#[test]
fn quote_as_json() {
    let (home, db) = initialised("cli_quote_json");

    let output = tp(&home)
        .args(["--db", &db, "quote", "-s", "diagnostic-callout", "-m", "25", "--json"])
        .output()
        .expect("run quote");
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["zone_id"], "A");
    assert_eq!(v["price"], 120);
    assert_eq!(v["included_minutes"], 60);
    assert_eq!(v["quote_only"], false);
}

#[test]
fn far_away_is_quote_only() {
    let (home, db) = initialised("cli_quote_far");

    tp(&home)
        .args(["--db", &db, "quote", "-s", "diagnostic-callout", "-m", "90"])
        .assert()
        .success()
        .stdout(contains("Out of area"))
        .stdout(contains("Quote only"));
}

#[test]
fn unknown_service_fails() {
    let (home, db) = initialised("cli_unknown_service");

    tp(&home)
        .args(["--db", &db, "quote", "-s", "tyre-fitting", "-m", "10"])
        .assert()
        .failure()
        .stderr(contains("Unknown service: tyre-fitting"));
}

#[test]
fn negative_drive_time_fails() {
    let (home, db) = initialised("cli_negative");

    tp(&home)
        .args(["--db", &db, "zone", "--minutes", "-5"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));
}

#[test]
fn minutes_and_postcode_are_exclusive() {
    let home = temp_home("cli_exclusive");

    tp(&home)
        .args(["zone", "--minutes", "10", "--postcode", "ME19 4HT"])
        .assert()
        .failure();

    tp(&home).args(["zone"]).assert().failure();
}

#[test]
fn zone_from_postcode_uses_nearest_base() {
    let home = temp_home("cli_postcode");
    write_config(&home, &static_config(&home));

    tp(&home)
        .args(["--db", &test_db(&home), "--test", "init"])
        .assert()
        .success();

    tp(&home)
        .args(["zone", "--postcode", "da1 1aa"])
        .assert()
        .success()
        .stdout(contains("Zone A"))
        .stdout(contains("Eltham"));

    let output = tp(&home)
        .args(["zone", "-p", "CT1 2AB", "--json"])
        .output()
        .expect("run zone");
    let v: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["zone"], "C");
    assert_eq!(v["base"], "Tonbridge");
    assert_eq!(v["postcode"], "CT1 2AB");
}

#[test]
fn unlocatable_postcode_asks_to_contact_us() {
    let home = temp_home("cli_contact_us");
    write_config(&home, &static_config(&home));

    tp(&home)
        .args(["--db", &test_db(&home), "--test", "init"])
        .assert()
        .success();

    tp(&home)
        .args(["quote", "-s", "diagnostic-callout", "-p", "ZZ9 9ZZ"])
        .assert()
        .failure()
        .stderr(contains("Unable to locate postcode"))
        .stderr(contains("contact us"));

    tp(&home)
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("contact_us"));
}

#[test]
fn malformed_postcode_is_not_a_contact_us_case() {
    let home = temp_home("cli_bad_postcode");
    write_config(&home, &static_config(&home));

    tp(&home)
        .args(["zone", "-p", "hello"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"))
        .stderr(contains("contact us").not());
}

#[test]
fn lookups_are_audited() {
    let (home, db) = initialised("cli_audit");

    tp(&home)
        .args(["--db", &db, "quote", "-s", "vor-priority-triage", "-m", "50"])
        .assert()
        .success();

    tp(&home)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("quote"))
        .stdout(contains("vor-priority-triage"))
        .stdout(contains("£190"));
}

#[test]
fn pricing_csv_has_a_column_per_zone() {
    let home = temp_home("cli_pricing_csv");

    tp(&home)
        .args(["pricing", "--format", "csv"])
        .assert()
        .success()
        .stdout(contains(
            "service_id,label,zone_a,zone_b,zone_c,included_minutes",
        ))
        .stdout(contains("diagnostic-callout,"));
}

#[test]
fn pricing_json_lists_every_service() {
    let home = temp_home("cli_pricing_json");

    let output = tp(&home)
        .args(["pricing", "--format", "json"])
        .output()
        .expect("run pricing");
    let v: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let rows = v.as_array().expect("array");

    assert_eq!(rows.len(), 12);
    let callout = rows
        .iter()
        .find(|r| r["service_id"] == "diagnostic-callout")
        .expect("callout row");
    assert_eq!(callout["prices"]["C"], 150);
}

#[test]
fn zones_lists_catch_all() {
    let home = temp_home("cli_zones");

    tp(&home)
        .arg("zones")
        .assert()
        .success()
        .stdout(contains("Zone A"))
        .stdout(contains("Out of area"))
        .stdout(contains("Tonbridge"));
}

#[test]
fn estimate_with_late_start() {
    let (home, db) = initialised("cli_estimate");

    let output = tp(&home)
        .args([
            "--db",
            &db,
            "estimate",
            "--services",
            "diagnostic-callout,adblue-countdown",
            "--minutes",
            "50",
            "--start",
            "21:00",
            "--json",
        ])
        .output()
        .expect("run estimate");
    assert!(output.status.success());

    let v: Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(v["zone_id"], "C");
    assert_eq!(v["deposit"], 50);
    assert_eq!(v["surcharges"].as_array().map(Vec::len), Some(2));
}

#[test]
fn estimate_rejects_bad_start_time() {
    let home = temp_home("cli_estimate_start");

    tp(&home)
        .args(["estimate", "-s", "diagnostic-callout", "-m", "10", "--start", "9pm"])
        .assert()
        .failure()
        .stderr(contains("HH:MM"));
}

#[test]
fn custom_catalog_overrides_builtin() {
    let home = temp_home("cli_custom_catalog");
    let catalog = write_file(
        &home,
        "catalog.yaml",
        r#"
version: test-1
bases:
  - { name: Depot, postcode: "ME19 4HT" }
zones:
  - { id: A, max_drive_minutes: 20, label: "0-20 mins", note: "" }
  - { id: Out of area, label: "20+ mins", note: "Quote only" }
services:
  - service_id: callout
    label: Callout
    price_per_zone: { A: 99 }
    included_minutes: 30
"#,
    );

    tp(&home)
        .args(["--catalog", &catalog, "--db", &test_db(&home), "quote", "-s", "callout", "-m", "20"])
        .assert()
        .success()
        .stdout(contains("£99"));

    tp(&home)
        .args(["--catalog", &catalog, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("test-1"));
}

#[test]
fn broken_catalog_is_reported() {
    let home = temp_home("cli_broken_catalog");
    let catalog = write_file(&home, "catalog.yaml", "version: x\nbases: []\nzones: []\nservices: []\n");

    tp(&home)
        .args(["--catalog", &catalog, "zones"])
        .assert()
        .failure()
        .stderr(contains("Invalid catalog"));
}
