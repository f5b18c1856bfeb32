use super::location::{Located, locate};
use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::zone::Zone;
use crate::ui::messages::info;
use crate::utils::colors::paint_zone;
use crate::utils::formatting::{drive_minutes, zone_name};
use serde_json::json;

pub fn handle(cmd: &Commands, app: &AppContext) -> AppResult<()> {
    if let Commands::Zone { location, json } = cmd {
        let located = locate(location, app)?;
        let zone = Core::resolve_zone(&app.catalog, located.minutes)?;

        if *json {
            print_json(zone, &located)?;
        } else {
            print_human(zone, &located);
        }

        log::record(
            &app.database_path(),
            "zone",
            zone.id.code(),
            &located.describe(),
        );
    }
    Ok(())
}

fn print_json(zone: &Zone, located: &Located) -> AppResult<()> {
    let value = json!({
        "zone": zone.id,
        "label": zone.label,
        "note": zone.note,
        "drive_minutes": located.minutes,
        "postcode": located.postcode.as_ref().map(|p| p.to_string()),
        "base": located.route.as_ref().map(|r| r.base.name.clone()),
        "distance_km": located.route.as_ref().and_then(|r| r.distance_km),
        "quote_only": zone.is_catch_all(),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_human(zone: &Zone, located: &Located) {
    println!(
        "📍 You are in {} ({}, {})",
        paint_zone(zone.id, &zone_name(zone.id)),
        zone.label,
        zone.note
    );

    match &located.route {
        Some(route) => println!(
            "   Estimated {} drive from our {} base.",
            drive_minutes(route.minutes),
            route.base.name
        ),
        None => println!("   Drive time: {}.", drive_minutes(located.minutes)),
    }

    if zone.is_catch_all() {
        info("You are outside our standard coverage area. Please contact us for a custom quote.");
    }
}
