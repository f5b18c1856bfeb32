use super::location::{Located, locate};
use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::quote::Quote;
use crate::ui::messages::info;
use crate::utils::colors::paint_zone;
use crate::utils::formatting::{drive_minutes, mins2readable, zone_name};
use serde_json::json;

pub fn handle(cmd: &Commands, app: &AppContext) -> AppResult<()> {
    if let Commands::Quote {
        service,
        location,
        json,
    } = cmd
    {
        // Configuration mistakes surface before any routing call is made.
        let entry = app.catalog.service(service)?;
        let located = locate(location, app)?;
        let quote = Core::quote_for_drive_time(&app.catalog, service, located.minutes)?;

        if *json {
            print_json(&quote, &located)?;
        } else {
            print_human(&quote, &entry.label, &located);
        }

        log::record(
            &app.database_path(),
            "quote",
            &quote.service_id,
            &format!(
                "{} at {} → {}",
                zone_name(quote.zone_id),
                located.describe(),
                quote.price_display()
            ),
        );
    }
    Ok(())
}

fn print_json(quote: &Quote, located: &Located) -> AppResult<()> {
    let value = json!({
        "service_id": quote.service_id,
        "zone_id": quote.zone_id,
        "price": quote.price,
        "included_minutes": quote.included_minutes,
        "quote_only": quote.quote_only,
        "drive_minutes": located.minutes,
        "postcode": located.postcode.as_ref().map(|p| p.to_string()),
        "base": located.route.as_ref().map(|r| r.base.name.clone()),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_human(quote: &Quote, label: &str, located: &Located) {
    println!("🧾 {label}");
    println!(
        "   Zone     : {}",
        paint_zone(quote.zone_id, &zone_name(quote.zone_id))
    );
    match &located.route {
        Some(route) => println!(
            "   Drive    : {} from {}",
            drive_minutes(route.minutes),
            route.base.name
        ),
        None => println!("   Drive    : {}", drive_minutes(located.minutes)),
    }
    println!("   Price    : {}", quote.price_display());
    println!(
        "   Includes : up to {} on-site",
        mins2readable(quote.included_minutes)
    );

    if quote.quote_only {
        info("You are outside our standard coverage area. Please contact us for a custom quote.");
    }
}
