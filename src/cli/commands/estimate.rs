use super::location::locate;
use crate::core::calculator::estimate::service_bundle;
use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::estimate::BookingEstimate;
use crate::ui::messages::info;
use crate::utils::colors::paint_zone;
use crate::utils::formatting::{drive_minutes, mins2readable, price, zone_name};
use chrono::NaiveTime;

fn parse_start(raw: Option<&String>) -> AppResult<Option<NaiveTime>> {
    raw.map(|s| {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| AppError::InvalidInput(format!("'{s}' is not a valid HH:MM start time")))
    })
    .transpose()
}

pub fn handle(cmd: &Commands, app: &AppContext) -> AppResult<()> {
    if let Commands::Estimate {
        services,
        location,
        start,
        json,
    } = cmd
    {
        let start = parse_start(start.as_ref())?;
        let service_ids: Vec<String> = services
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Unknown ids fail before the routing call.
        service_bundle(&app.catalog, &service_ids)?;

        let located = locate(location, app)?;
        let estimate = Core::estimate(&app.catalog, &service_ids, located.minutes, start)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        } else {
            print_human(&estimate);
        }

        log::record(
            &app.database_path(),
            "estimate",
            &estimate.service_ids.join(","),
            &format!(
                "{} at {} → {}",
                zone_name(estimate.zone_id),
                located.describe(),
                price(estimate.fixed_price)
            ),
        );
    }
    Ok(())
}

fn print_human(e: &BookingEstimate) {
    println!("🧾 Booking estimate: {}", e.service_ids.join(" + "));
    println!(
        "   Zone          : {} ({})",
        paint_zone(e.zone_id, &zone_name(e.zone_id)),
        drive_minutes(e.drive_minutes)
    );
    println!("   On-site       : {}", mins2readable(e.service_minutes));
    println!("   Travel buffer : {}", mins2readable(e.travel_buffer_minutes));
    println!("   Time reserved : {}", mins2readable(e.total_minutes));
    if e.min_notice_hours > 0 {
        println!("   Book at least : {}h ahead", e.min_notice_hours);
    }

    for s in &e.surcharges {
        println!("   + {:<20}: £{}", s.label, s.amount);
    }

    println!("   Fixed price   : {}", price(e.fixed_price));
    if let Some(d) = e.deposit {
        println!("   Deposit       : £{d}");
    }

    if e.quote_only() {
        info("Drive time exceeds our standard radius. We'll contact you with a quote.");
    }
}
