//! Multi-service booking estimate: bundle price, time-band surcharges,
//! deposit and time on the road.

use super::zone::resolve_zone;
use crate::catalog::{Catalog, PricingRules};
use crate::errors::{AppError, AppResult};
use crate::models::estimate::{BookingEstimate, Surcharge};
use crate::models::service::ServicePriceEntry;
use crate::models::zone::ZoneId;
use chrono::{NaiveTime, Timelike};

/// Look up every requested service, reporting all unknown ids at once.
pub fn service_bundle<'a>(
    catalog: &'a Catalog,
    service_ids: &[String],
) -> AppResult<Vec<&'a ServicePriceEntry>> {
    if service_ids.is_empty() {
        return Err(AppError::InvalidInput("at least one service is required".into()));
    }

    let unknown: Vec<&str> = service_ids
        .iter()
        .filter(|id| catalog.service(id).is_err())
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        return Err(AppError::UnknownService(unknown.join(", ")));
    }

    service_ids.iter().map(|id| catalog.service(id)).collect()
}

/// Travel buffer = rounded drive time + per-service buffers, clamped.
pub fn travel_buffer(rules: &PricingRules, services: &[&ServicePriceEntry], drive_minutes: f64) -> u32 {
    // f64 throughout: drive time is any finite value.
    let service_buffer: f64 = services
        .iter()
        .map(|s| f64::from(s.travel_buffer_minutes))
        .sum();
    let total = drive_minutes.round() + service_buffer;

    total
        .max(f64::from(rules.min_travel_buffer))
        .min(f64::from(rules.max_travel_buffer)) as u32
}

/// Surcharges for a visit starting at `start`.
pub fn surcharges(
    rules: &PricingRules,
    services: &[&ServicePriceEntry],
    start: NaiveTime,
) -> Vec<Surcharge> {
    let hour = start.hour();
    let mut out = Vec::new();

    if hour < rules.early_band_before_hour || hour >= rules.evening_band_from_hour {
        out.push(Surcharge {
            label: "Early-bird / evening time band".into(),
            amount: rules.time_band_surcharge,
        });
    }

    if hour == rules.late_call_hour
        && services
            .iter()
            .any(|s| s.service_id == rules.late_call_service)
    {
        out.push(Surcharge {
            label: "Late call".into(),
            amount: rules.late_call_surcharge,
        });
    }

    out
}

fn deposit(rules: &PricingRules, zone: ZoneId, service_ids: &[String]) -> u32 {
    if zone == rules.higher_deposit_zone
        || service_ids.iter().any(|id| *id == rules.priority_service)
    {
        rules.higher_deposit
    } else {
        rules.standard_deposit
    }
}

pub fn build_estimate(
    catalog: &Catalog,
    service_ids: &[String],
    drive_minutes: f64,
    start: Option<NaiveTime>,
) -> AppResult<BookingEstimate> {
    let services = service_bundle(catalog, service_ids)?;
    let zone = resolve_zone(catalog, drive_minutes)?;
    let rules = &catalog.rules;

    let service_minutes: u32 = services.iter().map(|s| s.included_minutes).sum();
    let travel_buffer_minutes = travel_buffer(rules, &services, drive_minutes);

    let (fixed_price, deposit, applied) = if zone.is_catch_all() {
        (None, None, Vec::new())
    } else {
        let base_price: u32 = services
            .iter()
            .map(|s| {
                s.price_for(zone.id).ok_or_else(|| {
                    AppError::Catalog(format!(
                        "service '{}' has no price for zone {}",
                        s.service_id, zone.id
                    ))
                })
            })
            .sum::<AppResult<u32>>()?;

        let applied = match start {
            Some(t) => surcharges(rules, &services, t),
            None => Vec::new(),
        };
        let extra: u32 = applied.iter().map(|s| s.amount).sum();

        (
            Some(base_price + extra),
            Some(deposit(rules, zone.id, service_ids)),
            applied,
        )
    };

    Ok(BookingEstimate {
        zone_id: zone.id,
        drive_minutes,
        service_ids: services.iter().map(|s| s.service_id.clone()).collect(),
        service_minutes,
        travel_buffer_minutes,
        total_minutes: service_minutes + travel_buffer_minutes,
        min_notice_hours: services
            .iter()
            .map(|s| s.min_notice_hours)
            .max()
            .unwrap_or(0),
        fixed_price,
        deposit,
        surcharges: applied,
    })
}
