//! Load-time checks for catalog data.

use super::Catalog;
use crate::errors::{AppError, AppResult};
use std::collections::HashSet;

pub(super) fn check(catalog: &Catalog) -> AppResult<()> {
    check_bases(catalog)?;
    check_zones(catalog)?;
    check_services(catalog)?;
    check_rules(catalog)
}

fn fail<T>(msg: String) -> AppResult<T> {
    Err(AppError::Catalog(msg))
}

fn check_bases(catalog: &Catalog) -> AppResult<()> {
    if catalog.bases.is_empty() {
        return fail("at least one base is required".into());
    }
    for base in &catalog.bases {
        if base.postcode.trim().is_empty() {
            return fail(format!("base '{}' has no postcode", base.name));
        }
    }
    Ok(())
}

fn check_zones(catalog: &Catalog) -> AppResult<()> {
    let zones = &catalog.zones;

    if zones.is_empty() {
        return fail("zone list is empty".into());
    }

    let catch_alls = zones.iter().filter(|z| z.is_catch_all()).count();
    if catch_alls != 1 {
        return fail(format!(
            "exactly one catch-all zone is required, found {catch_alls}"
        ));
    }
    if !zones[zones.len() - 1].is_catch_all() {
        return fail("the catch-all zone must be last".into());
    }

    let mut seen = HashSet::new();
    for zone in zones {
        if !seen.insert(zone.id) {
            return fail(format!("zone {} is listed twice", zone.id));
        }
    }

    // Bounded zones strictly ascending, in ZoneId order.
    let bounded: Vec<_> = zones.iter().filter(|z| !z.is_catch_all()).collect();
    for pair in bounded.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if lo.max_drive_minutes >= hi.max_drive_minutes {
            return fail(format!(
                "zone {} bound must be lower than zone {} bound",
                lo.id, hi.id
            ));
        }
        if lo.id >= hi.id {
            return fail(format!("zone {} must come after zone {}", lo.id, hi.id));
        }
    }

    Ok(())
}

fn check_services(catalog: &Catalog) -> AppResult<()> {
    let bounded = catalog.bounded_zone_ids();
    let mut seen = HashSet::new();

    for service in &catalog.services {
        if service.service_id.trim().is_empty() {
            return fail(format!("service '{}' has an empty id", service.label));
        }
        if !seen.insert(service.service_id.as_str()) {
            return fail(format!("service '{}' is listed twice", service.service_id));
        }

        for zone in &bounded {
            if service.price_for(*zone).is_none() {
                return fail(format!(
                    "service '{}' has no price for zone {}",
                    service.service_id, zone
                ));
            }
        }

        if let Some(extra) = service
            .price_per_zone
            .keys()
            .find(|id| !bounded.contains(*id))
        {
            return fail(format!(
                "service '{}' prices zone {} which is quote only or unknown",
                service.service_id, extra
            ));
        }

        // A farther zone never costs less.
        let prices: Vec<u32> = bounded
            .iter()
            .filter_map(|z| service.price_for(*z))
            .collect();
        if prices.windows(2).any(|w| w[0] > w[1]) {
            return fail(format!(
                "service '{}' prices decrease with distance",
                service.service_id
            ));
        }
    }

    Ok(())
}

fn check_rules(catalog: &Catalog) -> AppResult<()> {
    let rules = &catalog.rules;
    if rules.min_travel_buffer > rules.max_travel_buffer {
        return fail(format!(
            "min_travel_buffer ({}) exceeds max_travel_buffer ({})",
            rules.min_travel_buffer, rules.max_travel_buffer
        ));
    }
    if rules.early_band_before_hour > 24
        || rules.evening_band_from_hour > 24
        || rules.late_call_hour > 23
    {
        return fail("time band hours must be within a day".into());
    }
    Ok(())
}
