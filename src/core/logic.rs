use crate::catalog::Catalog;
use crate::core::calculator::{estimate, quote, zone};
use crate::errors::AppResult;
use crate::models::estimate::BookingEstimate;
use crate::models::quote::Quote;
use crate::models::zone::{Zone, ZoneId};
use chrono::NaiveTime;

/// Entry points combining the calculators over one catalog.
pub struct Core;

impl Core {
    pub fn resolve_zone(catalog: &Catalog, drive_minutes: f64) -> AppResult<&Zone> {
        zone::resolve_zone(catalog, drive_minutes)
    }

    pub fn quote(catalog: &Catalog, service_id: &str, zone_id: ZoneId) -> AppResult<Quote> {
        quote::build_quote(catalog, service_id, zone_id)
    }

    /// Resolve the zone for a drive time, then price the service there.
    pub fn quote_for_drive_time(
        catalog: &Catalog,
        service_id: &str,
        drive_minutes: f64,
    ) -> AppResult<Quote> {
        // Unknown services fail before the drive time is even looked at.
        catalog.service(service_id)?;
        let zone = zone::resolve_zone(catalog, drive_minutes)?;
        quote::build_quote(catalog, service_id, zone.id)
    }

    pub fn estimate(
        catalog: &Catalog,
        service_ids: &[String],
        drive_minutes: f64,
        start: Option<NaiveTime>,
    ) -> AppResult<BookingEstimate> {
        estimate::build_estimate(catalog, service_ids, drive_minutes, start)
    }
}
