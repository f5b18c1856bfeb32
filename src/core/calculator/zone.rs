//! Drive time → zone resolution.

use crate::catalog::Catalog;
use crate::errors::{AppError, AppResult};
use crate::models::zone::Zone;

/// Reject negative and non-numeric drive times before any lookup.
pub fn validate_minutes(drive_minutes: f64) -> AppResult<f64> {
    if drive_minutes.is_nan() || drive_minutes.is_infinite() {
        return Err(AppError::InvalidInput(format!(
            "drive time must be a number of minutes, got {drive_minutes}"
        )));
    }
    if drive_minutes < 0.0 {
        return Err(AppError::InvalidInput(format!(
            "drive time cannot be negative ({drive_minutes} min)"
        )));
    }
    Ok(drive_minutes)
}

/// First zone, in ascending order, whose bound covers `drive_minutes`.
///
/// Bounds are inclusive on the lower zone: with Zone A capped at 25 minutes,
/// a 25-minute drive is Zone A. Anything past the last bound falls into the
/// catch-all, which `Zone::contains` accepts unconditionally.
pub fn resolve_zone(catalog: &Catalog, drive_minutes: f64) -> AppResult<&Zone> {
    let minutes = validate_minutes(drive_minutes)?;

    catalog
        .zones
        .iter()
        .find(|zone| zone.contains(minutes))
        .ok_or_else(|| AppError::Catalog("no catch-all zone configured".into()))
}
