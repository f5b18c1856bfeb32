//! Formatting utilities used for CLI output.

use crate::models::zone::ZoneId;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Whole pounds, or the quote-only marker.
pub fn price(value: Option<u32>) -> String {
    match value {
        Some(p) => format!("£{p}"),
        None => "Quote only".to_string(),
    }
}

/// Fractional drive minutes as shown to customers (`23.5 mins`).
pub fn drive_minutes(mins: f64) -> String {
    if mins.fract() == 0.0 {
        format!("{mins:.0} mins")
    } else {
        format!("{mins:.1} mins")
    }
}

/// On-site time as `1h 15m` / `45m`.
pub fn mins2readable(mins: u32) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;
    if hours == 0 {
        format!("{minutes}m")
    } else {
        format!("{hours}h {minutes:02}m")
    }
}

/// "Zone A" / "Out of area".
pub fn zone_name(id: ZoneId) -> String {
    if id.is_catch_all() {
        id.code().to_string()
    } else {
        format!("Zone {}", id.code())
    }
}
