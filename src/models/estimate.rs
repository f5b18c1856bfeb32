use super::zone::ZoneId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Surcharge {
    pub label: String,
    pub amount: u32,
}

/// Priced, timed estimate for a bundle of services at one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingEstimate {
    pub zone_id: ZoneId,
    pub drive_minutes: f64,
    pub service_ids: Vec<String>,
    pub service_minutes: u32,
    pub travel_buffer_minutes: u32,
    pub total_minutes: u32,
    /// Longest booking notice required by any service in the bundle.
    pub min_notice_hours: u32,
    /// `None` for out-of-area requests, which are quoted by hand.
    pub fixed_price: Option<u32>,
    pub deposit: Option<u32>,
    pub surcharges: Vec<Surcharge>,
}

impl BookingEstimate {
    pub fn quote_only(&self) -> bool {
        self.fixed_price.is_none()
    }
}
