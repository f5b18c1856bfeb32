use super::zone::ZoneId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price table row for one service offering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePriceEntry {
    pub service_id: String,
    pub label: String,
    /// Whole-unit prices per bounded zone. The catch-all never appears here.
    pub price_per_zone: BTreeMap<ZoneId, u32>,
    /// On-site time bundled into the price.
    pub included_minutes: u32,
    #[serde(default = "default_travel_buffer")]
    pub travel_buffer_minutes: u32,
    #[serde(default = "default_min_notice")]
    pub min_notice_hours: u32,
}

fn default_travel_buffer() -> u32 {
    20
}
fn default_min_notice() -> u32 {
    24
}

impl ServicePriceEntry {
    /// Build an entry priced for zones A/B/C.
    pub fn new(
        service_id: &str,
        label: &str,
        prices: [u32; 3],
        included_minutes: u32,
        travel_buffer_minutes: u32,
        min_notice_hours: u32,
    ) -> Self {
        let price_per_zone = BTreeMap::from([
            (ZoneId::A, prices[0]),
            (ZoneId::B, prices[1]),
            (ZoneId::C, prices[2]),
        ]);

        Self {
            service_id: service_id.to_string(),
            label: label.to_string(),
            price_per_zone,
            included_minutes,
            travel_buffer_minutes,
            min_notice_hours,
        }
    }

    pub fn price_for(&self, zone: ZoneId) -> Option<u32> {
        self.price_per_zone.get(&zone).copied()
    }
}
