use super::zone::ZoneId;
use serde::Serialize;

/// A priced quote for one service in one zone.
/// Built on demand and never stored: drive times change, so it is always
/// recomputed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub service_id: String,
    pub zone_id: ZoneId,
    /// `None` when the zone is the catch-all.
    pub price: Option<u32>,
    pub included_minutes: u32,
    pub quote_only: bool,
}

impl Quote {
    pub fn price_display(&self) -> String {
        match self.price {
            Some(p) => format!("£{p}"),
            None => "Quote only".to_string(),
        }
    }
}
