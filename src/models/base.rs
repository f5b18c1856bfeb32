use serde::{Deserialize, Serialize};

/// Fixed origin from which drive time is measured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Base {
    pub name: String,
    pub postcode: String,
}

impl Base {
    pub fn new(name: &str, postcode: &str) -> Self {
        Self {
            name: name.to_string(),
            postcode: postcode.to_string(),
        }
    }
}

/// One-way route from a base, as reported by a route source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEstimate {
    pub base: Base,
    pub minutes: f64,
    pub distance_km: Option<f64>,
}
