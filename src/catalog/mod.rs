//! Zone catalog and service price table.
//!
//! The catalog is fixed, versioned data: either the built-in tables or a
//! YAML file referenced by the configuration. Every way of obtaining a
//! `Catalog` runs [`Catalog::validate`], so lookups never meet a missing
//! price or an unsorted zone list.

mod builtin;
mod validate;

use crate::errors::{AppError, AppResult};
use crate::models::base::Base;
use crate::models::service::ServicePriceEntry;
use crate::models::zone::{Zone, ZoneId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Surcharge, deposit and buffer constants used by booking estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Starts before this hour fall in the early-bird band.
    pub early_band_before_hour: u32,
    /// Starts at or after this hour fall in the evening band.
    pub evening_band_from_hour: u32,
    pub time_band_surcharge: u32,
    pub late_call_hour: u32,
    pub late_call_surcharge: u32,
    pub late_call_service: String,
    pub standard_deposit: u32,
    pub higher_deposit: u32,
    /// Visits resolved to this zone pay the higher deposit.
    pub higher_deposit_zone: ZoneId,
    /// Bundles containing this service always pay the higher deposit.
    pub priority_service: String,
    pub min_travel_buffer: u32,
    pub max_travel_buffer: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            early_band_before_hour: 8,
            evening_band_from_hour: 19,
            time_band_surcharge: 20,
            late_call_hour: 21,
            late_call_surcharge: 40,
            late_call_service: "diagnostic-callout".to_string(),
            standard_deposit: 30,
            higher_deposit: 50,
            higher_deposit_zone: ZoneId::C,
            priority_service: "vor-priority-triage".to_string(),
            min_travel_buffer: 30,
            max_travel_buffer: 180,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub bases: Vec<Base>,
    pub zones: Vec<Zone>,
    pub services: Vec<ServicePriceEntry>,
    #[serde(default)]
    pub rules: PricingRules,
}

impl Catalog {
    /// The published tables.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// Parse and validate a YAML catalog.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let catalog: Catalog = serde_yaml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file, or the built-in tables when `path` is `None`.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|e| {
                    AppError::Catalog(format!("cannot read {}: {}", p.display(), e))
                })?;
                Self::from_yaml(&content)
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        validate::check(self)
    }

    /// The unbounded terminal zone.
    pub fn catch_all(&self) -> Option<&Zone> {
        self.zones.last().filter(|z| z.is_catch_all())
    }

    pub fn zone(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| z.id == id)
    }

    pub fn service(&self, service_id: &str) -> AppResult<&ServicePriceEntry> {
        self.services
            .iter()
            .find(|s| s.service_id == service_id)
            .ok_or_else(|| AppError::UnknownService(service_id.to_string()))
    }

    /// Zone ids that carry a fixed price, in catalog order.
    pub fn bounded_zone_ids(&self) -> Vec<ZoneId> {
        self.zones
            .iter()
            .filter(|z| !z.is_catch_all())
            .map(|z| z.id)
            .collect()
    }
}
