//! Drive-time sources.
//!
//! The calculator never computes routes itself. A `RouteSource` turns a
//! base and a postcode into a one-way drive time, or fails with
//! `AppError::Geocoding` (postcode not found) / `AppError::Routing`
//! (no route, transport failure, timeout).

pub mod http;
pub mod static_table;

use crate::config::{RoutingConfig, RoutingProvider};
use crate::core::postcode::Postcode;
use crate::errors::AppResult;
use crate::models::base::{Base, RouteEstimate};

pub use http::HttpRouteSource;
pub use static_table::StaticRouteSource;

pub trait RouteSource {
    fn route(&self, base: &Base, postcode: &Postcode) -> AppResult<RouteEstimate>;
}

/// Build the source selected in the configuration.
pub fn from_config(cfg: &RoutingConfig) -> AppResult<Box<dyn RouteSource>> {
    match cfg.provider {
        RoutingProvider::Http => Ok(Box::new(HttpRouteSource::new(
            &cfg.endpoint,
            cfg.timeout_secs,
        )?)),
        RoutingProvider::Static => Ok(Box::new(StaticRouteSource::new(
            cfg.static_routes.clone(),
        ))),
    }
}
