use super::RouteSource;
use crate::core::postcode::Postcode;
use crate::errors::{AppError, AppResult};
use crate::models::base::{Base, RouteEstimate};
use std::collections::BTreeMap;

/// Outward code → (base name → minutes).
pub type StaticRoutes = BTreeMap<String, BTreeMap<String, f64>>;

/// Fixed drive-time table keyed by postcode district. Used offline and
/// wherever a live routing service is not wanted.
pub struct StaticRouteSource {
    routes: StaticRoutes,
}

impl StaticRouteSource {
    pub fn new(routes: StaticRoutes) -> Self {
        let routes = routes
            .into_iter()
            .map(|(outward, per_base)| (outward.trim().to_uppercase(), per_base))
            .collect();
        Self { routes }
    }
}

impl RouteSource for StaticRouteSource {
    fn route(&self, base: &Base, postcode: &Postcode) -> AppResult<RouteEstimate> {
        let per_base = self
            .routes
            .get(postcode.outward())
            .ok_or_else(|| AppError::Geocoding(format!("{postcode} is not in the route table")))?;

        let minutes = per_base.get(&base.name).copied().ok_or_else(|| {
            AppError::Routing(format!("no route from {} to {}", base.name, postcode))
        })?;

        if !minutes.is_finite() || minutes < 0.0 {
            return Err(AppError::Routing(format!(
                "route table holds an invalid drive time ({minutes}) for {} → {}",
                base.name, postcode
            )));
        }

        Ok(RouteEstimate {
            base: base.clone(),
            minutes,
            distance_km: None,
        })
    }
}
