use crate::core::postcode::Postcode;
use crate::errors::{AppError, AppResult};
use crate::models::base::{Base, RouteEstimate};
use crate::routing::RouteSource;

/// Picks the fastest base for a postcode.
pub struct DriveTimeResolver<'a> {
    bases: &'a [Base],
    source: &'a dyn RouteSource,
}

impl<'a> DriveTimeResolver<'a> {
    pub fn new(bases: &'a [Base], source: &'a dyn RouteSource) -> Self {
        Self { bases, source }
    }

    /// Query every base and keep the shortest drive.
    ///
    /// A base whose route fails is skipped. If no base produced a route the
    /// postcode is reported as unlocatable when any base said so, otherwise
    /// as unroutable. Nothing here ever falls back to a default zone.
    pub fn best_route(&self, postcode: &Postcode) -> AppResult<RouteEstimate> {
        let mut best: Option<RouteEstimate> = None;
        let mut geocoding: Option<AppError> = None;
        let mut routing: Option<AppError> = None;

        for base in self.bases {
            match self.source.route(base, postcode) {
                Ok(route) => {
                    if best.as_ref().is_none_or(|b| route.minutes < b.minutes) {
                        best = Some(route);
                    }
                }
                Err(e @ AppError::Geocoding(_)) => geocoding = Some(e),
                Err(e @ AppError::Routing(_)) => routing = Some(e),
                Err(other) => return Err(other),
            }
        }

        match (best, geocoding, routing) {
            (Some(route), _, _) => Ok(route),
            (None, Some(e), _) => Err(e),
            (None, None, Some(e)) => Err(e),
            (None, None, None) => Err(AppError::Routing(format!(
                "no operating bases configured to reach {postcode}"
            ))),
        }
    }

    /// Validate raw input and resolve the best route in one step.
    pub fn best_route_for(&self, raw_postcode: &str) -> AppResult<(Postcode, RouteEstimate)> {
        let postcode = Postcode::parse(raw_postcode)?;
        let route = self.best_route(&postcode)?;
        Ok((postcode, route))
    }
}
