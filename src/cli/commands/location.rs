//! Turns `--minutes` / `--postcode` into a drive time.

use crate::AppContext;
use crate::cli::parser::LocationArgs;
use crate::core::drive_time::DriveTimeResolver;
use crate::core::postcode::Postcode;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::base::RouteEstimate;
use crate::routing;

/// Drive time for a request, with the route it came from when a postcode
/// was given.
#[derive(Debug)]
pub struct Located {
    pub minutes: f64,
    pub postcode: Option<Postcode>,
    pub route: Option<RouteEstimate>,
}

impl Located {
    /// Short description for the audit log.
    pub fn describe(&self) -> String {
        match (&self.postcode, &self.route) {
            (Some(pc), Some(route)) => {
                format!("{} ({:.1} min from {})", pc, route.minutes, route.base.name)
            }
            _ => format!("{:.1} min", self.minutes),
        }
    }
}

pub fn locate(args: &LocationArgs, app: &AppContext) -> AppResult<Located> {
    if let Some(minutes) = args.minutes {
        return Ok(Located {
            minutes,
            postcode: None,
            route: None,
        });
    }

    let raw = args
        .postcode
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("either --minutes or --postcode is required".into()))?;

    let source = routing::from_config(&app.config.routing)?;
    let resolver = DriveTimeResolver::new(&app.catalog.bases, source.as_ref());

    match resolver.best_route_for(raw) {
        Ok((postcode, route)) => Ok(Located {
            minutes: route.minutes,
            postcode: Some(postcode),
            route: Some(route),
        }),
        Err(e) => {
            if e.is_contact_us() {
                log::record(&app.database_path(), "contact_us", raw.trim(), &e.to_string());
            }
            Err(e)
        }
    }
}
