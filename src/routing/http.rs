use super::RouteSource;
use crate::core::postcode::Postcode;
use crate::errors::{AppError, AppResult};
use crate::models::base::{Base, RouteEstimate};
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Body returned by the routing endpoint.
#[derive(Debug, Deserialize)]
struct RouteResponse {
    time_minutes: f64,
    #[serde(default)]
    distance_km: Option<f64>,
}

/// Queries a routing backend over HTTP:
/// `GET {endpoint}?from=<base postcode>&to=<postcode>`.
pub struct HttpRouteSource {
    client: Client,
    endpoint: Url,
    timeout_secs: u64,
}

impl HttpRouteSource {
    pub fn new(endpoint: &str, timeout_secs: u64) -> AppResult<Self> {
        if timeout_secs == 0 {
            return Err(AppError::Config("routing timeout must be at least 1 second".into()));
        }

        let endpoint = Url::parse(endpoint)
            .map_err(|e| AppError::Config(format!("invalid routing endpoint '{endpoint}': {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            timeout_secs,
        })
    }

    fn request_url(&self, base: &Base, postcode: &Postcode) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("from", &base.postcode)
            .append_pair("to", postcode.as_str());
        url
    }
}

impl RouteSource for HttpRouteSource {
    fn route(&self, base: &Base, postcode: &Postcode) -> AppResult<RouteEstimate> {
        let url = self.request_url(base, postcode);

        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                AppError::Routing(format!(
                    "{} → {} timed out after {}s",
                    base.name, postcode, self.timeout_secs
                ))
            } else {
                AppError::Routing(format!("{} → {}: {}", base.name, postcode, e))
            }
        })?;

        match response.status() {
            s if s.is_success() => {}
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::UNPROCESSABLE_ENTITY => {
                return Err(AppError::Geocoding(format!(
                    "{postcode} could not be located"
                )));
            }
            other => {
                return Err(AppError::Routing(format!(
                    "{} → {}: routing service answered {}",
                    base.name, postcode, other
                )));
            }
        }

        let body: RouteResponse = response.json().map_err(|e| {
            AppError::Routing(format!("unreadable routing response for {postcode}: {e}"))
        })?;

        if !body.time_minutes.is_finite() || body.time_minutes < 0.0 {
            return Err(AppError::Routing(format!(
                "routing service returned an invalid drive time ({}) for {}",
                body.time_minutes, postcode
            )));
        }

        Ok(RouteEstimate {
            base: base.clone(),
            minutes: body.time_minutes,
            distance_km: body.distance_km,
        })
    }
}
