use crate::catalog::Catalog;
use crate::errors::{AppError, AppResult};
use crate::models::quote::Quote;
use crate::models::zone::ZoneId;

/// Price one service in one zone.
///
/// The catch-all zone yields a quote-only result (`price: None`), which is a
/// normal outcome: out-of-area customers are asked to get in touch.
pub fn build_quote(catalog: &Catalog, service_id: &str, zone_id: ZoneId) -> AppResult<Quote> {
    let service = catalog.service(service_id)?;

    let zone = catalog
        .zone(zone_id)
        .ok_or_else(|| AppError::InvalidInput(format!("zone {zone_id} is not in the catalog")))?;

    let price = match service.price_for(zone_id) {
        Some(p) => Some(p),
        None if zone.is_catch_all() => None,
        None => {
            return Err(AppError::Catalog(format!(
                "service '{service_id}' has no price for zone {zone_id}"
            )));
        }
    };

    Ok(Quote {
        service_id: service.service_id.clone(),
        zone_id,
        price,
        included_minutes: service.included_minutes,
        quote_only: price.is_none(),
    })
}
