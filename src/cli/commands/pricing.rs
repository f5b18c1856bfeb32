use crate::AppContext;
use crate::catalog::Catalog;
use crate::cli::parser::{Commands, OutputFormat};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::formatting::{mins2readable, price, zone_name};
use crate::utils::table::Table;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io;

/// Flat view of one price row for JSON output.
#[derive(Serialize)]
struct PriceRow<'a> {
    service_id: &'a str,
    label: &'a str,
    included_minutes: u32,
    prices: BTreeMap<String, u32>,
}

pub fn handle(cmd: &Commands, app: &AppContext) -> AppResult<()> {
    if let Commands::Pricing { format } = cmd {
        match format {
            OutputFormat::Table => print_table(&app.catalog),
            OutputFormat::Json => print_json(&app.catalog)?,
            OutputFormat::Csv => print_csv(&app.catalog)?,
        }
    }
    Ok(())
}

fn print_table(catalog: &Catalog) {
    let zones = catalog.bounded_zone_ids();
    header(format!("Service pricing (catalog {})", catalog.version));

    let mut headers = vec!["Service".to_string(), "Id".to_string()];
    headers.extend(zones.iter().map(|z| zone_name(*z)));
    headers.push("Includes".to_string());

    let mut table = Table::new(headers);
    for s in &catalog.services {
        let mut row = vec![s.label.clone(), s.service_id.clone()];
        row.extend(zones.iter().map(|z| price(s.price_for(*z))));
        row.push(format!("{} on-site", mins2readable(s.included_minutes)));
        table.add_row(row);
    }
    print!("{}", table.render());

    if let Some(catch_all) = catalog.catch_all() {
        println!("\n{}: quote only.", zone_name(catch_all.id));
    }
}

fn print_json(catalog: &Catalog) -> AppResult<()> {
    let rows: Vec<PriceRow> = catalog
        .services
        .iter()
        .map(|s| PriceRow {
            service_id: &s.service_id,
            label: &s.label,
            included_minutes: s.included_minutes,
            prices: s
                .price_per_zone
                .iter()
                .map(|(z, p)| (z.code().to_string(), *p))
                .collect(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn print_csv(catalog: &Catalog) -> AppResult<()> {
    let zones = catalog.bounded_zone_ids();
    let mut wtr = csv::Writer::from_writer(io::stdout());

    let mut headers = vec!["service_id".to_string(), "label".to_string()];
    headers.extend(zones.iter().map(|z| format!("zone_{}", z.code().to_lowercase())));
    headers.push("included_minutes".to_string());
    wtr.write_record(&headers).map_err(csv_error)?;

    for s in &catalog.services {
        let mut record = vec![s.service_id.clone(), s.label.clone()];
        record.extend(
            zones
                .iter()
                .map(|z| s.price_for(*z).map(|p| p.to_string()).unwrap_or_default()),
        );
        record.push(s.included_minutes.to_string());
        wtr.write_record(&record).map_err(csv_error)?;
    }

    wtr.flush()?;
    Ok(())
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::from(io::Error::other(format!("CSV write error: {e}")))
}
