use crate::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::paint_zone;
use crate::utils::formatting::zone_name;
use crate::utils::table::Table;

pub fn handle(app: &AppContext) -> AppResult<()> {
    header(format!("Coverage zones (catalog {})", app.catalog.version));

    let mut table = Table::new(["Zone", "Drive time", "Up to", "Note"]);
    for zone in &app.catalog.zones {
        table.add_row(vec![
            zone_name(zone.id),
            zone.label.clone(),
            zone.max_drive_minutes
                .map(|m| format!("{m} min"))
                .unwrap_or_else(|| "-".to_string()),
            zone.note.clone(),
        ]);
    }
    print!("{}", table.render());

    let bases: Vec<String> = app
        .catalog
        .bases
        .iter()
        .map(|b| format!("{} ({})", b.name, b.postcode))
        .collect();
    println!("\nDrive time is measured from the nearest base: {}", bases.join(", "));

    if let Some(catch_all) = app.catalog.catch_all() {
        println!(
            "{}",
            paint_zone(
                catch_all.id,
                &format!("{}: no fixed price, contact us for a quote.", zone_name(catch_all.id))
            )
        );
    }

    Ok(())
}
