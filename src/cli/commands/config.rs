use crate::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, app: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        print_catalog,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            println!("{}", serde_yaml::to_string(&app.config)?);
        }

        if *print_catalog {
            println!("{}", app.catalog.to_yaml()?);
        }

        if *check {
            app.config.check()?;
            // The catalog was validated on load; re-run for an explicit report.
            app.catalog.validate()?;

            let source = match app.config.catalog_path() {
                Some(p) => p.display().to_string(),
                None => "built-in".to_string(),
            };
            info(format!(
                "Catalog {} ({}): {} zones, {} services, {} bases",
                app.catalog.version,
                source,
                app.catalog.zones.len(),
                app.catalog.services.len(),
                app.catalog.bases.len()
            ));
            success("Configuration is valid");
        }
    }

    Ok(())
}
