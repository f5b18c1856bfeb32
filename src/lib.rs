//! TriPoint quote library root.
//! Exposes the catalog, the zone/quote calculators, drive-time sources and
//! the CLI dispatcher.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod routing;
pub mod ui;
pub mod utils;

use catalog::Catalog;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Everything a command needs, built once by `run()`.
pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
}

impl AppContext {
    /// Load configuration, apply command-line overrides and load the catalog.
    pub fn init(cli: &Cli) -> AppResult<Self> {
        let mut config = Config::load()?;

        if let Some(custom_db) = &cli.db {
            config.database = custom_db.clone();
        }
        if let Some(custom_catalog) = &cli.catalog {
            config.catalog = Some(custom_catalog.clone());
        }

        let catalog = Catalog::load(config.catalog_path().as_deref())?;

        Ok(Self { config, catalog })
    }

    pub fn database_path(&self) -> PathBuf {
        self.config.database_path()
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, app: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, app),
        Commands::Zones => cli::commands::zones::handle(app),
        Commands::Pricing { .. } => cli::commands::pricing::handle(&cli.command, app),
        Commands::Zone { .. } => cli::commands::zone::handle(&cli.command, app),
        Commands::Quote { .. } => cli::commands::quote::handle(&cli.command, app),
        Commands::Estimate { .. } => cli::commands::estimate::handle(&cli.command, app),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, app),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // init must work before any config or catalog exists
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(&cli);
    }

    let app = AppContext::init(&cli)?;
    dispatch(&cli, &app)
}
