use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for tripoint
#[derive(Parser)]
#[command(
    name = "tripoint",
    version = env!("CARGO_PKG_VERSION"),
    about = "TriPoint Diagnostics: resolve drive-time zones and price callouts",
    long_about = None
)]
pub struct Cli {
    /// Override audit log database path
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the catalog file (zones, services, prices)
    #[arg(global = true, long = "catalog")]
    pub catalog: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the customer is: a known drive time or a postcode to route to.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct LocationArgs {
    /// One-way drive time from the nearest base, in minutes
    #[arg(long = "minutes", short = 'm', allow_negative_numbers = true)]
    pub minutes: Option<f64>,

    /// Customer postcode (e.g. "ME19 4HT")
    #[arg(long = "postcode", short = 'p')]
    pub postcode: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and audit log database
    Init,

    /// Show or validate the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Validate the configuration and the catalog it points to"
        )]
        check: bool,

        #[arg(long = "show-catalog", help = "Print the active catalog as YAML")]
        print_catalog: bool,
    },

    /// List the zone catalog
    Zones,

    /// List service prices per zone
    Pricing {
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Resolve the zone for a drive time or postcode
    Zone {
        #[command(flatten)]
        location: LocationArgs,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Quote one service at a location
    Quote {
        #[arg(long = "service", short = 's', help = "Service id (see `tripoint pricing`)")]
        service: String,

        #[command(flatten)]
        location: LocationArgs,

        #[arg(long, help = "Print the quote as JSON")]
        json: bool,
    },

    /// Price and time a booking for one or more services
    Estimate {
        #[arg(
            long = "services",
            short = 's',
            value_delimiter = ',',
            required = true,
            help = "Comma-separated service ids"
        )]
        services: Vec<String>,

        #[command(flatten)]
        location: LocationArgs,

        #[arg(long = "start", help = "Local start time (HH:MM) for time-band surcharges")]
        start: Option<String>,

        #[arg(long, help = "Print the estimate as JSON")]
        json: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log table")]
        print: bool,
    },
}
