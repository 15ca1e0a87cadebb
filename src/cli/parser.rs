use clap::{Parser, Subcommand};

/// Command-line interface definition for rponto
/// CLI client for the PontoMais time clock
#[derive(Parser)]
#[command(
    name = "rponto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track today's punches, projected end of shift and overtime limit against the PontoMais time clock",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in against the vendor API and persist the session
    Login {
        /// Account email (the vendor login)
        #[arg(long)]
        email: String,

        /// Password; read interactively from stdin when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the persisted session
    Logout,

    /// Show today's punches, worked time, expected end and overtime limit
    Status,

    /// Register a new punch
    Punch {
        /// Free-form address for the punch location
        #[arg(long)]
        address: Option<String>,

        /// Latitude for the punch location (requires --longitude)
        #[arg(long, requires = "longitude")]
        latitude: Option<f64>,

        /// Longitude for the punch location (requires --latitude)
        #[arg(long, requires = "latitude")]
        longitude: Option<f64>,

        /// Reuse the location of the last registered punch
        #[arg(long = "last")]
        last: bool,

        /// Use the n-th favorite location from the employee profile (1-based)
        #[arg(long = "favorite", value_name = "N")]
        favorite: Option<usize>,
    },

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
