//! rponto library root.
//! Exposes the CLI parser, the high-level run() function and the
//! internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::punch::PunchArgs;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub async fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Login { email, password } => {
            cli::commands::login::handle(cfg, email, password.as_deref()).await
        }
        Commands::Logout => cli::commands::logout::handle(),
        Commands::Status => cli::commands::status::handle(cfg).await,
        Commands::Punch {
            address,
            latitude,
            longitude,
            last,
            favorite,
        } => {
            let args = PunchArgs {
                address: address.clone(),
                latitude: *latitude,
                longitude: *longitude,
                last: *last,
                favorite: *favorite,
            };
            cli::commands::punch::handle(cfg, &args).await
        }
        Commands::Config { print_config, init } => {
            cli::commands::config::handle(cfg, *print_config, *init)
        }
    }
}

/// Entry point used by main.rs
pub async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load()?;
    dispatch(&cli, &cfg).await
}
