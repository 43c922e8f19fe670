//! schedrec library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! reconciliation core.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod loader;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Reconcile { .. } => cli::commands::reconcile::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load_from(cli.config.as_deref())?;
    dispatch(&cli, &cfg)
}
