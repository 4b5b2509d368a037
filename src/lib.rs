//! rPetlog library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! parsing / forecasting modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Parse { .. } => cli::commands::parse::handle(&cli.command, cfg),
        Commands::Predict { .. } => cli::commands::predict::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once; --config overrides the standard location
    let cfg = match &cli.config {
        Some(path) => Config::load_from(&expand_tilde(path))?,
        None => Config::load()?,
    };

    dispatch(&cli, &cfg)
}
