use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPetlog
/// Reads chat-log exports of pet bathroom events and forecasts the next one
#[derive(Parser)]
#[command(
    name = "rpetlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Forecast your pet's next bathroom break from a chat-log export",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Show the effective configuration
    Config {
        /// Print the current configuration as YAML
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Parse a chat export and show the recognised events
    Parse {
        /// Chat export to read (default: stdin)
        #[arg(long, short, value_name = "FILE")]
        file: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: ExportFormat,

        /// Write the output to this file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,

        /// Only show the first N records
        #[arg(long)]
        limit: Option<usize>,

        /// Overwrite the output file without asking
        #[arg(long, short = 'F')]
        force: bool,
    },

    /// Predict the next pee and poop
    Predict {
        /// Chat export to read (default: stdin)
        #[arg(long, short, value_name = "FILE")]
        file: Option<String>,

        /// Pretend the current time is this (YYYY-MM-DD HH:MM)
        #[arg(long, value_name = "DATETIME")]
        now: Option<String>,

        /// Seed for the regressor initialisation and jitter
        #[arg(long)]
        seed: Option<u64>,

        /// Print the forecast as JSON
        #[arg(long)]
        json: bool,

        /// Do not print the preview of parsed records
        #[arg(long = "no-preview")]
        no_preview: bool,
    },
}
