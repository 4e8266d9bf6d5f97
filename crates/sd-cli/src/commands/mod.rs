//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod export;
pub mod formats;
pub mod inspect;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sd_core::config::Config;

/// sharedrop - ShareDrop report exporter
#[derive(Debug, Parser)]
#[command(name = "sharedrop")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export an extraction result to a file format
    Export(export::ExportArgs),

    /// Summarize an extraction result
    Inspect(inspect::InspectArgs),

    /// List available export formats
    Formats,
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;

    // Dispatch to command handler
    match cli.command {
        Commands::Export(args) => export::execute(args, &config),
        Commands::Inspect(args) => inspect::execute(args),
        Commands::Formats => formats::execute(),
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let text = std::fs::read_to_string(path)
        .context(format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&text).context(format!("Invalid config file {}", path.display()))
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
