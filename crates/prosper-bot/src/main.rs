//! Prosper tick trader - replay entry point
//!
//! Reads recorded harness ticks (JSON lines) and prints one diagnostic line
//! per tick to stdout. Operational logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use prosper_bot::{AppConfig, Replay};

/// Prosper tick trader replay
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via PROSPER_CONFIG env var)
    #[arg(short, long)]
    config: Option<String>,

    /// JSON-lines file of recorded ticks (default: stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    prosper_telemetry::init_logging()?;

    info!("Starting Prosper trader v{}", env!("CARGO_PKG_VERSION"));

    // CLI arg > PROSPER_CONFIG env var > default path > built-in defaults
    let config = match &args.config {
        Some(path) => {
            info!(config_path = %path, "Loading configuration");
            AppConfig::from_file(path)?
        }
        None => AppConfig::load()?,
    };
    info!(
        conversions = config.conversions,
        position_limit = %config.strategy.position_limit,
        enabled = ?config
            .strategy
            .enabled_products()
            .map(|p| p.symbol.as_str())
            .collect::<Vec<_>>(),
        "Configuration loaded"
    );

    let mut replay = Replay::from_config(&config)?;
    let stdout = io::stdout();

    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            replay.run(BufReader::new(file), stdout.lock())?
        }
        None => replay.run(io::stdin().lock(), stdout.lock())?,
    };

    summary.log();
    Ok(())
}
