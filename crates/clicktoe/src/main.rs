//! Clicktoe - windowed two-player tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use clicktoe::DisplayConfig;
use cli::Cli;
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_file.as_deref())?;

    info!("Starting clicktoe");

    let config = load_config(&cli.config, cli.font)?;
    clicktoe::run(config)
}

#[instrument(skip(font))]
fn load_config(path: &Path, font: Option<std::path::PathBuf>) -> Result<DisplayConfig> {
    let config = DisplayConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))?
        .with_font_path(font);
    Ok(config)
}

fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,clicktoe=debug,clicktoe_core=debug"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    info!("Tracing initialized");
    Ok(())
}
