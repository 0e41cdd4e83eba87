//! # DigiLeTs CLI - Command Line Interface for Handwriting Data
//!
//! The CLI-first interface to the DigiLeTs trajectory tooling.
//! Provides easy, reproducible access to corpus inspection, dataset
//! export, dynamics summaries, and trajectory visualization.

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod workspace;

use commands::DigiletsCli;
use error::CliResult;

#[tokio::main]
async fn main() -> CliResult<()> {
    // Initialize logging with environment variable support
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Parse CLI arguments
    let cli = DigiletsCli::parse();

    // Execute the command
    if let Err(err) = cli.execute().await {
        error!("Command failed: {}", err);
        std::process::exit(1);
    }

    Ok(())
}
