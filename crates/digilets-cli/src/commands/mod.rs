//! CLI command implementations for DigiLeTs

use clap::{Parser, Subcommand};
use crate::error::CliResult;

pub mod completions;
pub mod dynamics;
pub mod export;
pub mod init;
pub mod inspect;
pub mod viz;

/// DigiLeTs - CLI-first handwriting trajectory tooling
#[derive(Parser, Debug)]
#[command(
    name = "digilets",
    version,
    about = "CLI-first handwriting trajectory tooling",
    long_about = "DigiLeTs provides easy, reproducible access to handwriting \
                  recordings through a powerful command-line interface. Inspect \
                  corpora, export preprocessed training datasets, summarize pen \
                  dynamics, and visualize individual trajectories."
)]
pub struct DigiletsCli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<std::path::PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new DigiLeTs workspace
    #[command(alias = "new")]
    Init(init::InitCommand),

    /// Inspect workspace, corpus, or recording files
    Inspect(inspect::InspectCommand),

    /// Export the preprocessed corpus as a training dataset
    Export(export::ExportCommand),

    /// Summarize velocity and pressure dynamics for a symbol
    Dynamics(dynamics::DynamicsCommand),

    /// Visualization and analysis tools
    #[command(alias = "vis")]
    Viz(viz::VizCommand),

    /// Generate shell completion scripts
    Completions(completions::CompletionsCommand),
}

impl DigiletsCli {
    /// Execute the CLI command
    pub async fn execute(self) -> CliResult<()> {
        // Set up workspace and config
        let workspace = self.workspace.unwrap_or_else(|| std::env::current_dir().unwrap());
        let config = self.config;

        // Execute the appropriate subcommand
        match self.command {
            Commands::Init(cmd) => cmd.execute(workspace, config).await,
            Commands::Inspect(cmd) => cmd.execute(workspace, config).await,
            Commands::Export(cmd) => cmd.execute(workspace, config).await,
            Commands::Dynamics(cmd) => cmd.execute(workspace, config).await,
            Commands::Viz(cmd) => cmd.execute(workspace, config).await,
            Commands::Completions(cmd) => cmd.execute().await,
        }
    }
}
