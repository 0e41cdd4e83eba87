//! Workspace and corpus inspection commands

use clap::Args;
use console::style;
use std::path::{Path, PathBuf};
use tracing::info;

use digilets_format::{scan_blob, ScanReport};
use digilets_pipeline::dataset::discover_corpus_with;
use digilets_pipeline::TrajectoryDataset;

use crate::error::{CliError, CliResult};
use crate::workspace::{Workspace, WORKSPACE_FILE};

/// Inspect workspace, corpus, or recording files
#[derive(Args, Debug)]
pub struct InspectCommand {
    /// What to inspect: "workspace", "corpus", or a recording file path
    #[arg(default_value = "workspace")]
    pub target: String,

    /// Show detailed information
    #[arg(short, long)]
    pub detailed: bool,

    /// Show statistics
    #[arg(long)]
    pub stats: bool,
}

impl InspectCommand {
    pub async fn execute(
        self,
        workspace: PathBuf,
        _config: Option<PathBuf>,
    ) -> CliResult<()> {
        info!("Inspecting {}", self.target);

        match self.target.as_str() {
            "workspace" => self.inspect_workspace(workspace).await,
            "corpus" => self.inspect_corpus(workspace).await,
            target => self.inspect_file(Path::new(target)).await,
        }
    }

    async fn inspect_workspace(&self, workspace: PathBuf) -> CliResult<()> {
        let root = Workspace::find_workspace_root(&workspace).unwrap_or(workspace);
        info!("Workspace: {}", root.display());

        // Check for digilets.toml
        let config_path = root.join(WORKSPACE_FILE);
        if !config_path.exists() {
            info!("{} No {} configuration file found", style("✗").red(), WORKSPACE_FILE);
            info!("  Run 'digilets init <workspace_name>' to initialize");
            return Ok(());
        }

        info!("{} Configuration file found", style("✓").green());
        if self.detailed {
            let config_content = std::fs::read_to_string(&config_path)?;
            println!("Configuration:\n{}", config_content);
        }

        let ws = Workspace::new(&root)?;

        // Check directory structure
        for (name, path) in [("data", ws.data_dir()), ("exports", ws.exports_dir())] {
            if path.exists() {
                let file_count = std::fs::read_dir(&path)?.count();
                info!("{} {}: {} items", style("✓").green(), name, file_count);
            } else {
                info!("{} Missing directory: {}", style("✗").red(), name);
            }
        }

        if self.stats {
            let config = ws.config.preprocess.to_config()?;
            let (dataset, report) = TrajectoryDataset::load_dir(ws.data_dir(), &config)?;

            println!("\nWorkspace Statistics:");
            println!("  recording files:  {}", report.files_found);
            println!("  files loaded:     {}", report.files_loaded);
            println!("  files skipped:    {}", report.files_skipped);
            println!("  samples:          {}", dataset.len());
            println!("  trajectory lines: {}", report.scan.trajectory_lines);
            println!("  invalid lines:    {}", report.scan.invalid_lines);
        }

        Ok(())
    }

    async fn inspect_corpus(&self, workspace: PathBuf) -> CliResult<()> {
        let root = Workspace::find_workspace_root(&workspace).ok_or_else(|| {
            CliError::workspace(format!(
                "No {} found; run 'digilets init <workspace_name>' first",
                WORKSPACE_FILE
            ))
        })?;
        let ws = Workspace::new(&root)?;

        let corpus = &ws.config.corpus;
        let files = discover_corpus_with(
            ws.data_dir(),
            &corpus.corpus_suffix,
            &corpus.info_suffix,
        )?;

        println!("Corpus: {} recording files", files.len());

        let mut aggregate = ScanReport::default();
        for path in &files {
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    info!("{} {}: {}", style("✗").red(), path.display(), err);
                    continue;
                }
            };

            let scan = scan_blob(&text);
            aggregate.merge(&scan.report);

            if self.detailed {
                println!(
                    "  {}: {} trajectories, {} invalid lines",
                    path.display(),
                    scan.report.trajectory_lines,
                    scan.report.invalid_lines
                );
            }
        }

        println!("\nCorpus Summary:");
        println!("  lines:            {}", aggregate.lines);
        println!("  label lines:      {}", aggregate.label_lines);
        println!("  trajectory lines: {}", aggregate.trajectory_lines);
        println!("  invalid lines:    {}", aggregate.invalid_lines);
        println!("  parse failures:   {}", aggregate.parse_failures);

        if self.stats {
            let config = ws.config.preprocess.to_config()?;
            let (dataset, report) = TrajectoryDataset::load_dir(ws.data_dir(), &config)?;
            let max_label = dataset.iter().map(|s| s.label).max().unwrap_or(0);

            println!("\nDataset Statistics:");
            println!("  samples:     {}", report.samples);
            println!("  num steps:   {}", config.num_steps);
            println!("  max label:   {}", max_label);
        }

        Ok(())
    }

    async fn inspect_file(&self, path: &Path) -> CliResult<()> {
        if !path.is_file() {
            return Err(CliError::missing_resource(format!(
                "No recording file at {}",
                path.display()
            )));
        }

        let text = std::fs::read_to_string(path)?;
        let scan = scan_blob(&text);

        println!("File: {}", path.display());
        println!("  lines:            {}", scan.report.lines);
        println!("  label lines:      {}", scan.report.label_lines);
        println!("  trajectory lines: {}", scan.report.trajectory_lines);
        println!("  invalid lines:    {}", scan.report.invalid_lines);
        println!("  parse failures:   {}", scan.report.parse_failures);

        if self.stats && !scan.trajectories.is_empty() {
            let lengths: Vec<usize> = scan.trajectories.iter().map(|t| t.len()).collect();
            let min = lengths.iter().min().copied().unwrap_or(0);
            let max = lengths.iter().max().copied().unwrap_or(0);
            let mean = lengths.iter().sum::<usize>() as f32 / lengths.len() as f32;

            println!("\nTrajectory Lengths:");
            println!("  min:  {}", min);
            println!("  max:  {}", max);
            println!("  mean: {:.1}", mean);
        }

        if self.detailed {
            for (index, trajectory) in scan.trajectories.iter().enumerate().take(5) {
                println!("  [{}] {} points", index, trajectory.len());
            }
            if scan.trajectories.len() > 5 {
                println!("  ... {} more", scan.trajectories.len() - 5);
            }
        }

        Ok(())
    }
}
