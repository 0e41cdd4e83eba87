//! Per-symbol dynamics summary command
//!
//! Aggregates the velocity and pressure curves of one symbol's recorded
//! instances and writes the summary as JSON for downstream plotting.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use digilets_format::scan_blob;
use digilets_pipeline::dataset::discover_corpus_with;
use digilets_pipeline::{summarize_symbol, PreprocessConfig};

use crate::error::{CliError, CliResult};
use crate::workspace::Workspace;

/// Summarize velocity and pressure dynamics for a symbol
#[derive(Args, Debug)]
pub struct DynamicsCommand {
    /// Recording file (defaults to the first file of the workspace corpus)
    pub file: Option<PathBuf>,

    /// Symbol index to summarize
    #[arg(short, long, default_value = "10")]
    pub symbol: usize,

    /// Points per aggregated curve
    #[arg(long, default_value = "100")]
    pub points: usize,

    /// Recordings per symbol
    #[arg(long, default_value = "5")]
    pub instances_per_class: usize,

    /// Output file path (defaults to dynamics_symbol<N>.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DynamicsCommand {
    pub async fn execute(
        self,
        workspace: PathBuf,
        _config: Option<PathBuf>,
    ) -> CliResult<()> {
        let root = Workspace::find_workspace_root(&workspace);

        let file = match self.file {
            Some(file) => file,
            None => first_corpus_file(root.as_deref())?,
        };
        if !file.is_file() {
            return Err(CliError::missing_resource(format!(
                "No recording file at {}",
                file.display()
            )));
        }

        let config = PreprocessConfig::new(self.points, self.instances_per_class)?;

        let text = std::fs::read_to_string(&file)?;
        let scan = scan_blob(&text);
        info!(
            "Scanned {}: {} trajectories",
            file.display(),
            scan.trajectories.len()
        );

        let summary = summarize_symbol(&scan.trajectories, self.symbol, &config)?;

        let envelope = serde_json::json!({
            "file": file.display().to_string(),
            "symbol": summary.symbol,
            "points": summary.points,
            "instances": summary.velocity.instance_count(),
            "velocity": summary.velocity,
            "pressure": summary.pressure,
        });

        let output = match self.output {
            Some(output) => output,
            None => {
                let name = format!("dynamics_symbol{}.json", self.symbol);
                match &root {
                    Some(root) => Workspace::new(root)?.exports_dir().join(name),
                    None => PathBuf::from(name),
                }
            }
        };

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&envelope)
            .map_err(|e| CliError::Generic(anyhow::anyhow!(e)))?;
        std::fs::write(&output, text)?;

        let peak_velocity = summary
            .velocity
            .mean
            .iter()
            .cloned()
            .fold(0.0f32, f32::max);
        println!("Symbol {} dynamics:", summary.symbol);
        println!("  instances:     {}", summary.velocity.instance_count());
        println!("  curve points:  {}", summary.points);
        println!("  peak velocity: {:.4}", peak_velocity);

        info!("Wrote dynamics summary to {}", output.display());
        Ok(())
    }
}

/// First recording file of the workspace corpus, in discovery order
fn first_corpus_file(root: Option<&std::path::Path>) -> CliResult<PathBuf> {
    let root = root.ok_or_else(|| {
        CliError::missing_resource("No recording file given and no workspace found")
    })?;
    let ws = Workspace::new(root)?;
    let corpus = &ws.config.corpus;
    let files = discover_corpus_with(
        ws.data_dir(),
        &corpus.corpus_suffix,
        &corpus.info_suffix,
    )?;

    files.into_iter().next().ok_or_else(|| {
        CliError::missing_resource(format!("No recording files in {}", ws.data_dir().display()))
    })
}
