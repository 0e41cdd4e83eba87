//! Dataset export command
//!
//! Runs the full preprocessing pipeline over the workspace corpus and writes
//! the labeled samples in a format a training loop can load directly.
//!
//! Example:
//!   digilets export --format json --pretty --output exports/dataset.json
//!   digilets export --merged --format bincode

use clap::{Args, ValueEnum};
use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use digilets_pipeline::dataset::discover_corpus_with;
use digilets_pipeline::{PreprocessConfig, TrajectoryDataset};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::workspace::{Workspace, WORKSPACE_FILE};

/// Export the preprocessed corpus as a training dataset
#[derive(Args, Debug)]
pub struct ExportCommand {
    /// Corpus directory to read (defaults to the workspace data dir)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path (defaults to exports/dataset.json or .bin)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Points per resampled trajectory (defaults to the workspace setting)
    #[arg(long)]
    pub num_steps: Option<usize>,

    /// Recordings per symbol (defaults to the workspace setting)
    #[arg(long)]
    pub instances_per_class: Option<usize>,

    /// Flatten all participant files into a single sample list
    #[arg(long)]
    pub merged: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Supported dataset serialization formats
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Bincode,
}

impl ExportFormat {
    fn from_name(name: &str) -> CliResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "bincode" | "bin" => Ok(Self::Bincode),
            other => Err(CliError::config(format!(
                "Unknown output format '{}' (expected json or bincode)",
                other
            ))),
        }
    }

    fn default_file_name(&self) -> &'static str {
        match self {
            Self::Json => "dataset.json",
            Self::Bincode => "dataset.bin",
        }
    }
}

/// One resampled trajectory with its index-based label
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SampleRecord {
    label: u32,
    features: Vec<Vec<f32>>,
}

/// Samples grouped by the participant file they came from
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SourceExport {
    file: String,
    samples: Vec<SampleRecord>,
}

/// Per-source export envelope; labels restart at 0 within each source
#[derive(Debug, Serialize, Deserialize)]
struct DatasetExport {
    num_steps: usize,
    instances_per_class: usize,
    sources: Vec<SourceExport>,
}

/// Flattened export envelope produced by --merged
#[derive(Debug, Serialize, Deserialize)]
struct MergedExport {
    num_steps: usize,
    instances_per_class: usize,
    samples: Vec<SampleRecord>,
}

impl ExportCommand {
    pub async fn execute(
        self,
        workspace: PathBuf,
        config: Option<PathBuf>,
    ) -> CliResult<()> {
        let cli_config = load_cli_config(config)?;

        let root = Workspace::find_workspace_root(&workspace).ok_or_else(|| {
            CliError::workspace(format!(
                "No {} found; run 'digilets init <workspace_name>' first",
                WORKSPACE_FILE
            ))
        })?;
        let ws = Workspace::new(&root)?;
        ws.ensure_directories()?;

        // Command-line flags win over the workspace manifest
        let preprocess = &ws.config.preprocess;
        let pipeline_config = PreprocessConfig::new(
            self.num_steps.unwrap_or(preprocess.num_steps),
            self.instances_per_class
                .unwrap_or(preprocess.instances_per_class),
        )?;

        let format = match self.format {
            Some(format) => format,
            None => ExportFormat::from_name(&cli_config.preferences.output_format)?,
        };

        let output = self
            .output
            .unwrap_or_else(|| ws.exports_dir().join(format.default_file_name()));

        let corpus = &ws.config.corpus;
        let data_dir = self.input.unwrap_or_else(|| ws.data_dir());
        let files = discover_corpus_with(
            &data_dir,
            &corpus.corpus_suffix,
            &corpus.info_suffix,
        )?;

        if files.is_empty() {
            return Err(CliError::missing_resource(format!(
                "No recording files in {}",
                data_dir.display()
            )));
        }

        let bar = if cli_config.preferences.show_progress {
            Some(ProgressBar::new(files.len() as u64))
        } else {
            None
        };

        let mut sources = Vec::with_capacity(files.len());
        let mut skipped = 0usize;
        for path in &files {
            match TrajectoryDataset::load_file(path, &pipeline_config) {
                Ok((dataset, _report)) => {
                    let samples: Vec<SampleRecord> = dataset
                        .iter()
                        .map(|sample| SampleRecord {
                            label: sample.label,
                            features: sample.features.to_rows(),
                        })
                        .collect();
                    let file = path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .unwrap_or_default()
                        .to_string();
                    sources.push(SourceExport { file, samples });
                }
                Err(err) => {
                    info!("Skipping {}: {}", path.display(), err);
                    skipped += 1;
                }
            }
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }
        if let Some(bar) = &bar {
            bar.finish_and_clear();
        }

        let total_samples: usize = sources.iter().map(|s| s.samples.len()).sum();

        // Write to file
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let bytes = if self.merged {
            let export = MergedExport {
                num_steps: pipeline_config.num_steps,
                instances_per_class: pipeline_config.instances_per_class,
                samples: sources.into_iter().flat_map(|s| s.samples).collect(),
            };
            serialize_export(&export, format, self.pretty)?
        } else {
            let export = DatasetExport {
                num_steps: pipeline_config.num_steps,
                instances_per_class: pipeline_config.instances_per_class,
                sources,
            };
            serialize_export(&export, format, self.pretty)?
        };
        std::fs::write(&output, bytes)?;

        info!(
            "Exported {} samples from {} files to {}",
            total_samples,
            files.len() - skipped,
            output.display()
        );
        if skipped > 0 {
            info!("Skipped {} unreadable files", skipped);
        }

        Ok(())
    }
}

fn serialize_export<T: Serialize>(
    export: &T,
    format: ExportFormat,
    pretty: bool,
) -> CliResult<Vec<u8>> {
    match format {
        ExportFormat::Json => {
            let text = if pretty {
                serde_json::to_string_pretty(export)
            } else {
                serde_json::to_string(export)
            }
            .map_err(|e| CliError::Generic(anyhow::anyhow!(e)))?;
            Ok(text.into_bytes())
        }
        ExportFormat::Bincode => {
            bincode::serialize(export).map_err(|e| CliError::Generic(anyhow::anyhow!(e)))
        }
    }
}

fn load_cli_config(path: Option<PathBuf>) -> CliResult<CliConfig> {
    match path {
        Some(path) => CliConfig::load_from_file(&path),
        None => match CliConfig::default_config_path() {
            Ok(path) => CliConfig::load_from_file(&path),
            Err(_) => Ok(CliConfig::default()),
        },
    }
}
