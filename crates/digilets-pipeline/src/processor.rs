//! Blob processing and label assignment

use digilets_format::{scan_blob, ScanReport};

use crate::error::*;
use crate::kinematics::augment;
use crate::resample::{resample, ResampledTrajectory};
use crate::{DEFAULT_INSTANCES_PER_CLASS, DEFAULT_NUM_STEPS};

/// Preprocessing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessConfig {
    /// Resampled sequence length
    pub num_steps: usize,
    /// Consecutive trajectories sharing one label
    pub instances_per_class: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            num_steps: DEFAULT_NUM_STEPS, // fixed input length for batching
            instances_per_class: DEFAULT_INSTANCES_PER_CLASS, // recordings per symbol
        }
    }
}

impl PreprocessConfig {
    /// Create new preprocessing parameters with validation
    pub fn new(num_steps: usize, instances_per_class: usize) -> Result<Self> {
        if num_steps == 0 {
            return Err(PipelineError::invalid_parameter(
                "num_steps",
                num_steps.to_string(),
                ">= 1",
            ));
        }
        if instances_per_class == 0 {
            return Err(PipelineError::invalid_parameter(
                "instances_per_class",
                instances_per_class.to_string(),
                ">= 1",
            ));
        }

        Ok(Self {
            num_steps,
            instances_per_class,
        })
    }

    /// Set the resampled sequence length
    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }

    /// Set the number of instances per class
    pub fn with_instances_per_class(mut self, instances_per_class: usize) -> Self {
        self.instances_per_class = instances_per_class;
        self
    }

    /// Validate parameters
    pub fn validate(&self) -> Result<()> {
        Self::new(self.num_steps, self.instances_per_class)?;
        Ok(())
    }
}

/// One preprocessed trajectory with its class label
#[derive(Debug, Clone)]
pub struct LabeledSample {
    /// Resampled feature matrix
    pub features: ResampledTrajectory,
    /// Symbol class index
    pub label: u32,
}

/// Output of processing one blob
#[derive(Debug, Clone)]
pub struct BlobResult {
    /// Labeled samples in encounter order
    pub samples: Vec<LabeledSample>,
    /// Per-line accounting from the scan
    pub report: ScanReport,
}

/// Runs the scan, augment, resample, and label stages over text blobs
#[derive(Debug, Clone, Copy)]
pub struct BlobProcessor {
    config: PreprocessConfig,
}

impl BlobProcessor {
    /// Create a new processor with validated parameters
    pub fn new(config: PreprocessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Processing parameters
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Process one participant blob into labeled samples
    ///
    /// Trajectories keep their encounter order; sample `i` gets label
    /// `i / instances_per_class`. Label lines and skipped lines do not
    /// advance the index. Never fails: a blob with no usable trajectory
    /// lines produces an empty result and a warning.
    pub fn process_blob(&self, text: &str) -> BlobResult {
        let scan = scan_blob(text);

        if scan.trajectories.is_empty() {
            log::warn!(
                "no usable trajectories in blob ({} lines scanned)",
                scan.report.lines
            );
            return BlobResult {
                samples: Vec::new(),
                report: scan.report,
            };
        }

        if scan.trajectories.len() % self.config.instances_per_class != 0 {
            // Index-based labels drift when instances are missing
            log::warn!(
                "trajectory count {} is not a multiple of {} instances per class; trailing labels may be misaligned",
                scan.trajectories.len(),
                self.config.instances_per_class
            );
        }

        let samples = scan
            .trajectories
            .iter()
            .enumerate()
            .map(|(index, raw)| LabeledSample {
                features: resample(&augment(raw), self.config.num_steps),
                label: (index / self.config.instances_per_class) as u32,
            })
            .collect();

        BlobResult {
            samples,
            report: scan.report,
        }
    }
}
