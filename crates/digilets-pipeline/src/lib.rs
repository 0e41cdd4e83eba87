//! Trajectory preprocessing engine for the DigiLeTs corpus tooling
//!
//! This crate turns parsed pen trajectories into fixed-length labeled
//! samples: kinematic augmentation, temporal resampling, index-based
//! label assignment, corpus loading, plus the symbol-level views
//! (dynamics summaries and instance grids) the inspection tooling uses.

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export essential types from the format layer
pub use digilets_format::{
    classify_line, parse_trajectory_line, scan_blob, BlobScan, FormatError, LineKind,
    RawTrajectory, ScanReport, TrajectoryPoint, LABEL_TOKEN_COUNT, RAW_FEATURES,
};

// Core modules
pub mod dataset;
pub mod dynamics;
pub mod error;
pub mod grid;
pub mod kinematics;
pub mod processor;
pub mod resample;

// Re-export essential types
pub use dataset::{
    discover_corpus, discover_corpus_with, LoadReport, TrajectoryDataset, CORPUS_SUFFIX,
    INFO_SUFFIX,
};
pub use dynamics::{summarize_symbol, CurveFamily, DynamicsSummary};
pub use error::{PipelineError, Result};
pub use grid::{GridLayout, InstanceGrid};
pub use kinematics::{augment, gradient, AugmentedTrajectory, AUGMENTED_FEATURES};
pub use processor::{BlobProcessor, BlobResult, LabeledSample, PreprocessConfig};
pub use resample::{interp, linspace, resample, ResampledTrajectory};

/// Default resampled sequence length
pub const DEFAULT_NUM_STEPS: usize = 100;

/// Default number of recorded instances per symbol class
pub const DEFAULT_INSTANCES_PER_CLASS: usize = 5;
