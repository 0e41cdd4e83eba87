//! Corpus discovery and dataset assembly
//!
//! A corpus directory holds one flat-text blob per participant. Discovery
//! keys on the file-name suffix convention of the recording tooling and
//! sorts by name so iteration order does not depend on the platform.

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use digilets_format::ScanReport;

use crate::error::*;
use crate::processor::{BlobProcessor, BlobResult, LabeledSample, PreprocessConfig};

/// File-name suffix of participant trajectory files
pub const CORPUS_SUFFIX: &str = "_preprocessed";

/// File-name suffix of companion metadata files, excluded from discovery
pub const INFO_SUFFIX: &str = "_info";

/// List the participant files of a corpus directory, sorted by name
pub fn discover_corpus(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    discover_corpus_with(dir, CORPUS_SUFFIX, INFO_SUFFIX)
}

/// Corpus discovery with explicit suffix conventions
pub fn discover_corpus_with(
    dir: impl AsRef<Path>,
    suffix: &str,
    info_suffix: &str,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(PipelineError::missing_source(dir));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if name.ends_with(suffix) && !name.ends_with(info_suffix) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Aggregate accounting for a corpus-wide load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadReport {
    /// Participant files discovered
    pub files_found: usize,
    /// Files processed into samples
    pub files_loaded: usize,
    /// Files skipped as unreadable
    pub files_skipped: usize,
    /// Samples produced across all loaded files
    pub samples: usize,
    /// Merged per-line accounting across all loaded files
    pub scan: ScanReport,
}

/// Ordered, indexable collection of labeled samples
#[derive(Debug, Clone, Default)]
pub struct TrajectoryDataset {
    samples: Vec<LabeledSample>,
}

impl TrajectoryDataset {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the dataset holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`, if present
    pub fn get(&self, index: usize) -> Option<&LabeledSample> {
        self.samples.get(index)
    }

    /// Iterate samples in load order
    pub fn iter(&self) -> impl Iterator<Item = &LabeledSample> {
        self.samples.iter()
    }

    /// All samples as a slice
    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    /// Load one participant file
    ///
    /// The file must exist; labels start at 0 within it.
    pub fn load_file(
        path: impl AsRef<Path>,
        config: &PreprocessConfig,
    ) -> Result<(Self, ScanReport)> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PipelineError::missing_source(path));
        }

        let processor = BlobProcessor::new(*config)?;
        let text = fs::read_to_string(path)?;
        let result = processor.process_blob(&text);

        log::debug!(
            "loaded {}: {} samples from {} lines",
            path.display(),
            result.samples.len(),
            result.report.lines
        );

        Ok((
            Self {
                samples: result.samples,
            },
            result.report,
        ))
    }

    /// Load every participant file of a corpus directory
    ///
    /// Labels restart at 0 for each file. Unreadable files are skipped
    /// with a warning; samples keep discovery order regardless of how
    /// files were processed.
    pub fn load_dir(
        dir: impl AsRef<Path>,
        config: &PreprocessConfig,
    ) -> Result<(Self, LoadReport)> {
        let files = discover_corpus(dir)?;
        let processor = BlobProcessor::new(*config)?;

        log::info!("loading {} participant files", files.len());

        #[cfg(feature = "parallel")]
        let per_file: Vec<Option<BlobResult>> = files
            .par_iter()
            .map(|path| Self::process_one(&processor, path))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let per_file: Vec<Option<BlobResult>> = files
            .iter()
            .map(|path| Self::process_one(&processor, path))
            .collect();

        let mut report = LoadReport {
            files_found: files.len(),
            ..Default::default()
        };
        let mut samples = Vec::new();

        for result in per_file {
            match result {
                Some(blob) => {
                    report.files_loaded += 1;
                    report.samples += blob.samples.len();
                    report.scan.merge(&blob.report);
                    samples.extend(blob.samples);
                }
                None => report.files_skipped += 1,
            }
        }

        if samples.is_empty() {
            log::warn!("corpus produced no samples");
        }

        Ok((Self { samples }, report))
    }

    fn process_one(processor: &BlobProcessor, path: &Path) -> Option<BlobResult> {
        match fs::read_to_string(path) {
            Ok(text) => Some(processor.process_blob(&text)),
            Err(err) => {
                log::warn!("skipping unreadable file {}: {}", path.display(), err);
                None
            }
        }
    }
}

impl std::ops::Index<usize> for TrajectoryDataset {
    type Output = LabeledSample;

    fn index(&self, index: usize) -> &Self::Output {
        &self.samples[index]
    }
}
