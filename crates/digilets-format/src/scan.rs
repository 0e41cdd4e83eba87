//! Blob scanning
//!
//! The scanner is the shared front end for every corpus consumer: it walks a
//! text blob line by line, classifies each line, parses trajectory lines,
//! and accounts for everything it skipped. Scanning itself never fails; bad
//! lines are counted and left behind.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    line::LineKind,
    parse::parse_trajectory_line,
    RawTrajectory,
};

/// Per-line accounting for one scanned blob
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanReport {
    /// Total lines seen
    pub lines: usize,
    /// Label/metadata lines skipped
    pub label_lines: usize,
    /// Lines whose token count marked them as trajectories
    pub trajectory_lines: usize,
    /// Blank lines and lines of unusable width
    pub invalid_lines: usize,
    /// Trajectory lines rejected for non-numeric tokens
    pub parse_failures: usize,
}

impl ScanReport {
    /// Number of trajectories actually produced
    pub fn parsed(&self) -> usize {
        self.trajectory_lines - self.parse_failures
    }

    /// Whether every line was either a label or a clean trajectory
    pub fn is_clean(&self) -> bool {
        self.invalid_lines == 0 && self.parse_failures == 0
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: &ScanReport) {
        self.lines += other.lines;
        self.label_lines += other.label_lines;
        self.trajectory_lines += other.trajectory_lines;
        self.invalid_lines += other.invalid_lines;
        self.parse_failures += other.parse_failures;
    }
}

/// Result of scanning one blob
#[derive(Debug, Clone)]
pub struct BlobScan {
    /// Parsed trajectories in encounter order
    pub trajectories: Vec<RawTrajectory>,
    /// Per-line accounting
    pub report: ScanReport,
}

/// Scan a text blob into trajectories plus a report
pub fn scan_blob(text: &str) -> BlobScan {
    let mut trajectories = Vec::new();
    let mut report = ScanReport::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        report.lines += 1;

        let tokens: Vec<&str> = raw_line.split_whitespace().collect();
        match LineKind::from_token_count(tokens.len()) {
            LineKind::Label => report.label_lines += 1,
            LineKind::Invalid => report.invalid_lines += 1,
            LineKind::Trajectory { .. } => {
                report.trajectory_lines += 1;
                match parse_trajectory_line(line_no, &tokens) {
                    Ok(trajectory) => trajectories.push(trajectory),
                    Err(err) => {
                        log::debug!("skipping trajectory line: {}", err);
                        report.parse_failures += 1;
                    }
                }
            }
        }
    }

    BlobScan {
        trajectories,
        report,
    }
}
