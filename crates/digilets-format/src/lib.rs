//! Flat-text record format for the DigiLeTs trajectory corpus
//!
//! This crate provides the record-level infrastructure for reading DigiLeTs
//! participant files: line classification, trajectory parsing, and blob
//! scanning with per-line failure accounting.

#![deny(missing_docs)]
#![warn(clippy::all)]

use ndarray::{Array2, ArrayView1};

/// One pen sample as recorded in the corpus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Horizontal pen position
    pub x: f32,
    /// Vertical pen position
    pub y: f32,
    /// Stylus pressure
    pub pressure: f32,
    /// Pen contact flag (0 or 1, stored as a float)
    pub pen_down: f32,
    /// Sample timestamp
    pub timestamp: f32,
}

impl TrajectoryPoint {
    /// Create a new trajectory point
    pub const fn new(x: f32, y: f32, pressure: f32, pen_down: f32, timestamp: f32) -> Self {
        Self {
            x,
            y,
            pressure,
            pen_down,
            timestamp,
        }
    }

    /// Whether the stylus touched the surface at this sample
    pub fn is_pen_down(&self) -> bool {
        self.pen_down > 0.5
    }
}

/// One parsed pen trajectory, a `(len, RAW_FEATURES)` matrix with `len >= 1`
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrajectory {
    data: Array2<f32>,
}

impl RawTrajectory {
    /// Create a trajectory from a point matrix
    ///
    /// The matrix must have exactly [`RAW_FEATURES`] columns and at least
    /// one row.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        if data.ncols() != RAW_FEATURES || data.nrows() == 0 {
            return Err(FormatError::PointShape {
                rows: data.nrows(),
                cols: data.ncols(),
            });
        }
        Ok(Self { data })
    }

    /// Number of points in the trajectory
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Whether the trajectory has no points (never true for parsed records)
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// The underlying `(len, RAW_FEATURES)` matrix
    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// One feature column as a view
    pub fn column(&self, index: usize) -> ArrayView1<'_, f32> {
        self.data.column(index)
    }

    /// Horizontal position column
    pub fn x(&self) -> ArrayView1<'_, f32> {
        self.data.column(column::X)
    }

    /// Vertical position column
    pub fn y(&self) -> ArrayView1<'_, f32> {
        self.data.column(column::Y)
    }

    /// Pressure column
    pub fn pressure(&self) -> ArrayView1<'_, f32> {
        self.data.column(column::PRESSURE)
    }

    /// Point at the given index, if in range
    pub fn point(&self, index: usize) -> Option<TrajectoryPoint> {
        if index >= self.len() {
            return None;
        }
        let row = self.data.row(index);
        Some(TrajectoryPoint::new(
            row[column::X],
            row[column::Y],
            row[column::PRESSURE],
            row[column::PEN_DOWN],
            row[column::TIME],
        ))
    }

    /// Iterate over the points in recording order
    pub fn points(&self) -> impl Iterator<Item = TrajectoryPoint> + '_ {
        (0..self.len()).filter_map(move |i| self.point(i))
    }

    /// Copy of this trajectory keeping at most `max_len` leading points
    pub fn truncated(&self, max_len: usize) -> RawTrajectory {
        let keep = self.len().min(max_len.max(1));
        RawTrajectory {
            data: self.data.slice(ndarray::s![..keep, ..]).to_owned(),
        }
    }
}

// Core modules
pub mod error;
pub mod line;
pub mod parse;
pub mod scan;

// Re-export essential types
pub use error::{FormatError, Result};
pub use line::{classify_line, LineKind};
pub use parse::parse_trajectory_line;
pub use scan::{scan_blob, BlobScan, ScanReport};

/// Number of feature columns in a raw corpus record
pub const RAW_FEATURES: usize = 5;

/// Token count that marks a label/metadata line
pub const LABEL_TOKEN_COUNT: usize = 62;

/// Column indices of a raw trajectory matrix
pub mod column {
    /// Horizontal pen position
    pub const X: usize = 0;
    /// Vertical pen position
    pub const Y: usize = 1;
    /// Stylus pressure
    pub const PRESSURE: usize = 2;
    /// Pen contact flag
    pub const PEN_DOWN: usize = 3;
    /// Sample timestamp
    pub const TIME: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_point_round_trip() {
        let data = array![[1.0, 2.0, 0.5, 1.0, 0.0], [3.0, 4.0, 0.25, 0.0, 1.0]];
        let traj = RawTrajectory::new(data).unwrap();

        assert_eq!(traj.len(), 2);
        let p = traj.point(1).unwrap();
        assert_eq!(p, TrajectoryPoint::new(3.0, 4.0, 0.25, 0.0, 1.0));
        assert!(!p.is_pen_down());
        assert!(traj.point(2).is_none());
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let wrong_cols = Array2::<f32>::zeros((3, 4));
        assert!(RawTrajectory::new(wrong_cols).is_err());

        let no_rows = Array2::<f32>::zeros((0, RAW_FEATURES));
        assert!(RawTrajectory::new(no_rows).is_err());
    }

    #[test]
    fn test_truncated_keeps_leading_points() {
        let data = Array2::from_shape_fn((6, RAW_FEATURES), |(r, c)| (r * 10 + c) as f32);
        let traj = RawTrajectory::new(data).unwrap();

        let cut = traj.truncated(4);
        assert_eq!(cut.len(), 4);
        assert_eq!(cut.point(3).unwrap().x, 30.0);

        // Truncation never produces an empty trajectory
        let one = traj.truncated(0);
        assert_eq!(one.len(), 1);
    }
}
