//! Fixed-length temporal resampling
//!
//! Variable-length trajectories are mapped onto a fixed number of evenly
//! spaced steps over a normalized `[0, 1]` time axis so they can be
//! batched. Each feature column is interpolated independently with the
//! 1-D routines below; the dynamics summaries reuse the same routines.

use ndarray::{Array2, ArrayView1};

use crate::kinematics::{AugmentedTrajectory, AUGMENTED_FEATURES};

/// Evenly spaced values over `[start, end]`, inclusive of both ends
pub fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f32;
            let mut out: Vec<f32> = (0..n).map(|i| start + step * i as f32).collect();
            // Pin the endpoint so clamping in interp sees exact bounds
            out[n - 1] = end;
            out
        }
    }
}

/// Piecewise-linear interpolation of the samples `(xs, ys)` at `targets`
///
/// `xs` must be ascending and the same length as `ys`. Targets outside
/// `[xs[0], xs[last]]` clamp to the boundary values, a single-sample table
/// is constant, and a target landing exactly on a knot returns that knot's
/// value unchanged.
pub fn interp(targets: &[f32], xs: &[f32], ys: &[f32]) -> Vec<f32> {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.is_empty() {
        return vec![0.0; targets.len()];
    }
    let last = xs.len() - 1;

    targets
        .iter()
        .map(|&t| {
            if t <= xs[0] {
                ys[0]
            } else if t >= xs[last] {
                ys[last]
            } else {
                let hi = xs.partition_point(|&x| x <= t);
                let lo = hi - 1;
                if t == xs[lo] {
                    ys[lo]
                } else {
                    let frac = (t - xs[lo]) / (xs[hi] - xs[lo]);
                    ys[lo] + (ys[hi] - ys[lo]) * frac
                }
            }
        })
        .collect()
}

/// Fixed-length trajectory, a `(num_steps, AUGMENTED_FEATURES)` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct ResampledTrajectory {
    data: Array2<f32>,
}

impl ResampledTrajectory {
    /// Number of time steps
    pub fn num_steps(&self) -> usize {
        self.data.nrows()
    }

    /// Backing matrix
    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// View of one feature column
    pub fn column(&self, index: usize) -> ArrayView1<'_, f32> {
        self.data.column(index)
    }

    /// Copy out the matrix as row vectors, one per time step
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.data.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

/// Resample a trajectory onto `num_steps` evenly spaced time steps
///
/// Builds a source axis `linspace(0, 1, len)` and a target axis
/// `linspace(0, 1, num_steps)`, then interpolates each feature column.
/// A single-sample source yields a constant sequence. Always produces
/// exactly `num_steps` rows.
pub fn resample(augmented: &AugmentedTrajectory, num_steps: usize) -> ResampledTrajectory {
    let source = linspace(0.0, 1.0, augmented.len());
    let targets = linspace(0.0, 1.0, num_steps);

    let mut data = Array2::zeros((num_steps, AUGMENTED_FEATURES));
    for index in 0..AUGMENTED_FEATURES {
        let ys = augmented.column(index).to_vec();
        for (row, value) in interp(&targets, &source, &ys).into_iter().enumerate() {
            data[[row, index]] = value;
        }
    }

    ResampledTrajectory { data }
}
