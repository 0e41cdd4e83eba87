//! Kinematic feature augmentation
//!
//! Derives velocity, speed magnitude, and acceleration from raw pen
//! positions over the sample index axis, widening a `(len, 5)` trajectory
//! into the `(len, 9)` matrix the downstream stages consume. The recorded
//! timestamp column is dropped here; normalized resampling replaces it.

use ndarray::{Array2, ArrayView1};

use digilets_format::{column, RawTrajectory};

/// Feature count of an augmented trajectory row
pub const AUGMENTED_FEATURES: usize = 9;

/// Column layout of an augmented trajectory
pub mod feature {
    /// Pen x position
    pub const X: usize = 0;
    /// Pen y position
    pub const Y: usize = 1;
    /// Pen pressure
    pub const PRESSURE: usize = 2;
    /// Pen-down flag (0/1 stored as f32)
    pub const PEN_DOWN: usize = 3;
    /// X velocity
    pub const VX: usize = 4;
    /// Y velocity
    pub const VY: usize = 5;
    /// Speed magnitude
    pub const SPEED: usize = 6;
    /// X acceleration
    pub const AX: usize = 7;
    /// Y acceleration
    pub const AY: usize = 8;
}

/// First-order finite-difference gradient over the index axis
///
/// Interior points use the central difference `(v[i+1] - v[i-1]) / 2`;
/// the boundaries use one-sided differences. A single sample has a zero
/// gradient by definition.
pub fn gradient(values: &[f32]) -> Vec<f32> {
    let len = values.len();
    match len {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let mut out = vec![0.0; len];
            out[0] = values[1] - values[0];
            out[len - 1] = values[len - 1] - values[len - 2];
            for i in 1..len - 1 {
                out[i] = (values[i + 1] - values[i - 1]) / 2.0;
            }
            out
        }
    }
}

/// Kinematics-augmented trajectory, a `(len, AUGMENTED_FEATURES)` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedTrajectory {
    data: Array2<f32>,
}

impl AugmentedTrajectory {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// Whether the trajectory has no samples
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Backing matrix
    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// View of one feature column
    pub fn column(&self, index: usize) -> ArrayView1<'_, f32> {
        self.data.column(index)
    }

    /// View of the speed magnitude column
    pub fn speed(&self) -> ArrayView1<'_, f32> {
        self.data.column(feature::SPEED)
    }
}

/// Derive kinematic features from a raw trajectory
///
/// Copies x, y, pressure, and pen_down unchanged, then appends the
/// gradient-derived columns: `vx = gradient(x)`, `vy = gradient(y)`,
/// `speed = sqrt(vx^2 + vy^2)`, `ax = gradient(vx)`, `ay = gradient(vy)`.
/// Defined for every length >= 1.
pub fn augment(raw: &RawTrajectory) -> AugmentedTrajectory {
    let len = raw.len();
    let x = raw.x().to_vec();
    let y = raw.y().to_vec();

    let vx = gradient(&x);
    let vy = gradient(&y);
    let ax = gradient(&vx);
    let ay = gradient(&vy);

    let mut data = Array2::zeros((len, AUGMENTED_FEATURES));
    for i in 0..len {
        data[[i, feature::X]] = x[i];
        data[[i, feature::Y]] = y[i];
        data[[i, feature::PRESSURE]] = raw.data()[[i, column::PRESSURE]];
        data[[i, feature::PEN_DOWN]] = raw.data()[[i, column::PEN_DOWN]];
        data[[i, feature::VX]] = vx[i];
        data[[i, feature::VY]] = vy[i];
        data[[i, feature::SPEED]] = (vx[i] * vx[i] + vy[i] * vy[i]).sqrt();
        data[[i, feature::AX]] = ax[i];
        data[[i, feature::AY]] = ay[i];
    }

    AugmentedTrajectory { data }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(points: &[[f32; 5]]) -> RawTrajectory {
        let flat: Vec<f32> = points.iter().flatten().copied().collect();
        let data = Array2::from_shape_vec((points.len(), 5), flat).unwrap();
        RawTrajectory::new(data).unwrap()
    }

    #[test]
    fn test_gradient_constant() {
        assert_eq!(gradient(&[5.0, 5.0, 5.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gradient_linear() {
        assert_eq!(gradient(&[0.0, 1.0, 2.0, 3.0]), vec![1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_gradient_boundaries() {
        // One-sided at the ends, central in the interior
        assert_eq!(gradient(&[0.0, 1.0, 4.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_gradient_single_point() {
        assert_eq!(gradient(&[7.0]), vec![0.0]);
    }

    #[test]
    fn test_gradient_two_points() {
        assert_eq!(gradient(&[1.0, 4.0]), vec![3.0, 3.0]);
    }

    #[test]
    fn test_augment_diagonal_stroke() {
        let traj = raw(&[[0.0, 0.0, 0.5, 1.0, 0.0], [1.0, 1.0, 0.5, 1.0, 1.0]]);
        let augmented = augment(&traj);

        assert_eq!(augmented.data().dim(), (2, AUGMENTED_FEATURES));
        for i in 0..2 {
            assert_eq!(augmented.data()[[i, feature::VX]], 1.0);
            assert_eq!(augmented.data()[[i, feature::VY]], 1.0);
            assert_eq!(augmented.data()[[i, feature::SPEED]], 2.0f32.sqrt());
            assert_eq!(augmented.data()[[i, feature::AX]], 0.0);
            assert_eq!(augmented.data()[[i, feature::AY]], 0.0);
        }
    }

    #[test]
    fn test_augment_copies_leading_columns() {
        let traj = raw(&[[2.0, 3.0, 0.8, 1.0, 10.0], [4.0, 5.0, 0.2, 0.0, 20.0]]);
        let augmented = augment(&traj);

        assert_eq!(augmented.data()[[0, feature::X]], 2.0);
        assert_eq!(augmented.data()[[0, feature::Y]], 3.0);
        assert_eq!(augmented.data()[[0, feature::PRESSURE]], 0.8);
        assert_eq!(augmented.data()[[0, feature::PEN_DOWN]], 1.0);
        assert_eq!(augmented.data()[[1, feature::PRESSURE]], 0.2);
        assert_eq!(augmented.data()[[1, feature::PEN_DOWN]], 0.0);
    }

    #[test]
    fn test_augment_single_point_zero_derivatives() {
        let traj = raw(&[[3.0, 4.0, 0.7, 1.0, 0.0]]);
        let augmented = augment(&traj);

        assert_eq!(augmented.len(), 1);
        for col in [
            feature::VX,
            feature::VY,
            feature::SPEED,
            feature::AX,
            feature::AY,
        ] {
            assert_eq!(augmented.data()[[0, col]], 0.0);
        }
        assert_eq!(augmented.data()[[0, feature::X]], 3.0);
    }
}
