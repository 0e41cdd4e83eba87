//! Per-symbol dynamics summaries
//!
//! Summarizes how one symbol is written across its recorded instances:
//! speed magnitude and pen pressure curves, each interpolated onto a
//! common axis, then reduced to pointwise mean and spread.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use digilets_format::RawTrajectory;

use crate::error::*;
use crate::kinematics::gradient;
use crate::processor::PreprocessConfig;
use crate::resample::{interp, linspace};

/// A family of per-instance curves with their pointwise statistics
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurveFamily {
    /// Pointwise mean across instances
    pub mean: Vec<f32>,
    /// Pointwise population standard deviation across instances
    pub std: Vec<f32>,
    /// Individual instance curves
    pub instances: Vec<Vec<f32>>,
}

impl CurveFamily {
    /// Reduce instance curves to their pointwise statistics
    pub fn from_instances(instances: Vec<Vec<f32>>) -> Self {
        let points = instances.first().map(|curve| curve.len()).unwrap_or(0);
        let count = instances.len() as f32;

        let mut mean = vec![0.0; points];
        for curve in &instances {
            for (total, value) in mean.iter_mut().zip(curve) {
                *total += value;
            }
        }
        for total in &mut mean {
            *total /= count;
        }

        let mut std = vec![0.0; points];
        for curve in &instances {
            for ((total, value), center) in std.iter_mut().zip(curve).zip(&mean) {
                let deviation = value - center;
                *total += deviation * deviation;
            }
        }
        for total in &mut std {
            *total = (*total / count).sqrt();
        }

        Self {
            mean,
            std,
            instances,
        }
    }

    /// Number of instance curves
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}

/// Dynamics statistics for one symbol's instance block
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DynamicsSummary {
    /// Symbol index the block belongs to
    pub symbol: usize,
    /// Points per curve
    pub points: usize,
    /// Speed magnitude curves
    pub velocity: CurveFamily,
    /// Pen pressure curves
    pub pressure: CurveFamily,
}

/// Summarize the writing dynamics of one symbol
///
/// Selects the symbol's instance block (`symbol * instances_per_class`
/// up to the next block or the end of the slice), derives each instance's
/// speed magnitude from the position gradients, and interpolates speed
/// and pressure onto `num_steps` common points before reducing.
pub fn summarize_symbol(
    trajectories: &[RawTrajectory],
    symbol: usize,
    config: &PreprocessConfig,
) -> Result<DynamicsSummary> {
    config.validate()?;

    let start = symbol * config.instances_per_class;
    if start >= trajectories.len() {
        return Err(PipelineError::no_instances(symbol));
    }
    let end = (start + config.instances_per_class).min(trajectories.len());
    let block = &trajectories[start..end];

    let targets = linspace(0.0, 1.0, config.num_steps);
    let mut velocity_curves = Vec::with_capacity(block.len());
    let mut pressure_curves = Vec::with_capacity(block.len());

    for trajectory in block {
        let x = trajectory.x().to_vec();
        let y = trajectory.y().to_vec();
        let vx = gradient(&x);
        let vy = gradient(&y);
        let speed: Vec<f32> = vx
            .iter()
            .zip(&vy)
            .map(|(vx, vy)| (vx * vx + vy * vy).sqrt())
            .collect();

        let axis = linspace(0.0, 1.0, trajectory.len());
        velocity_curves.push(interp(&targets, &axis, &speed));
        pressure_curves.push(interp(&targets, &axis, &trajectory.pressure().to_vec()));
    }

    Ok(DynamicsSummary {
        symbol,
        points: config.num_steps,
        velocity: CurveFamily::from_instances(velocity_curves),
        pressure: CurveFamily::from_instances(pressure_curves),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn raw_with_pressure(pressure: f32) -> RawTrajectory {
        let points = vec![
            0.0, 0.0, pressure, 1.0, 0.0, //
            1.0, 0.0, pressure, 1.0, 1.0, //
            2.0, 0.0, pressure, 1.0, 2.0,
        ];
        RawTrajectory::new(Array2::from_shape_vec((3, 5), points).unwrap()).unwrap()
    }

    #[test]
    fn test_curve_family_identical_instances() {
        let family = CurveFamily::from_instances(vec![vec![1.0, 2.0], vec![1.0, 2.0]]);
        assert_eq!(family.mean, vec![1.0, 2.0]);
        assert_eq!(family.std, vec![0.0, 0.0]);
        assert_eq!(family.instance_count(), 2);
    }

    #[test]
    fn test_curve_family_spread() {
        let family = CurveFamily::from_instances(vec![vec![0.2], vec![0.4]]);
        assert!((family.mean[0] - 0.3).abs() < 1e-6);
        // Population std of {0.2, 0.4}
        assert!((family.std[0] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_curve_family_empty() {
        let family = CurveFamily::from_instances(Vec::new());
        assert!(family.mean.is_empty());
        assert!(family.std.is_empty());
    }

    #[test]
    fn test_summarize_first_symbol() {
        let trajectories = vec![raw_with_pressure(0.2), raw_with_pressure(0.4)];
        let config = PreprocessConfig::new(10, 2).unwrap();
        let summary = summarize_symbol(&trajectories, 0, &config).unwrap();

        assert_eq!(summary.symbol, 0);
        assert_eq!(summary.points, 10);
        assert_eq!(summary.velocity.instance_count(), 2);
        assert_eq!(summary.pressure.mean.len(), 10);

        // Unit-speed strokes in both instances
        for value in &summary.velocity.mean {
            assert!((value - 1.0).abs() < 1e-6);
        }
        for value in &summary.pressure.mean {
            assert!((value - 0.3).abs() < 1e-6);
        }
        for value in &summary.pressure.std {
            assert!((value - 0.1).abs() < 1e-6);
        }
    }

    #[test]
    fn test_summarize_partial_block() {
        // 3 trajectories with 2 per class: symbol 1 has a single instance
        let trajectories = vec![
            raw_with_pressure(0.5),
            raw_with_pressure(0.5),
            raw_with_pressure(0.9),
        ];
        let config = PreprocessConfig::new(4, 2).unwrap();
        let summary = summarize_symbol(&trajectories, 1, &config).unwrap();

        assert_eq!(summary.velocity.instance_count(), 1);
        assert_eq!(summary.pressure.mean, vec![0.9; 4]);
        assert_eq!(summary.pressure.std, vec![0.0; 4]);
    }

    #[test]
    fn test_summarize_out_of_range() {
        let trajectories = vec![raw_with_pressure(0.5)];
        let config = PreprocessConfig::new(4, 5).unwrap();
        let result = summarize_symbol(&trajectories, 3, &config);
        assert!(matches!(result, Err(PipelineError::NoInstances { symbol: 3 })));
    }

    #[test]
    fn test_summarize_empty_slice() {
        let config = PreprocessConfig::default();
        let result = summarize_symbol(&[], 0, &config);
        assert!(matches!(result, Err(PipelineError::NoInstances { .. })));
    }
}
