//! Property tests for the shape and copy guarantees of the
//! augment/resample stages.

use ndarray::Array2;
use proptest::prelude::*;

use digilets_pipeline::kinematics::feature;
use digilets_pipeline::{
    augment, gradient, resample, BlobProcessor, PreprocessConfig, RawTrajectory,
    AUGMENTED_FEATURES, RAW_FEATURES,
};

fn raw_trajectory(max_len: usize) -> impl Strategy<Value = RawTrajectory> {
    (1..=max_len).prop_flat_map(|len| {
        prop::collection::vec(-100.0f32..100.0, len * RAW_FEATURES).prop_map(move |flat| {
            let data = Array2::from_shape_vec((len, RAW_FEATURES), flat).unwrap();
            RawTrajectory::new(data).unwrap()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_gradient_preserves_length(values in prop::collection::vec(-100.0f32..100.0, 1..64)) {
        prop_assert_eq!(gradient(&values).len(), values.len());
    }

    #[test]
    fn prop_gradient_of_constant_is_zero(value in -100.0f32..100.0, len in 1usize..64) {
        let gradients = gradient(&vec![value; len]);
        prop_assert!(gradients.iter().all(|g| *g == 0.0));
    }

    #[test]
    fn prop_augment_shape(raw in raw_trajectory(48)) {
        let augmented = augment(&raw);
        prop_assert_eq!(augmented.data().dim(), (raw.len(), AUGMENTED_FEATURES));
    }

    #[test]
    fn prop_augment_copies_leading_columns(raw in raw_trajectory(48)) {
        let augmented = augment(&raw);
        for col in [feature::X, feature::Y, feature::PRESSURE, feature::PEN_DOWN] {
            for row in 0..raw.len() {
                prop_assert_eq!(augmented.data()[[row, col]], raw.data()[[row, col]]);
            }
        }
    }

    #[test]
    fn prop_resample_always_hits_target_length(raw in raw_trajectory(48), num_steps in 1usize..200) {
        let resampled = resample(&augment(&raw), num_steps);
        prop_assert_eq!(resampled.data().dim(), (num_steps, AUGMENTED_FEATURES));
    }

    #[test]
    fn prop_resample_single_point_is_constant(raw in raw_trajectory(1), num_steps in 1usize..100) {
        let resampled = resample(&augment(&raw), num_steps);
        for col in 0..AUGMENTED_FEATURES {
            let column = resampled.column(col);
            for value in column.iter() {
                prop_assert_eq!(*value, column[0]);
            }
        }
    }

    #[test]
    fn prop_resample_uniform_identity(raw in raw_trajectory(48)) {
        let augmented = augment(&raw);
        let resampled = resample(&augmented, augmented.len());
        prop_assert_eq!(resampled.data(), augmented.data());
    }

    #[test]
    fn prop_labels_never_decrease(count in 1usize..40, instances in 1usize..8) {
        let blob: Vec<String> = (0..count)
            .map(|i| format!("{} {} 0.5 1 0 {} {} 0.5 1 1", i, i, i + 1, i + 1))
            .collect();
        let config = PreprocessConfig::new(4, instances).unwrap();
        let processor = BlobProcessor::new(config).unwrap();
        let result = processor.process_blob(&blob.join("\n"));

        prop_assert_eq!(result.samples.len(), count);
        let labels: Vec<u32> = result.samples.iter().map(|s| s.label).collect();
        prop_assert!(labels.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(labels[count - 1], ((count - 1) / instances) as u32);
    }
}
