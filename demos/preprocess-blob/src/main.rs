use anyhow::{anyhow, Result};
use digilets_pipeline::{augment, resample, BlobProcessor, PreprocessConfig};
use std::fmt::Write as _;

fn main() -> Result<()> {
    // Two symbols with five instances each
    let mut blob = String::new();
    for symbol in 0..2u32 {
        for instance in 0..5u32 {
            let mut line = String::new();
            for i in 0..8u32 {
                if i > 0 {
                    line.push(' ');
                }
                let t = i as f32;
                let _ = write!(
                    line,
                    "{} {} 0.6 1 {}",
                    t + symbol as f32 * 10.0,
                    t * 0.5 + instance as f32,
                    t * 0.012
                );
            }
            blob.push_str(&line);
            blob.push('\n');
        }
    }

    // Run the full pipeline: parse, augment, resample, label
    let config = PreprocessConfig::new(50, 5)?;
    let processor = BlobProcessor::new(config)?;
    let result = processor.process_blob(&blob);

    if result.samples.len() != 10 {
        return Err(anyhow!(
            "produced {} samples, expected 10",
            result.samples.len()
        ));
    }
    for (index, sample) in result.samples.iter().enumerate() {
        let expected = (index / 5) as u32;
        if sample.label != expected {
            return Err(anyhow!(
                "sample {} labeled {}, expected {}",
                index,
                sample.label,
                expected
            ));
        }
        if sample.features.num_steps() != 50 {
            return Err(anyhow!(
                "sample {} resampled to {} steps, expected 50",
                index,
                sample.features.num_steps()
            ));
        }
    }

    // Augment one trajectory directly and look at its speed column
    let scan = digilets_pipeline::scan_blob(&blob);
    let augmented = augment(&scan.trajectories[0]);
    let resampled = resample(&augmented, 50);
    let speed = augmented.speed();
    println!(
        "first trajectory: {} -> {} points, interior speed {:.4}",
        augmented.len(),
        resampled.num_steps(),
        speed[augmented.len() / 2]
    );

    println!(
        "Preprocess OK: {} samples, labels 0..={}",
        result.samples.len(),
        result.samples.last().map(|s| s.label).unwrap_or(0)
    );
    Ok(())
}
