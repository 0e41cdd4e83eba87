use anyhow::{anyhow, Result};
use digilets_format::scan_blob;
use std::fmt::Write as _;

fn main() -> Result<()> {
    // Build a tiny synthetic recording blob: one label line (62 tokens),
    // three trajectories, one malformed number, one stray token count
    let mut blob = String::new();
    let labels: Vec<String> = (0..62).map(|i| i.to_string()).collect();
    blob.push_str(&labels.join(" "));
    blob.push('\n');

    for stroke in 0..3u32 {
        let mut line = String::new();
        for i in 0..6u32 {
            if i > 0 {
                line.push(' ');
            }
            let t = i as f32;
            let _ = write!(
                line,
                "{} {} 0.5 1 {}",
                t * (stroke + 1) as f32,
                t * t,
                t * 0.01
            );
        }
        blob.push_str(&line);
        blob.push('\n');
    }
    blob.push_str("1.0 2.0 not-a-number 1 0.5\n");
    blob.push_str("1.0 2.0 3.0\n");

    // Scan the blob and validate the accounting
    let scan = scan_blob(&blob);
    let report = scan.report;

    if report.lines != 6 {
        return Err(anyhow!("scanned {} lines, expected 6", report.lines));
    }
    if report.label_lines != 1 {
        return Err(anyhow!("{} label lines, expected 1", report.label_lines));
    }
    if report.trajectory_lines != 4 || report.parse_failures != 1 {
        return Err(anyhow!(
            "{} trajectory lines with {} parse failures, expected 4 with 1",
            report.trajectory_lines,
            report.parse_failures
        ));
    }
    if report.invalid_lines != 1 {
        return Err(anyhow!("{} invalid lines, expected 1", report.invalid_lines));
    }
    if scan.trajectories.len() != 3 {
        return Err(anyhow!(
            "parsed {} trajectories, expected 3",
            scan.trajectories.len()
        ));
    }

    for (index, trajectory) in scan.trajectories.iter().enumerate() {
        println!(
            "trajectory {}: {} points, first x = {}",
            index,
            trajectory.len(),
            trajectory.x()[0]
        );
    }

    println!(
        "Scan OK: {} lines, {} trajectories, {} rejected",
        report.lines,
        report.parsed(),
        report.invalid_lines + report.parse_failures
    );
    Ok(())
}
