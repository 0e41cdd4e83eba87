use assert_cmd::prelude::*;
use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn init_workspace(root: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("digilets")?;
    cmd.current_dir(root);
    cmd.args(["init", "letters", "--examples"]);
    cmd.assert().success();
    Ok(root.join("letters"))
}

#[test]
fn dynamics_aggregates_symbol_curves() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let ws = init_workspace(tmp.path())?;

    let out = tmp.path().join("dynamics.json");
    let mut dynamics = Command::cargo_bin("digilets")?;
    dynamics.current_dir(&ws);
    dynamics.args([
        "dynamics",
        "--symbol",
        "1",
        "--points",
        "20",
        "--output",
        out.to_str().expect("temp path to UTF-8"),
    ]);
    dynamics
        .assert()
        .success()
        .stdout(predicate::str::contains("Symbol 1 dynamics:"));
    assert!(out.exists(), "dynamics summary should be created");

    let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
    assert_eq!(summary["symbol"], 1);
    assert_eq!(summary["points"], 20);
    assert_eq!(summary["instances"], 5);

    let velocity_mean = summary["velocity"]["mean"].as_array().expect("mean curve");
    assert_eq!(velocity_mean.len(), 20);
    let pressure_instances = summary["pressure"]["instances"]
        .as_array()
        .expect("instance curves");
    assert_eq!(pressure_instances.len(), 5);

    Ok(())
}

#[test]
fn dynamics_defaults_to_first_corpus_file() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let ws = init_workspace(tmp.path())?;

    // No file argument and no --output: lands in exports/
    let mut dynamics = Command::cargo_bin("digilets")?;
    dynamics.current_dir(&ws);
    dynamics.args(["dynamics", "--symbol", "0", "--points", "10"]);
    dynamics.assert().success();

    let out = ws.join("exports").join("dynamics_symbol0.json");
    assert!(out.exists(), "default output path should be used");

    Ok(())
}

#[test]
fn dynamics_rejects_missing_symbol() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let ws = init_workspace(tmp.path())?;

    // The example corpus has two symbols; symbol 50 has no instances
    let mut dynamics = Command::cargo_bin("digilets")?;
    dynamics.current_dir(&ws);
    dynamics.args(["dynamics", "--symbol", "50"]);
    dynamics.assert().failure();

    Ok(())
}
