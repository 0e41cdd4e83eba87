use assert_cmd::prelude::*;
use assert_cmd::Command;
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
fn export_json_groups_samples_by_source() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let ws = init_workspace(tmp.path())?;

    let out = tmp.path().join("dataset.json");
    let mut export = Command::cargo_bin("digilets")?;
    export.current_dir(&ws);
    export.args([
        "export",
        "--format",
        "json",
        "--pretty",
        "--output",
        out.to_str().expect("temp path to UTF-8"),
    ]);
    export.assert().success();
    assert!(out.exists(), "JSON dataset should be created");

    let dataset: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
    assert_eq!(dataset["num_steps"], 100);
    assert_eq!(dataset["instances_per_class"], 5);

    let sources = dataset["sources"].as_array().expect("sources array");
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["file"], "000-sample_preprocessed");

    let samples = sources[0]["samples"].as_array().expect("samples array");
    assert_eq!(samples.len(), 10);

    // Index-based labels: five instances per symbol
    assert_eq!(samples[0]["label"], 0);
    assert_eq!(samples[4]["label"], 0);
    assert_eq!(samples[5]["label"], 1);
    assert_eq!(samples[9]["label"], 1);

    // Fixed-length rows of nine kinematic features
    let features = samples[0]["features"].as_array().expect("features array");
    assert_eq!(features.len(), 100);
    assert_eq!(features[0].as_array().expect("feature row").len(), 9);

    Ok(())
}

#[test]
fn export_flags_override_workspace_settings() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let ws = init_workspace(tmp.path())?;

    let out = tmp.path().join("short.json");
    let mut export = Command::cargo_bin("digilets")?;
    export.current_dir(&ws);
    export.args([
        "export",
        "--num-steps",
        "12",
        "--merged",
        "--format",
        "json",
        "--output",
        out.to_str().expect("temp path to UTF-8"),
    ]);
    export.assert().success();

    let dataset: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
    assert_eq!(dataset["num_steps"], 12);

    // --merged flattens sources into one sample list
    let samples = dataset["samples"].as_array().expect("samples array");
    assert_eq!(samples.len(), 10);
    let features = samples[0]["features"].as_array().expect("features array");
    assert_eq!(features.len(), 12);

    Ok(())
}

#[test]
fn export_bincode_writes_binary() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;
    let ws = init_workspace(tmp.path())?;

    let out = tmp.path().join("dataset.bin");
    let mut export = Command::cargo_bin("digilets")?;
    export.current_dir(&ws);
    export.args([
        "export",
        "--format",
        "bincode",
        "--output",
        out.to_str().expect("temp path to UTF-8"),
    ]);
    export.assert().success();

    let bytes = fs::read(&out)?;
    assert!(!bytes.is_empty(), "bincode dataset should not be empty");
    assert!(
        serde_json::from_slice::<serde_json::Value>(&bytes).is_err(),
        "bincode output should not be JSON"
    );

    Ok(())
}

#[test]
fn export_fails_without_recordings() -> Result<(), Box<dyn Error>> {
    let tmp = tempdir()?;

    // Workspace without --examples has an empty data directory
    let mut init = Command::cargo_bin("digilets")?;
    init.current_dir(tmp.path());
    init.args(["init", "empty"]);
    init.assert().success();

    let mut export = Command::cargo_bin("digilets")?;
    export.current_dir(tmp.path().join("empty"));
    export.args(["export", "--format", "json"]);
    export.assert().failure();

    Ok(())
}
