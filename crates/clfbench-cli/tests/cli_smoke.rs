//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `clfbench` binary to verify that
//! argument parsing, report output, and error handling work end-to-end.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("clfbench").unwrap()
}

fn write_dataset(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("data.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "f1,f2,label").unwrap();
    for i in 0..30 {
        let offset = (i % 3) as f64;
        writeln!(file, "{},{},0", offset, offset).unwrap();
        writeln!(file, "{},{},1", 20.0 + offset, 20.0 - offset).unwrap();
    }
    path
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("default-config"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clfbench"));
}

#[test]
fn default_config_is_json() {
    cmd()
        .arg("default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"classifiers\""))
        .stdout(predicate::str::contains("\"train_fraction\": 0.7"));
}

// ---------------------------------------------------------------------------
// Evaluate subcommand
// ---------------------------------------------------------------------------

#[test]
fn evaluate_prints_ranked_report() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir);

    cmd()
        .args(["evaluate", dataset.to_str().unwrap(), "--split-seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" 1. knn"))
        .stdout(predicate::str::contains(" 2. random"));
}

#[test]
fn evaluate_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir);
    let output = dir.path().join("leaderboard.json");

    cmd()
        .args([
            "evaluate",
            dataset.to_str().unwrap(),
            "--seed",
            "7",
            "-k",
            "1",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let json = std::fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"name\": \"knn\""));
    assert!(json.contains("\"rank\": 2"));
}

#[test]
fn evaluate_uses_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir);
    let config = dir.path().join("bench.json");
    std::fs::write(
        &config,
        r#"{
            "evaluation": {"train_fraction": 0.5, "sampling": "first_k"},
            "classifiers": [{"name": "coin", "Random": {"seed": 1}}]
        }"#,
    )
    .unwrap();

    cmd()
        .args(["evaluate", dataset.to_str().unwrap(), config.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("coin"))
        .stdout(predicate::str::contains("knn").not());
}

#[test]
fn missing_dataset_exits_non_zero() {
    cmd()
        .args(["evaluate", "/nonexistent/clfbench/titanic.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read dataset"));
}

#[test]
fn zero_k_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir);

    cmd()
        .args(["evaluate", dataset.to_str().unwrap(), "-k", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
