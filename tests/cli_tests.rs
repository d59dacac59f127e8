//! CLI-level tests for the lexiscreen binary.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn write_scores(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("scores.json");
    fs::write(&path, contents).unwrap();
    path
}

const FULL_SCORES: &str = r#"{
    "eye_tracking": 0.8,
    "handwriting": 0.9,
    "phonetics": 0.4,
    "questionnaire": 0.4,
    "dictation": 0.3
}"#;

#[test]
fn assess_emits_a_json_report() {
    let dir = TempDir::new().unwrap();
    let scores = write_scores(&dir, FULL_SCORES);

    let output = Command::cargo_bin("lexiscreen")
        .unwrap()
        .current_dir(dir.path())
        .args(["assess", scores.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["result"]["dominant_class"], 1);
    assert_eq!(
        report["result"]["final_class"],
        "Moderate indication of dyslexia"
    );
    let cumulative = report["result"]["cumulative_score"].as_f64().unwrap();
    assert!((cumulative - 0.55).abs() < 1e-9);
}

#[test]
fn assess_writes_report_to_output_file() {
    let dir = TempDir::new().unwrap();
    let scores = write_scores(&dir, FULL_SCORES);
    let out_path = dir.path().join("report.md");

    Command::cargo_bin("lexiscreen")
        .unwrap()
        .current_dir(dir.path())
        .args([
            "assess",
            scores.to_str().unwrap(),
            "--format",
            "markdown",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let report = fs::read_to_string(&out_path).unwrap();
    assert!(report.contains("# Screening Assessment Report"));
    assert!(report.contains("Moderate indication of dyslexia"));
}

#[test]
fn assess_fails_on_missing_sub_test() {
    let dir = TempDir::new().unwrap();
    let scores = write_scores(
        &dir,
        r#"{"eye_tracking": 0.8, "handwriting": 0.9, "phonetics": 0.4, "questionnaire": 0.4}"#,
    );

    let assert = Command::cargo_bin("lexiscreen")
        .unwrap()
        .current_dir(dir.path())
        .args(["assess", scores.to_str().unwrap()])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("dictation"));
}

#[test]
fn phrases_prints_the_age_band() {
    let output = Command::cargo_bin("lexiscreen")
        .unwrap()
        .args(["phrases", "--age", "10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(payload["age"], 10);
    assert_eq!(payload["phrases"].as_array().unwrap().len(), 5);
}

#[test]
fn phrases_rejects_out_of_range_age() {
    Command::cargo_bin("lexiscreen")
        .unwrap()
        .args(["phrases", "--age", "30"])
        .assert()
        .failure();
}

#[test]
fn init_creates_config_and_respects_existing_file() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("lexiscreen")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let config = fs::read_to_string(dir.path().join(".lexiscreen.toml")).unwrap();
    assert!(config.contains("eye_tracking = 0.30"));

    // A second init without --force must refuse to overwrite.
    Command::cargo_bin("lexiscreen")
        .unwrap()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .failure();
}
