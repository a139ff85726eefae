use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

const MODEL: &str = include_str!("fixtures/model.json");
const DATASET: &str = include_str!("fixtures/ttc_small.csv");

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("model.json"), MODEL).unwrap();
    fs::write(tmp.path().join("ttc.csv"), DATASET).unwrap();

    let mut cmd = Command::cargo_bin("ttc-delay-risk").unwrap();
    cmd.arg("validate")
        .arg("--model")
        .arg(tmp.path().join("model.json"))
        .arg("--data")
        .arg(tmp.path().join("ttc.csv"));
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ttc-delay-risk validate ok"));
    assert!(stdout.contains("features: 7"));
    assert!(stdout.contains("trees: 2"));
    assert!(stdout.contains("rows: 10"));
    assert!(stdout.contains("lines: BD, YU"));
    assert!(!stdout.contains("delay_reason: absent"));
}

#[test]
fn validate_command_renamed_column_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("model.json"), MODEL).unwrap();
    let csv = "hour,line_BD,line_SHP,cause_category_Mechanical\n8,0,1,0\n";
    fs::write(tmp.path().join("ttc.csv"), csv).unwrap();

    let mut cmd = Command::cargo_bin("ttc-delay-risk").unwrap();
    cmd.arg("validate")
        .arg("--model")
        .arg(tmp.path().join("model.json"))
        .arg("--data")
        .arg(tmp.path().join("ttc.csv"));
    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("line_SHP"));
}
