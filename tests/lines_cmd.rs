use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

const DATASET: &str = include_str!("fixtures/ttc_small.csv");

#[test]
fn lines_command_lists_sorted_lines() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("ttc.csv"), DATASET).unwrap();

    let mut cmd = Command::cargo_bin("ttc-delay-risk").unwrap();
    cmd.arg("lines").arg("--data").arg(tmp.path().join("ttc.csv"));
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "BD\nYU\n");
}

#[test]
fn lines_command_missing_dataset_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("ttc-delay-risk").unwrap();
    cmd.arg("lines").arg("--data").arg(tmp.path().join("nope.csv"));
    cmd.assert().failure();
}
