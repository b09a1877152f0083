//! End-to-end CLI integration tests.

use std::collections::HashSet;

use assert_cmd::Command;
use predicates::prelude::*;

fn setcalc() -> Command {
    Command::cargo_bin("setcalc").expect("binary not found")
}

fn stdout_lines(args: &[&str]) -> Vec<String> {
    let output = setcalc().args(args).output().expect("failed to run");
    assert!(output.status.success(), "setcalc {args:?} failed");
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn help_flag() {
    setcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--tasks"));
}

#[test]
fn version_flag() {
    setcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("setcalc"));
}

#[test]
fn default_batch_prints_every_entry() {
    let lines: HashSet<String> = stdout_lines(&[]).into_iter().collect();
    let expected: HashSet<String> = [
        "Intersection: 2 3",
        "Union: 1 2 3 4",
        "Difference: 1",
        "Symmetric Difference: 1 4",
        "Subset: true",
        "Mean: 3.000000",
        "Median: 3.000000",
        "Mode: 3",
        "Variance: 2.000000",
        "Standard Deviation: 1.414214",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    assert_eq!(lines, expected);
}

#[test]
fn declared_order_is_stable() {
    let lines = stdout_lines(&["--order", "declared", "--tasks", "mean,union,subset"]);
    assert_eq!(lines, vec!["Mean: 3.000000", "Union: 1 2 3 4", "Subset: true"]);
}

#[test]
fn quiet_prints_values_only() {
    let lines = stdout_lines(&["-q", "--tasks", "difference"]);
    assert_eq!(lines, vec!["1"]);
}

#[test]
fn custom_inputs_and_precision() {
    let lines = stdout_lines(&[
        "--tasks",
        "mean,intersection",
        "--order",
        "declared",
        "--sample",
        "1,2",
        "--left",
        "7,8,9",
        "--right",
        "9,7",
        "-p",
        "2",
    ]);
    assert_eq!(lines, vec!["Mean: 1.50", "Intersection: 9 7"]);
}

#[test]
fn empty_sample_yields_nan() {
    setcalc()
        .args(["--tasks", "mean", "--sample", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mean: NaN"));
}

#[test]
fn json_output() {
    let output = setcalc()
        .args(["-f", "json", "--tasks", "subset,mode"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    let names: HashSet<&str> = entries.iter().map(|e| e["name"].as_str().unwrap()).collect();
    assert_eq!(names, HashSet::from(["Subset", "Mode"]));
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.txt");
    setcalc()
        .args(["--order", "name", "-o", path.to_str().unwrap()])
        .assert()
        .success();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 10);
    assert!(contents.starts_with("Difference: 1\n"));
}

#[test]
fn unknown_task_exits_with_config_code() {
    setcalc()
        .args(["--tasks", "kurtosis"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown task: kurtosis"));
}

#[test]
fn malformed_elements_exit_with_config_code() {
    setcalc()
        .args(["--left", "1,x"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid element list"));
}

#[test]
fn precision_out_of_range_is_a_usage_error() {
    setcalc()
        .args(["-p", "70000"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("70000"));
}

#[test]
fn list_tasks() {
    setcalc()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("symmetric-difference"))
        .stdout(predicate::str::contains("stddev"));
}

#[test]
fn completion_bash() {
    setcalc()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("setcalc"));
}

#[test]
fn env_selects_tasks() {
    setcalc()
        .env("SETCALC_TASKS", "median")
        .assert()
        .success()
        .stdout(predicate::eq("Median: 3.000000\n"));
}
