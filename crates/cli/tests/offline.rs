// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn help_lists_command_groups() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Applicants:"))
        .stdout(predicate::str::contains("console-config"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn statuses_prints_legend() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .arg("statuses")
        .assert()
        .success()
        .stdout(predicate::str::contains("↻ PROCESSING"))
        .stdout(predicate::str::contains("✓ COMPLETED"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn statuses_json() {
    let home = TempDir::new().unwrap();
    let output = nextvisa(&home)
        .args(["statuses", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 6);
}

#[test]
fn completion_generates_script() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nextvisa"));
}

#[test]
fn invalid_id_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .args(["applicant", "show", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid id"));
}

#[test]
fn unknown_status_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .args(["reschedule", "edit", "9", "--status", "ON_HOLD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown status 'ON_HOLD'"));
}
