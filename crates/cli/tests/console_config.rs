// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn path_points_into_home() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .args(["console-config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            home.path().join("config.toml").display().to_string(),
        ));
}

#[test]
fn show_defaults_without_file() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .args(["console-config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url = \"http://localhost:8000\""))
        .stdout(predicate::str::contains("stale_after_secs = 300"));
}

#[test]
fn set_then_show() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .args(["console-config", "set", "api_url", "https://api.example.com/"])
        .assert()
        .success();

    nextvisa(&home)
        .args(["console-config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url = \"https://api.example.com\""));
}

#[test]
fn env_url_shows_in_effective_config() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .env("NEXTVISA_API_URL", "http://10.1.1.1:8000")
        .args(["console-config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://10.1.1.1:8000"));
}

#[test]
fn unknown_key_fails_with_hint() {
    let home = TempDir::new().unwrap();
    nextvisa(&home)
        .args(["console-config", "set", "colour", "red"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: unknown config key 'colour'"))
        .stderr(predicate::str::contains("hint: valid keys are"));
}
