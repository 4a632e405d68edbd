// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn commands_lists_every_top_level_command() {
    let text = commands();
    for name in [
        "applicant",
        "watch",
        "reschedule",
        "statuses",
        "settings",
        "login",
        "logout",
        "console-config",
        "completion",
    ] {
        assert!(text.contains(name), "missing {name} in:\n{text}");
    }
}

#[test]
fn template_places_commands_before_options() {
    let template = template();
    let before = template.find("{before-help}").unwrap();
    let options = template.find("{options}").unwrap();
    assert!(before < options);
    assert!(template.contains("Options:"));
}

#[test]
fn quickstart_mentions_login() {
    assert!(quickstart().contains("login --token"));
}
