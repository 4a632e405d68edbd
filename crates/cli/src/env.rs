// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the console are defined here
//! with typed accessor functions. The variable name constants are generated
//! by `build.rs` and live in the [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

/// Returns the value of `NEXTVISA_HOME` if set and non-empty.
pub fn console_home() -> Option<PathBuf> {
    non_empty(vars::NEXTVISA_HOME).map(PathBuf::from)
}

/// Returns the value of `NEXTVISA_API_URL` if set and non-empty.
pub fn api_url() -> Option<String> {
    non_empty(vars::NEXTVISA_API_URL)
}

/// Returns the value of `NEXTVISA_TOKEN` if set and non-empty.
pub fn token() -> Option<String> {
    non_empty(vars::NEXTVISA_TOKEN)
}

/// Returns the value of `NEXTVISA_LOG` if set and non-empty.
pub fn log_filter() -> Option<String> {
    non_empty(vars::NEXTVISA_LOG)
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
