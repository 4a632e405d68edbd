// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::transport::SessionError;

/// All errors surfaced by the console.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] nv_core::ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("could not determine the console home directory\n  hint: set NEXTVISA_HOME to a writable directory")]
    NoHomeDir,

    #[error("unknown config key '{key}'\n  hint: valid keys are: {valid}")]
    UnknownConfigKey { key: String, valid: String },

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("invalid date/time '{0}'\n  hint: use YYYY-MM-DD, 'YYYY-MM-DD HH:MM' or RFC 3339 (2026-03-01T09:00:00Z)")]
    InvalidDateTime(String),

    #[error("token cannot be empty\n  hint: pass the bearer token issued by the sign-in provider")]
    EmptyToken,

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
