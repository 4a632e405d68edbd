// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared by every layer that talks to the backend.

use thiserror::Error;

/// Failures produced while talking to the backend API.
///
/// Errors are `Clone` so a single fetch outcome can be handed to every
/// reader that joined the same in-flight request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the server or no response came back.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },

    /// The session is no longer valid (HTTP 401).
    #[error("session expired\n  hint: sign in again with 'nextvisa login --token <token>'")]
    AuthExpired,

    /// Input was rejected before it was sent.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns the HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::AuthExpired => Some(401),
            _ => None,
        }
    }

    /// Returns true if repeating the same read may succeed.
    ///
    /// Client errors (4xx, including an expired session) are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Decode(_) => true,
            ApiError::Http { status, .. } => *status >= 500,
            ApiError::AuthExpired | ApiError::Validation(_) => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// A specialized Result type for backend operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
