// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle states of a re-schedule attempt.
//!
//! Transitions happen exclusively in the backend automation; the console
//! only interprets the state it observes:
//!
//! ```text
//! LOGIN_PENDING ──► PENDING ──► PROCESSING ──┬──► COMPLETED
//!                                            ├──► FAILED
//!                                            └──► NOT_FOUND
//! ```
//!
//! Values outside this set are kept verbatim in [`ScheduleStatus::Unknown`]
//! so a newer backend never breaks deserialization.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Observed state of a re-schedule attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScheduleStatus {
    /// Credentials have not been verified yet. Initial state.
    LoginPending,
    /// Queued, not yet attempted.
    Pending,
    /// Automation is running; expected to change soon.
    Processing,
    /// The appointment was moved.
    Completed,
    /// The attempt failed; the attempt's `error` explains why.
    Failed,
    /// No slot was found inside the requested window.
    NotFound,
    /// A value this console does not know about.
    Unknown(String),
}

impl ScheduleStatus {
    /// Every state with a defined meaning, in lifecycle order.
    pub const KNOWN: [ScheduleStatus; 6] = [
        ScheduleStatus::LoginPending,
        ScheduleStatus::Pending,
        ScheduleStatus::Processing,
        ScheduleStatus::Completed,
        ScheduleStatus::Failed,
        ScheduleStatus::NotFound,
    ];

    /// Returns the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            ScheduleStatus::LoginPending => "LOGIN_PENDING",
            ScheduleStatus::Pending => "PENDING",
            ScheduleStatus::Processing => "PROCESSING",
            ScheduleStatus::Completed => "COMPLETED",
            ScheduleStatus::Failed => "FAILED",
            ScheduleStatus::NotFound => "NOT_FOUND",
            ScheduleStatus::Unknown(raw) => raw,
        }
    }

    /// Returns true while the backend may still move this attempt forward.
    ///
    /// Views showing such an attempt should keep polling.
    pub fn may_change(&self) -> bool {
        matches!(
            self,
            ScheduleStatus::LoginPending | ScheduleStatus::Pending | ScheduleStatus::Processing
        )
    }

    /// Returns true for the final states (completed, failed, not found).
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ScheduleStatus::Completed | ScheduleStatus::Failed | ScheduleStatus::NotFound
        )
    }

    /// Returns true if the value is outside the known set.
    pub fn is_unknown(&self) -> bool {
        matches!(self, ScheduleStatus::Unknown(_))
    }

    /// Presentation for this state.
    pub fn indicator(&self) -> StatusIndicator {
        match self {
            ScheduleStatus::LoginPending => StatusIndicator::LOGIN_PENDING,
            ScheduleStatus::Pending => StatusIndicator::PENDING,
            ScheduleStatus::Processing => StatusIndicator::PROCESSING,
            ScheduleStatus::Completed => StatusIndicator::COMPLETED,
            ScheduleStatus::Failed => StatusIndicator::FAILED,
            ScheduleStatus::NotFound => StatusIndicator::NOT_FOUND,
            ScheduleStatus::Unknown(_) => StatusIndicator::UNKNOWN,
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScheduleStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_uppercase().as_str() {
            "LOGIN_PENDING" => ScheduleStatus::LoginPending,
            "PENDING" => ScheduleStatus::Pending,
            "PROCESSING" => ScheduleStatus::Processing,
            "COMPLETED" => ScheduleStatus::Completed,
            "FAILED" => ScheduleStatus::Failed,
            "NOT_FOUND" => ScheduleStatus::NotFound,
            _ => ScheduleStatus::Unknown(s.to_string()),
        };
        Ok(status)
    }
}

impl From<String> for ScheduleStatus {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

impl From<ScheduleStatus> for String {
    fn from(status: ScheduleStatus) -> Self {
        status.as_str().to_string()
    }
}

/// How a status is drawn: a glyph, a stable class name, and a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusIndicator {
    /// Single-glyph badge.
    pub symbol: &'static str,
    /// Stable identifier, unique per defined state.
    pub class: &'static str,
    /// ANSI 256-color code.
    pub color: u8,
    /// Whether the badge should be drawn as in-progress (spinner).
    pub animated: bool,
}

impl StatusIndicator {
    pub const LOGIN_PENDING: StatusIndicator = StatusIndicator {
        symbol: "⚿",
        class: "login-pending",
        color: 179,
        animated: false,
    };
    pub const PENDING: StatusIndicator = StatusIndicator {
        symbol: "◷",
        class: "pending",
        color: 173,
        animated: false,
    };
    pub const PROCESSING: StatusIndicator = StatusIndicator {
        symbol: "↻",
        class: "processing",
        color: 75,
        animated: true,
    };
    pub const COMPLETED: StatusIndicator = StatusIndicator {
        symbol: "✓",
        class: "completed",
        color: 71,
        animated: false,
    };
    pub const FAILED: StatusIndicator = StatusIndicator {
        symbol: "✗",
        class: "failed",
        color: 167,
        animated: false,
    };
    pub const NOT_FOUND: StatusIndicator = StatusIndicator {
        symbol: "?",
        class: "not-found",
        color: 245,
        animated: false,
    };
    pub const UNKNOWN: StatusIndicator = StatusIndicator {
        symbol: "!",
        class: "unknown",
        color: 178,
        animated: false,
    };
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
