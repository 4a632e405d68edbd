// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations.
//!
//! Commands that talk to the backend take a [`ConsoleStore`] and a writer so
//! tests can run them against a mock transport and inspect the output.

pub mod applicant;
pub mod console_config;
pub mod reschedule;
pub mod session;
pub mod settings;
pub mod statuses;
pub mod watch;

use std::io::Write;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::sync::QueryState;

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// The data of a finished read, or the error it ended with.
pub(crate) fn loaded<T>(state: QueryState<T>) -> Result<Arc<T>> {
    Ok(state.into_result()?)
}

/// Parse a date or date-time given on the command line.
pub(crate) fn parse_when(input: &str) -> Result<DateTime<Utc>> {
    nv_core::time::parse_timestamp(input).ok_or_else(|| Error::InvalidDateTime(input.to_string()))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
