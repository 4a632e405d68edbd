// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use nv_core::ScheduleStatus;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::display::{status_legend, status_meaning};
use crate::error::Result;

#[derive(Serialize)]
struct StatusEntry {
    status: String,
    symbol: &'static str,
    class: &'static str,
    color: u8,
    animated: bool,
    may_change: bool,
    terminal: bool,
    meaning: &'static str,
}

/// Print the status legend. Works offline.
pub fn run(output: OutputFormat, out: &mut impl Write) -> Result<()> {
    if output == OutputFormat::Text {
        writeln!(out, "{}", status_legend())?;
        return Ok(());
    }

    let entries: Vec<StatusEntry> = ScheduleStatus::KNOWN
        .iter()
        .map(|status| {
            let indicator = status.indicator();
            StatusEntry {
                status: status.to_string(),
                symbol: indicator.symbol,
                class: indicator.class,
                color: indicator.color,
                animated: indicator.animated,
                may_change: status.may_change(),
                terminal: status.is_terminal(),
                meaning: status_meaning(status),
            }
        })
        .collect();
    super::write_json(out, &entries)
}

#[cfg(test)]
#[path = "statuses_tests.rs"]
mod tests;
