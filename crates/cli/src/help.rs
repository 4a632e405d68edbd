// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level help layout.

use crate::colors;
use anstyle::{Ansi256Color, Color, Style};
use clap::builder::styling::Styles;

/// clap styles matching [`colors::codes`].
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template: command groups come before the options.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Command groups shown in the main help.
pub fn commands() -> String {
    // Pad the plain name; escape codes would throw off `{:<16}`.
    let row = |name: &str, about: &str| {
        let pad = " ".repeat(16usize.saturating_sub(name.len()));
        format!("  {}{pad}{about}", colors::literal(name))
    };

    [
        colors::header("Applicants:"),
        row("applicant", "List, show, create, edit and delete applicants"),
        row("watch", "Follow an applicant's re-schedule attempts"),
        String::new(),
        colors::header("Re-schedules:"),
        row("reschedule", "Manage re-schedule attempts"),
        row("statuses", "Explain the attempt status badges"),
        String::new(),
        colors::header("Backend & Session:"),
        row("settings", "Show or change the automation settings"),
        row("login", "Store a bearer token for the API"),
        row("logout", "Forget the stored token"),
        row("console-config", "Manage this console's local configuration"),
        row("completion", "Generate shell completions"),
    ]
    .join("\n")
}

/// Quickstart shown after the options in the main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  nextvisa login --token <token>     Sign in with an issued token
  nextvisa applicant list            List applicants
  nextvisa applicant show <id>       Show one applicant
  nextvisa reschedule new <id> --start 2026-03-01 --end 2026-03-31    Request a new date
  nextvisa watch <id>                Follow attempts until they settle",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
