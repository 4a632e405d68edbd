// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help text and status badges.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use nv_core::ScheduleStatus;

/// ANSI 256-color codes used by help output.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders, defaults and hints: medium grey
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Whether output should carry ANSI colors.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// Wrap `text` in a 256-color foreground sequence.
pub fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Badge for a re-schedule status: glyph plus wire name.
///
/// Colored with the status' own palette entry when colors are enabled.
pub fn status_badge(status: &ScheduleStatus) -> String {
    let indicator = status.indicator();
    let badge = format!("{} {}", indicator.symbol, status.as_str());
    if should_colorize() {
        paint(indicator.color, &badge)
    } else {
        badge
    }
}

/// Colorize an examples block for `after_help`.
///
/// ```text
/// Examples:
///   nextvisa applicant list -o json    List applicants as JSON
/// ```
///
/// Lines ending in `:` become headers. In example lines, the command part
/// (everything before a run of two spaces) is colorized with
/// [`colorize_command`] and the description is left alone.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let body = line.trim_start();
            let indent = &line[..line.len() - body.len()];
            if body.ends_with(':') && !body.contains("  ") {
                return format!("{indent}{}", header(body));
            }
            match find_description_start(body) {
                Some(split) => {
                    let (cmd, desc) = body.split_at(split);
                    format!("{indent}{}{desc}", colorize_command(cmd))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize one example command.
///
/// Placeholders (`<id>`), quoted strings and the value following a flag are
/// drawn in the context color; everything else as a literal.
pub fn colorize_command(cmd: &str) -> String {
    let mut out = Vec::new();
    let mut after_flag = false;
    for word in split_words(cmd) {
        let is_value = word.starts_with('<') || word.starts_with('"');
        if is_value || after_flag {
            out.push(context(word));
            after_flag = false;
        } else {
            out.push(literal(word));
            after_flag = word.starts_with('-') && !word.contains('=');
        }
    }
    out.join(" ")
}

/// Split on spaces, keeping quoted and angle-bracketed runs whole.
fn split_words(cmd: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start = None;
    let mut closing = None;
    for (i, c) in cmd.char_indices() {
        match (start, closing) {
            (None, _) if c == ' ' => {}
            (None, _) => {
                start = Some(i);
                closing = match c {
                    '"' => Some('"'),
                    '<' => Some('>'),
                    _ => None,
                };
            }
            (Some(_), Some(end)) if c == end => closing = None,
            (Some(s), None) if c == ' ' => {
                words.push(&cmd[s..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        words.push(&cmd[s..]);
    }
    words
}

/// Byte offset where the description starts: the first run of 2+ spaces.
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    if line[start..].trim().is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
