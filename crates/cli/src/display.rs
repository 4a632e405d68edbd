// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text rendering of entities.
//!
//! Everything here returns `String`s so commands stay thin and the layout can
//! be tested without capturing stdout.

use chrono::{DateTime, Utc};
use nv_core::time::{format_date, format_datetime};
use nv_core::{Applicant, Configuration, ReSchedule, ScheduleStatus};

use crate::colors;

/// Shown in place of secrets.
const MASK: &str = "********";

fn short_date(dt: &DateTime<Utc>) -> String {
    dt.format("%b %-d, %Y").to_string()
}

/// One applicant per line: id, name, e-mail, current date, created.
pub fn format_applicant_line(applicant: &Applicant) -> String {
    let schedule_date = match applicant.schedule_date.as_deref() {
        Some(date) if !date.trim().is_empty() => date,
        _ => "Not scheduled",
    };
    let line = format!(
        "#{:<5} {:<24} {:<28} {:<14} {}",
        applicant.id,
        applicant.full_name(),
        applicant.email,
        schedule_date,
        short_date(&applicant.created_at)
    );
    match &applicant.re_schedule_status {
        Some(status) => format!("{line}  {}", colors::status_badge(status)),
        None => line,
    }
}

/// Applicant header plus profile fields.
pub fn format_applicant_details(applicant: &Applicant) -> String {
    let mut out = vec![
        format!("[{}] {} (#{})", applicant.initials(), applicant.full_name(), applicant.id),
        format!("Email: {}", applicant.email),
        format!("Schedule: {}", applicant.schedule.as_deref().unwrap_or("N/A")),
        format!(
            "Current appointment: {}",
            format_date(applicant.schedule_date.as_deref())
        ),
        format!(
            "Window: {} to {}",
            format_date(applicant.min_date.as_deref()),
            format_date(applicant.max_date.as_deref())
        ),
    ];
    if let Some(status) = &applicant.re_schedule_status {
        out.push(format!("Re-schedule: {}", colors::status_badge(status)));
    }
    out.push(format!("Created: {}", format_datetime(Some(&applicant.created_at))));
    out.push(format!("Updated: {}", format_datetime(applicant.updated_at.as_ref())));
    out.join("\n")
}

/// One attempt per line: id, owner, window, status, error if any.
pub fn format_attempt_line(attempt: &ReSchedule) -> String {
    let mut line = format!(
        "#{:<5} applicant {:<5} {} → {}  {}",
        attempt.id,
        attempt.applicant,
        format_datetime(Some(&attempt.start_datetime)),
        format_datetime(Some(&attempt.end_datetime)),
        colors::status_badge(&attempt.status)
    );
    if let Some(error) = attempt.error.as_deref().filter(|e| !e.is_empty()) {
        line.push_str(&format!("  ({error})"));
    }
    line
}

pub fn format_attempt_details(attempt: &ReSchedule) -> String {
    let mut out = vec![
        format!("Re-schedule #{}", attempt.id),
        format!("Applicant: #{}", attempt.applicant),
        format!("Status: {}", colors::status_badge(&attempt.status)),
        format!("Start: {}", format_datetime(Some(&attempt.start_datetime))),
        format!("End: {}", format_datetime(Some(&attempt.end_datetime))),
    ];
    if let Some(error) = &attempt.error {
        out.push(format!("Error: {error}"));
    }
    if attempt.may_change() {
        out.push("(still in progress, use 'nextvisa watch' to follow it)".to_string());
    }
    out.push(format!("Created: {}", format_datetime(Some(&attempt.created_at))));
    out.push(format!("Updated: {}", format_datetime(attempt.updated_at.as_ref())));
    out.join("\n")
}

/// A status change noticed while watching.
pub fn format_status_change(attempt: &ReSchedule, previous: Option<&ScheduleStatus>) -> String {
    match previous {
        Some(previous) => format!(
            "#{}: {} → {}",
            attempt.id,
            colors::status_badge(previous),
            colors::status_badge(&attempt.status)
        ),
        None => format!("#{}: {}", attempt.id, colors::status_badge(&attempt.status)),
    }
}

pub fn format_configuration(config: &Configuration) -> String {
    [
        format!("base_url:    {}", config.base_url),
        format!("hub_address: {}", config.hub_address),
        format!("sleep_time:  {}s", config.sleep_time),
        format!("push_token:  {}", mask_secret(&config.push_token)),
        format!("push_user:   {}", config.push_user),
        format!("df_msg:      {}", config.df_msg),
        format!("updated:     {}", format_datetime(config.updated_at.as_ref())),
    ]
    .join("\n")
}

/// Hide a secret, keeping only whether it is set.
pub fn mask_secret(secret: &str) -> &'static str {
    if secret.is_empty() {
        "(not set)"
    } else {
        MASK
    }
}

/// Legend of every status badge.
pub fn status_legend() -> String {
    ScheduleStatus::KNOWN
        .iter()
        .map(|status| {
            let badge = colors::status_badge(status);
            let pad = " ".repeat(16usize.saturating_sub(status.as_str().chars().count() + 2));
            format!("{badge}{pad}{}", status_meaning(status))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn status_meaning(status: &ScheduleStatus) -> &'static str {
    match status {
        ScheduleStatus::LoginPending => "Credentials not verified yet",
        ScheduleStatus::Pending => "Queued for the automation",
        ScheduleStatus::Processing => "Automation is searching for a slot",
        ScheduleStatus::Completed => "Appointment moved",
        ScheduleStatus::Failed => "Attempt failed, see its error",
        ScheduleStatus::NotFound => "No slot inside the window",
        ScheduleStatus::Unknown(_) => "Status not known to this console",
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
