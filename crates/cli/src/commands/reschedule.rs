// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use nv_core::{ReScheduleCreate, ReScheduleUpdate};

use crate::cli::{OutputFormat, RescheduleCommand};
use crate::display::{format_attempt_details, format_attempt_line};
use crate::error::Result;
use crate::sync::ConsoleStore;

use super::{loaded, parse_when, write_json};

pub async fn run(
    store: &ConsoleStore,
    cmd: RescheduleCommand,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        RescheduleCommand::List { applicant, page } => {
            let state = match applicant {
                Some(id) => store.reschedules_for(id, page.limit).await,
                None => store.reschedules(page.params()).await,
            };
            let attempts = loaded(state)?;
            if output == OutputFormat::Json {
                return write_json(out, attempts.as_slice());
            }
            if attempts.is_empty() {
                writeln!(out, "No re-schedule attempts.")?;
            }
            for attempt in attempts.iter() {
                writeln!(out, "{}", format_attempt_line(attempt))?;
            }
            Ok(())
        }
        RescheduleCommand::Show { id } => {
            let attempt = loaded(store.reschedule(id).await)?;
            match output {
                OutputFormat::Json => write_json(out, &*attempt),
                OutputFormat::Text => {
                    writeln!(out, "{}", format_attempt_details(&attempt))?;
                    Ok(())
                }
            }
        }
        RescheduleCommand::New {
            applicant,
            start,
            end,
            status,
        } => {
            let draft = ReScheduleCreate {
                status,
                ..ReScheduleCreate::new(applicant, parse_when(&start)?, parse_when(&end)?)
            };
            draft.validate()?;
            let created = store.create_reschedule(&draft).await?;
            match output {
                OutputFormat::Json => write_json(out, &created),
                OutputFormat::Text => {
                    writeln!(
                        out,
                        "Created re-schedule #{} for applicant #{}",
                        created.id, created.applicant
                    )?;
                    Ok(())
                }
            }
        }
        RescheduleCommand::Edit {
            id,
            start,
            end,
            status,
            error,
        } => {
            let patch = ReScheduleUpdate {
                start_datetime: start.as_deref().map(parse_when).transpose()?,
                end_datetime: end.as_deref().map(parse_when).transpose()?,
                status,
                error,
            };
            patch.validate()?;
            let updated = store.update_reschedule(id, &patch).await?;
            match output {
                OutputFormat::Json => write_json(out, &updated),
                OutputFormat::Text => {
                    writeln!(out, "Updated re-schedule #{}", updated.id)?;
                    Ok(())
                }
            }
        }
        RescheduleCommand::Delete { id } => {
            store.delete_reschedule(id).await?;
            writeln!(out, "Deleted re-schedule #{id}")?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "reschedule_tests.rs"]
mod tests;
