// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use nv_core::{Applicant, ApplicantCreate, ApplicantId, ApplicantUpdate, ListParams};
use serde::Serialize;

use crate::cli::{ApplicantCommand, OutputFormat};
use crate::display::{format_applicant_details, format_applicant_line, format_attempt_line};
use crate::error::Result;
use crate::sync::ConsoleStore;

use super::{loaded, write_json};

/// Attempts shown under an applicant.
const RECENT_ATTEMPTS: u32 = 5;

pub async fn run(
    store: &ConsoleStore,
    cmd: ApplicantCommand,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match cmd {
        ApplicantCommand::List { search, page } => {
            list(store, page.params(), search.as_deref(), output, out).await
        }
        ApplicantCommand::Show { id } => show(store, id, output, out).await,
        ApplicantCommand::New {
            name,
            last_name,
            email,
            password,
            fields,
        } => {
            let draft = ApplicantCreate {
                schedule_date: fields.schedule_date,
                min_date: fields.min_date,
                max_date: fields.max_date,
                schedule: fields.schedule,
                ..ApplicantCreate::new(name, last_name, email, password)
            };
            create(store, &draft, output, out).await
        }
        ApplicantCommand::Edit {
            id,
            name,
            last_name,
            email,
            password,
            fields,
        } => {
            let mut patch = ApplicantUpdate {
                name,
                last_name,
                email,
                password,
                ..Default::default()
            };
            fields.apply(&mut patch);
            edit(store, id, &patch, output, out).await
        }
        ApplicantCommand::Delete { id } => {
            store.delete_applicant(id).await?;
            writeln!(out, "Deleted applicant #{id}")?;
            Ok(())
        }
        ApplicantCommand::TestCredentials { id } => {
            let check = store.test_credentials(id).await?;
            match output {
                OutputFormat::Json => write_json(out, &check)?,
                OutputFormat::Text => writeln!(out, "{}", check.summary())?,
            }
            Ok(())
        }
    }
}

/// Case-insensitive match on name, last name or e-mail.
pub(crate) fn matches_search(applicant: &Applicant, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    [&applicant.name, &applicant.last_name, &applicant.email]
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}

pub(crate) async fn list(
    store: &ConsoleStore,
    params: ListParams,
    search: Option<&str>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let applicants = loaded(store.applicants(params).await)?;
    let shown: Vec<&Applicant> = applicants
        .iter()
        .filter(|a| search.is_none_or(|q| matches_search(a, q)))
        .collect();

    if output == OutputFormat::Json {
        return write_json(out, &shown);
    }
    if shown.is_empty() {
        let message = match search {
            Some(_) => "No applicants found.",
            None => "No applicants yet.",
        };
        writeln!(out, "{message}")?;
        return Ok(());
    }
    for applicant in shown {
        writeln!(out, "{}", format_applicant_line(applicant))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ApplicantDetails<'a> {
    #[serde(flatten)]
    applicant: &'a Applicant,
    re_schedules: &'a [nv_core::ReSchedule],
}

pub(crate) async fn show(
    store: &ConsoleStore,
    id: ApplicantId,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let (applicant, attempts) = tokio::join!(
        store.applicant(id),
        store.reschedules_for(id, Some(RECENT_ATTEMPTS))
    );
    let applicant = loaded(applicant)?;
    let attempts = loaded(attempts)?;

    if output == OutputFormat::Json {
        return write_json(
            out,
            &ApplicantDetails {
                applicant: &applicant,
                re_schedules: &attempts,
            },
        );
    }

    writeln!(out, "{}", format_applicant_details(&applicant))?;
    writeln!(out)?;
    if attempts.is_empty() {
        writeln!(out, "No re-schedule attempts.")?;
    } else {
        writeln!(out, "Recent attempts:")?;
        for attempt in attempts.iter() {
            writeln!(out, "  {}", format_attempt_line(attempt))?;
        }
    }
    Ok(())
}

pub(crate) async fn create(
    store: &ConsoleStore,
    draft: &ApplicantCreate,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    draft.validate()?;
    let created = store.create_applicant(draft).await?;
    match output {
        OutputFormat::Json => write_json(out, &created),
        OutputFormat::Text => {
            writeln!(out, "Created applicant #{} ({})", created.id, created.full_name())?;
            Ok(())
        }
    }
}

pub(crate) async fn edit(
    store: &ConsoleStore,
    id: ApplicantId,
    patch: &ApplicantUpdate,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    patch.validate()?;
    let updated = store.update_applicant(id, patch).await?;
    match output {
        OutputFormat::Json => write_json(out, &updated),
        OutputFormat::Text => {
            writeln!(out, "Updated applicant #{}", updated.id)?;
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "applicant_tests.rs"]
mod tests;
