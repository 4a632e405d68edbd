// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `watch`: follow an applicant's attempts while the automation works.
//!
//! Each tick marks the applicant's attempt lists stale and reads them again.
//! Status changes are reported from the cache's `Updated` events, so the
//! output reflects what the cache stored rather than what one read returned.
//! Watching ends once no attempt may change, or on the shutdown signal.

use std::collections::HashMap;
use std::future::Future;
use std::io::Write;
use std::time::Duration;

use nv_core::{ApplicantId, ReSchedule, ReScheduleId, ScheduleStatus};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::cli::OutputFormat;
use crate::display::format_status_change;
use crate::error::Result;
use crate::sync::{keys, CacheEventKind, ConsoleStore, QueryKey};

#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub applicant: ApplicantId,
    pub interval: Duration,
    pub limit: Option<u32>,
}

/// How a watch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEnd {
    /// No attempt may change anymore.
    Settled,
    Interrupted,
}

#[derive(Serialize)]
struct StatusChange<'a> {
    id: ReScheduleId,
    applicant: ApplicantId,
    status: &'a ScheduleStatus,
    previous: Option<&'a ScheduleStatus>,
}

pub async fn run(
    store: &ConsoleStore,
    options: WatchOptions,
    output: OutputFormat,
    out: &mut impl Write,
    shutdown: impl Future<Output = ()>,
) -> Result<WatchEnd> {
    let watched = keys::reschedules::by_applicant(options.applicant, options.limit);
    let (tx, mut updates) = mpsc::unbounded_channel::<QueryKey>();
    let _subscription = store.cache().subscribe(
        keys::reschedules::for_applicant(options.applicant).into(),
        move |event| {
            if event.kind == CacheEventKind::Updated {
                if tx.send(event.key.clone()).is_err() {
                    trace!("watch ended, dropping update for {}", event.key);
                }
            }
        },
    );

    let mut seen: HashMap<ReScheduleId, ScheduleStatus> = HashMap::new();
    let mut ticker = tokio::time::interval(options.interval);
    tokio::pin!(shutdown);

    if output == OutputFormat::Text {
        writeln!(
            out,
            "Watching applicant #{} every {}s (Ctrl-C to stop)",
            options.applicant,
            options.interval.as_secs()
        )?;
    }

    loop {
        tokio::select! {
            _ = &mut shutdown => return Ok(WatchEnd::Interrupted),
            _ = ticker.tick() => {}
        }

        store
            .cache()
            .invalidate(&[keys::reschedules::for_applicant(options.applicant).into()]);
        let attempts = match store
            .reschedules_for(options.applicant, options.limit)
            .await
            .into_result()
        {
            Ok(attempts) => attempts,
            Err(e) if e.is_retryable() => {
                warn!("refresh of applicant {} failed: {}", options.applicant, e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        while let Ok(key) = updates.try_recv() {
            if key != watched {
                continue;
            }
            if let Some(current) = store.cache().peek::<Vec<ReSchedule>>(&key).data() {
                report_changes(current, &mut seen, output, out)?;
            }
        }

        if !attempts.iter().any(ReSchedule::may_change) {
            debug!("applicant {} has no attempt left to follow", options.applicant);
            if output == OutputFormat::Text {
                writeln!(out, "No attempt can change anymore.")?;
            }
            return Ok(WatchEnd::Settled);
        }
    }
}

/// Print attempts that are new or whose status moved since the last report.
fn report_changes(
    attempts: &[ReSchedule],
    seen: &mut HashMap<ReScheduleId, ScheduleStatus>,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    for attempt in attempts {
        let previous = seen.get(&attempt.id);
        if previous == Some(&attempt.status) {
            continue;
        }
        match output {
            OutputFormat::Text => writeln!(out, "{}", format_status_change(attempt, previous))?,
            OutputFormat::Json => {
                let change = StatusChange {
                    id: attempt.id,
                    applicant: attempt.applicant,
                    status: &attempt.status,
                    previous,
                };
                writeln!(out, "{}", serde_json::to_string(&change)?)?;
            }
        }
        seen.insert(attempt.id, attempt.status.clone());
    }
    Ok(())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
