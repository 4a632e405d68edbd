// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Re-schedule attempts.
//!
//! An attempt belongs to exactly one applicant. The backend transitions its
//! status in place; the console only creates and deletes attempts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::applicant::ApplicantId;
use crate::error::{ApiError, Result};
use crate::status::ScheduleStatus;

/// Server-assigned attempt identifier.
pub type ReScheduleId = i64;

/// A re-schedule attempt as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReSchedule {
    pub id: ReScheduleId,
    /// Owning applicant.
    pub applicant: ApplicantId,
    pub status: ScheduleStatus,
    #[serde(with = "crate::time::timestamp")]
    pub start_datetime: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub end_datetime: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReSchedule {
    /// Returns true while the backend may still change this attempt.
    pub fn may_change(&self) -> bool {
        self.status.may_change()
    }
}

/// Body for `POST /re-schedules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReScheduleCreate {
    pub applicant: ApplicantId,
    #[serde(with = "crate::time::timestamp")]
    pub start_datetime: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub end_datetime: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ScheduleStatus>,
}

impl ReScheduleCreate {
    pub fn new(
        applicant: ApplicantId,
        start_datetime: DateTime<Utc>,
        end_datetime: DateTime<Utc>,
    ) -> Self {
        ReScheduleCreate {
            applicant,
            start_datetime,
            end_datetime,
            status: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.applicant <= 0 {
            return Err(ApiError::Validation(format!(
                "invalid applicant id {}",
                self.applicant
            )));
        }
        validate_window(&self.start_datetime, &self.end_datetime)
    }
}

/// Body for `PUT /re-schedules/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReScheduleUpdate {
    #[serde(
        default,
        with = "crate::time::timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_datetime: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::time::timestamp_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_datetime: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ScheduleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReScheduleUpdate {
    pub fn is_empty(&self) -> bool {
        *self == ReScheduleUpdate::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ApiError::Validation("nothing to update".to_string()));
        }
        match (&self.start_datetime, &self.end_datetime) {
            (Some(start), Some(end)) => validate_window(start, end),
            _ => Ok(()),
        }
    }
}

fn validate_window(start: &DateTime<Utc>, end: &DateTime<Utc>) -> Result<()> {
    if start >= end {
        return Err(ApiError::Validation(
            "start_datetime must be before end_datetime".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "reschedule_tests.rs"]
mod tests;
