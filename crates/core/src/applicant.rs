// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Applicants and their credential checks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};
use crate::status::ScheduleStatus;

/// Server-assigned applicant identifier.
pub type ApplicantId = i64;

/// An applicant as returned by the backend.
///
/// The password is write-only and never part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub name: String,
    pub last_name: String,
    /// Operator-facing unique identifier.
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    /// Identifier of the appointment currently held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    /// Mirrors the state of the most recent attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re_schedule_status: Option<ScheduleStatus>,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Applicant {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }

    /// Two-letter initials used as an avatar.
    pub fn initials(&self) -> String {
        self.name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect::<String>()
            .to_uppercase()
    }
}

/// Body for `POST /applicants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantCreate {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

impl ApplicantCreate {
    pub fn new(
        name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        ApplicantCreate {
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            schedule_date: None,
            min_date: None,
            max_date: None,
            schedule: None,
        }
    }

    /// Reject drafts the backend would refuse anyway.
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require("last_name", &self.last_name)?;
        require("password", &self.password)?;
        validate_email(&self.email)
    }
}

/// Body for `PUT /applicants/{id}`. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

impl ApplicantUpdate {
    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        *self == ApplicantUpdate::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ApiError::Validation("nothing to update".to_string()));
        }
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(last_name) = &self.last_name {
            require("last_name", last_name)?;
        }
        if let Some(password) = &self.password {
            require("password", password)?;
        }
        match &self.email {
            Some(email) => validate_email(email),
            None => Ok(()),
        }
    }
}

/// Result of `POST /applicants/{id}/test-credentials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialCheck {
    pub success: bool,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CredentialCheck {
    /// Operator-facing summary of the check.
    pub fn summary(&self) -> String {
        match (self.success, &self.schedule, &self.error) {
            (true, Some(schedule), _) => format!("Login successful! Schedule number: {schedule}"),
            (true, None, _) => "Login successful but could not extract schedule number".to_string(),
            (false, _, Some(error)) if !error.is_empty() => error.clone(),
            (false, _, _) => "Login failed".to_string(),
        }
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ApiError::Validation(format!("invalid email '{email}'"))),
    }
}

#[cfg(test)]
#[path = "applicant_tests.rs"]
mod tests;
