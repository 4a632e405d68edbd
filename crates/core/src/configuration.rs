// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Global automation parameters.
//!
//! Exactly one configuration row exists; the console reads and replaces
//! it but never creates one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Default pause between automation polls, in seconds.
pub const DEFAULT_SLEEP_TIME: f64 = 15.0;

/// The configuration singleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub id: i64,
    /// Base endpoint the automation drives.
    pub base_url: String,
    pub hub_address: String,
    /// Seconds between automation polls (fractional).
    #[serde(default = "default_sleep_time")]
    pub sleep_time: f64,
    pub push_token: String,
    pub push_user: String,
    /// Default notification text.
    pub df_msg: String,
    #[serde(with = "crate::time::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::time::timestamp_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_sleep_time() -> f64 {
    DEFAULT_SLEEP_TIME
}

/// Fields accepted by [`ConfigurationUpdate::set`].
pub const CONFIGURATION_FIELDS: &[&str] = &[
    "base_url",
    "hub_address",
    "sleep_time",
    "push_token",
    "push_user",
    "df_msg",
];

/// Body for `PUT /configuration/{id}`. The backend replaces every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationUpdate {
    pub base_url: String,
    pub hub_address: String,
    pub sleep_time: f64,
    pub push_token: String,
    pub push_user: String,
    pub df_msg: String,
}

impl ConfigurationUpdate {
    /// Change a single field by name, parsing the value as needed.
    pub fn set(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "base_url" => self.base_url = value.to_string(),
            "hub_address" => self.hub_address = value.to_string(),
            "sleep_time" => {
                self.sleep_time = value.trim().parse().map_err(|_| {
                    ApiError::Validation(format!("sleep_time must be a number, got '{value}'"))
                })?
            }
            "push_token" => self.push_token = value.to_string(),
            "push_user" => self.push_user = value.to_string(),
            "df_msg" => self.df_msg = value.to_string(),
            _ => {
                return Err(ApiError::Validation(format!(
                    "unknown configuration field '{field}' (expected one of: {})",
                    CONFIGURATION_FIELDS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.sleep_time.is_finite() || self.sleep_time <= 0.0 {
            return Err(ApiError::Validation(format!(
                "sleep_time must be a positive number of seconds, got {}",
                self.sleep_time
            )));
        }
        Ok(())
    }
}

impl From<&Configuration> for ConfigurationUpdate {
    fn from(config: &Configuration) -> Self {
        ConfigurationUpdate {
            base_url: config.base_url.clone(),
            hub_address: config.hub_address.clone(),
            sleep_time: config.sleep_time,
            push_token: config.push_token.clone(),
            push_user: config.push_user.clone(),
            df_msg: config.df_msg.clone(),
        }
    }
}

#[cfg(test)]
#[path = "configuration_tests.rs"]
mod tests;
