// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed resource clients for the backend REST surface.
//!
//! Each client maps method calls to a single [`ApiClient`] request and
//! passes errors through unchanged. Caching and retries belong to
//! [`crate::sync`].

mod applicants;
mod configuration;
mod reschedules;

pub use applicants::ApplicantsApi;
pub use configuration::ConfigurationApi;
pub use reschedules::ReSchedulesApi;

use crate::transport::ApiClient;

/// All resource clients over one shared [`ApiClient`].
#[derive(Clone)]
pub struct Api {
    pub applicants: ApplicantsApi,
    pub reschedules: ReSchedulesApi,
    pub configuration: ConfigurationApi,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Api {
            applicants: ApplicantsApi::new(client.clone()),
            reschedules: ReSchedulesApi::new(client.clone()),
            configuration: ConfigurationApi::new(client),
        }
    }
}

/// Serialize a request body.
fn body<T: serde::Serialize>(value: &T) -> nv_core::Result<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
