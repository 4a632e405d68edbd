// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded retry with exponential backoff for cache reads.

use std::future::Future;
use std::time::Duration;

use nv_core::ApiError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How often a failed read is repeated before its error is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Delay before the first retry (milliseconds).
    pub initial_delay_ms: u64,
    /// Upper bound for the doubled delay (seconds).
    pub max_delay_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: 2,
            initial_delay_ms: 250,
            max_delay_secs: 30,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries.
    pub fn none() -> Self {
        RetryPolicy {
            max_retries: 0,
            ..RetryPolicy::default()
        }
    }

    /// Delay before retry number `retry` (zero-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let cap = self.max_delay_secs.saturating_mul(1000);
        let factor = 1u64.checked_shl(retry).unwrap_or(u64::MAX);
        Duration::from_millis(self.initial_delay_ms.saturating_mul(factor).min(cap))
    }
}

/// Outcome of a retried operation.
#[derive(Debug)]
pub(crate) struct Attempted<T> {
    pub result: Result<T, ApiError>,
    /// Number of attempts that failed.
    pub failures: u32,
}

/// Run `attempt` until it succeeds, fails with a non-retryable error, or
/// the policy's retry budget is spent.
pub(crate) async fn run_with_retry<T, F, Fut>(policy: &RetryPolicy, mut attempt: F) -> Attempted<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut failures = 0;
    loop {
        match attempt().await {
            Ok(value) => {
                return Attempted {
                    result: Ok(value),
                    failures,
                }
            }
            Err(e) => {
                let retry = failures;
                failures += 1;
                if !e.is_retryable() || retry >= policy.max_retries {
                    return Attempted {
                        result: Err(e),
                        failures,
                    };
                }
                let delay = policy.delay_for(retry);
                debug!("attempt {} failed ({}), retrying in {:?}", failures, e, delay);
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
