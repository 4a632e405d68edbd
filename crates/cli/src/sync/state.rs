// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use chrono::{DateTime, Utc};
use nv_core::ApiError;

/// Coarse state of a cached read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Never fetched, or the read is disabled.
    Idle,
    /// No value yet and a fetch is running.
    Loading,
    Success,
    /// The last fetch exhausted its retries. `data` may still hold the
    /// previous value.
    Error,
}

impl QueryStatus {
    pub(crate) fn derive(has_data: bool, has_error: bool, is_fetching: bool) -> Self {
        if !has_data && is_fetching {
            QueryStatus::Loading
        } else if has_error {
            QueryStatus::Error
        } else if has_data {
            QueryStatus::Success
        } else {
            QueryStatus::Idle
        }
    }
}

/// Snapshot of one cache entry as seen by a reader.
#[derive(Debug)]
pub struct QueryState<T> {
    pub data: Option<Arc<T>>,
    pub status: QueryStatus,
    pub error: Option<ApiError>,
    /// A fetch for this key is in flight, possibly in the background.
    pub is_fetching: bool,
    /// Failed attempts since the last success.
    pub failure_count: u32,
    /// Wall-clock time of the last successful fetch.
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> Clone for QueryState<T> {
    fn clone(&self) -> Self {
        QueryState {
            data: self.data.clone(),
            status: self.status,
            error: self.error.clone(),
            is_fetching: self.is_fetching,
            failure_count: self.failure_count,
            updated_at: self.updated_at,
        }
    }
}

impl<T> QueryState<T> {
    pub fn idle() -> Self {
        QueryState {
            data: None,
            status: QueryStatus::Idle,
            error: None,
            is_fetching: false,
            failure_count: 0,
            updated_at: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_deref()
    }

    /// The value, or the error that prevented it.
    ///
    /// A surfaced error wins over stale data so callers that only look at
    /// the result still learn that the refresh failed.
    pub fn into_result(self) -> Result<Arc<T>, ApiError> {
        if let (QueryStatus::Error, Some(error)) = (self.status, self.error) {
            return Err(error);
        }
        self.data
            .ok_or_else(|| ApiError::Validation("no data: the read is disabled or has not run".into()))
    }
}
