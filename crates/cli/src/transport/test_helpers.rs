// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mock transport and session shared by transport, api and sync tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use nv_core::ApiError;
use serde_json::Value;

use super::http::{HttpRequest, HttpResponse, Method, Transport, TransportFuture};
use super::session::{Navigator, SessionError, SessionProvider};

type Route = (Method, String);

/// Scripted transport that records every request.
///
/// Responses are queued per `(method, path)`; the last queued response for
/// a route is repeated once the queue drains. Unrouted requests get a 404.
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<Route, VecDeque<Result<HttpResponse, ApiError>>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    delay_ms: Arc<Mutex<HashMap<Route, u64>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport::default()
    }

    /// Queue a JSON response for a route.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        let body = if body.is_null() {
            String::new()
        } else {
            body.to_string()
        };
        self.push(method, path, Ok(HttpResponse::new(status, body)));
    }

    /// Queue a raw (possibly non-JSON) response body for a route.
    pub fn respond_raw(&self, method: Method, path: &str, status: u16, body: &str) {
        self.push(method, path, Ok(HttpResponse::new(status, body)));
    }

    /// Queue a transport failure for a route.
    pub fn fail(&self, method: Method, path: &str, error: ApiError) {
        self.push(method, path, Err(error));
    }

    /// Delay every response on a route (simulated latency).
    pub fn delay(&self, method: Method, path: &str, ms: u64) {
        self.delay_ms
            .lock()
            .unwrap()
            .insert((method, path.to_string()), ms);
    }

    fn push(&self, method: Method, path: &str, outcome: Result<HttpResponse, ApiError>) {
        self.routes
            .lock()
            .unwrap()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(outcome);
    }

    /// All requests seen so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests seen for a route.
    pub fn calls(&self, method: Method, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn next_outcome(&self, route: &Route) -> Result<HttpResponse, ApiError> {
        let mut routes = self.routes.lock().unwrap();
        match routes.get_mut(route) {
            Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
            Some(queue) => queue
                .front()
                .cloned()
                .unwrap_or_else(|| Ok(HttpResponse::new(404, r#"{"detail":"Not Found"}"#))),
            None => Ok(HttpResponse::new(404, r#"{"detail":"Not Found"}"#)),
        }
    }
}

impl Transport for MockTransport {
    fn execute(&self, request: HttpRequest) -> TransportFuture<'_, Result<HttpResponse, ApiError>> {
        Box::pin(async move {
            let route = (request.method, request.path.clone());
            self.requests.lock().unwrap().push(request);
            let delay = self.delay_ms.lock().unwrap().get(&route).copied();
            if let Some(ms) = delay {
                tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
            }
            self.next_outcome(&route)
        })
    }
}

/// In-memory session that counts sign-outs.
#[derive(Default)]
pub struct MockSession {
    token: Mutex<Option<String>>,
    fail_lookup: bool,
    pub terminations: AtomicUsize,
}

impl MockSession {
    pub fn signed_in(token: &str) -> Self {
        MockSession {
            token: Mutex::new(Some(token.to_string())),
            ..Default::default()
        }
    }

    pub fn broken() -> Self {
        MockSession {
            fail_lookup: true,
            ..Default::default()
        }
    }

    pub fn terminations(&self) -> usize {
        self.terminations.load(Ordering::SeqCst)
    }
}

impl SessionProvider for MockSession {
    fn current_token(&self) -> TransportFuture<'_, Result<Option<String>, SessionError>> {
        Box::pin(async move {
            if self.fail_lookup {
                return Err(SessionError::Io(std::io::Error::other("keyring locked")));
            }
            Ok(self.token.lock().unwrap().clone())
        })
    }

    fn terminate(&self) -> TransportFuture<'_, ()> {
        Box::pin(async move {
            self.terminations.fetch_add(1, Ordering::SeqCst);
            *self.token.lock().unwrap() = None;
        })
    }
}

/// Navigator that counts redirects.
#[derive(Default)]
pub struct MockNavigator {
    pub redirects: AtomicUsize,
}

impl MockNavigator {
    pub fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for MockNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// Backend JSON for an applicant.
pub fn applicant_json(id: i64, name: &str, last_name: &str) -> Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "last_name": last_name,
        "email": format!("{}@x.com", name.to_lowercase()),
        "created_at": "2026-01-08T12:00:00Z",
        "updated_at": null,
    })
}

/// Backend JSON for a re-schedule attempt.
pub fn reschedule_json(id: i64, applicant: i64, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "applicant": applicant,
        "status": status,
        "start_datetime": "2026-03-01T09:00:00Z",
        "end_datetime": "2026-03-31T17:00:00Z",
        "created_at": "2026-01-08T12:00:00Z",
    })
}

/// Backend JSON for the configuration singleton.
pub fn configuration_json(sleep_time: f64) -> Value {
    serde_json::json!({
        "id": 1,
        "base_url": "https://automation.local",
        "hub_address": "http://hub:4444",
        "sleep_time": sleep_time,
        "push_token": "secret-token",
        "push_user": "ops",
        "df_msg": "New appointment found",
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-02T00:00:00Z",
    })
}

/// Console store over a mock transport, without read retries.
pub fn console_store(transport: &MockTransport) -> crate::sync::ConsoleStore {
    let client = super::ApiClient::new(Arc::new(transport.clone()));
    let settings = crate::sync::StoreSettings {
        retry: crate::sync::RetryPolicy::none(),
        ..Default::default()
    };
    crate::sync::ConsoleStore::new(crate::api::Api::new(client), Default::default(), settings)
}

/// Captured command output as text.
pub fn output(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).to_string()
}
