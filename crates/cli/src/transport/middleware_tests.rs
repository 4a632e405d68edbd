// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the middleware chain.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use nv_core::ApiError;
use serde_json::json;

use super::client::ApiClient;
use super::http::{HttpRequest, HttpResponse, Method, TransportFuture};
use super::middleware::Middleware;
use super::test_helpers::{MockNavigator, MockSession, MockTransport};

fn session_client(
    transport: &MockTransport,
    session: &Arc<MockSession>,
    navigator: &Arc<MockNavigator>,
) -> ApiClient {
    ApiClient::with_session(
        Arc::new(transport.clone()),
        Arc::clone(session) as _,
        Arc::clone(navigator) as _,
    )
}

#[tokio::test]
async fn bearer_token_is_attached() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/applicants", 200, json!([]));
    let session = Arc::new(MockSession::signed_in("tok-123"));
    let navigator = Arc::new(MockNavigator::default());

    session_client(&transport, &session, &navigator)
        .send(Method::Get, "/applicants", vec![], None)
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].header("Authorization"), Some("Bearer tok-123"));
}

#[tokio::test]
async fn signed_out_request_has_no_credentials() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/applicants", 200, json!([]));
    let session = Arc::new(MockSession::default());
    let navigator = Arc::new(MockNavigator::default());

    session_client(&transport, &session, &navigator)
        .send(Method::Get, "/applicants", vec![], None)
        .await
        .unwrap();

    assert!(transport.requests()[0].header("Authorization").is_none());
}

#[tokio::test]
async fn failed_session_lookup_still_sends_request() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/configuration", 200, json!({"id": 1}));
    let session = Arc::new(MockSession::broken());
    let navigator = Arc::new(MockNavigator::default());

    let value = session_client(&transport, &session, &navigator)
        .send(Method::Get, "/configuration", vec![], None)
        .await
        .unwrap();

    assert_eq!(value, json!({"id": 1}));
    assert!(transport.requests()[0].header("Authorization").is_none());
}

#[tokio::test]
async fn unauthorized_signs_out_once_and_redirects_once() {
    let transport = MockTransport::new();
    transport.respond(Method::Put, "/configuration/1", 401, json!({"detail": "expired"}));
    let session = Arc::new(MockSession::signed_in("stale"));
    let navigator = Arc::new(MockNavigator::default());

    let err = session_client(&transport, &session, &navigator)
        .send(Method::Put, "/configuration/1", vec![], Some(json!({})))
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::AuthExpired);
    assert_eq!(session.terminations(), 1);
    assert_eq!(navigator.redirects(), 1);
    // Not retried automatically.
    assert_eq!(transport.calls(Method::Put, "/configuration/1"), 1);
}

#[tokio::test]
async fn request_after_sign_out_goes_unauthenticated() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/applicants", 401, json!({}));
    let session = Arc::new(MockSession::signed_in("stale"));
    let navigator = Arc::new(MockNavigator::default());
    let client = session_client(&transport, &session, &navigator);

    let _ = client.send(Method::Get, "/applicants", vec![], None).await;
    let _ = client.send(Method::Get, "/applicants", vec![], None).await;

    let requests = transport.requests();
    assert_eq!(requests[0].header("Authorization"), Some("Bearer stale"));
    assert!(requests[1].header("Authorization").is_none());
}

#[tokio::test]
async fn other_errors_do_not_sign_out() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/applicants/9", 403, json!({"detail": "forbidden"}));
    let session = Arc::new(MockSession::signed_in("tok"));
    let navigator = Arc::new(MockNavigator::default());

    let err = session_client(&transport, &session, &navigator)
        .send(Method::Get, "/applicants/9", vec![], None)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(session.terminations(), 0);
    assert_eq!(navigator.redirects(), 0);
}

/// Records the order in which hooks run.
struct Recorder {
    name: &'static str,
    log: Arc<Mutex<Vec<String>>>,
}

impl Middleware for Recorder {
    fn on_request<'a>(&'a self, request: &'a mut HttpRequest) -> TransportFuture<'a, ()> {
        Box::pin(async move {
            request.set_header("X-Trace", self.name);
            self.log.lock().unwrap().push(format!("req:{}", self.name));
        })
    }

    fn on_response<'a>(&'a self, response: &'a HttpResponse) -> TransportFuture<'a, ()> {
        Box::pin(async move {
            self.log
                .lock()
                .unwrap()
                .push(format!("res:{}:{}", self.name, response.status));
        })
    }
}

#[tokio::test]
async fn middleware_runs_in_registration_order() {
    let transport = MockTransport::new();
    transport.respond(Method::Get, "/re-schedules", 200, json!([]));
    let log = Arc::new(Mutex::new(Vec::new()));

    ApiClient::new(Arc::new(transport.clone()))
        .with_middleware(Recorder {
            name: "a",
            log: Arc::clone(&log),
        })
        .with_middleware(Recorder {
            name: "b",
            log: Arc::clone(&log),
        })
        .send(Method::Get, "/re-schedules", vec![], None)
        .await
        .unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["req:a", "req:b", "res:a:200", "res:b:200"]
    );
    // Later middleware wins when both set the same header.
    assert_eq!(transport.requests()[0].header("X-Trace"), Some("b"));
}
