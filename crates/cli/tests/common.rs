// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The console binary with an isolated home and no ambient overrides.
pub fn nextvisa(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("nextvisa");
    cmd.env("NEXTVISA_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("NEXTVISA_API_URL")
        .env_remove("NEXTVISA_TOKEN")
        .env_remove("NEXTVISA_LOG");
    cmd
}

#[derive(Clone, Default)]
struct Script {
    responses: Arc<Mutex<VecDeque<(u16, &'static str)>>>,
    seen: Arc<Mutex<Vec<String>>>,
}

/// Stub backend answering each request with the next canned response.
pub struct Backend {
    pub url: String,
    seen: Arc<Mutex<Vec<String>>>,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Backend {
    /// Stop the server and return the request lines and `Authorization`
    /// headers it saw, in order.
    pub async fn finish(self) -> Vec<String> {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap();
        self.seen.lock().unwrap().clone()
    }
}

async fn answer(State(script): State<Script>, method: Method, uri: Uri, headers: HeaderMap) -> impl IntoResponse {
    {
        let mut seen = script.seen.lock().unwrap();
        seen.push(format!("{method} {}", uri.path()));
        if let Some(auth) = headers.get(header::AUTHORIZATION) {
            seen.push(format!("authorization: {}", auth.to_str().unwrap_or_default()));
        }
    }
    let (status, body) = script
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((500, r#"{"detail":"no canned response left"}"#));
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}

async fn wait_for_listen(addr: SocketAddr) {
    let deadline = Instant::now() + Duration::from_secs(1);
    while tokio::net::TcpStream::connect(addr).await.is_err() {
        assert!(Instant::now() < deadline, "stub backend not ready at {addr}");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

pub async fn serve(responses: Vec<(u16, &'static str)>) -> Backend {
    let script = Script {
        responses: Arc::new(Mutex::new(responses.into())),
        ..Script::default()
    };
    let seen = Arc::clone(&script.seen);
    let router = Router::new().fallback(answer).with_state(script);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, shutdown_rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await;
    });
    wait_for_listen(addr).await;

    Backend {
        url: format!("http://{addr}"),
        seen,
        shutdown,
        handle,
    }
}
