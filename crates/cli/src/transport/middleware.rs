// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request/response middleware run by [`ApiClient`](super::ApiClient).

use std::sync::Arc;

use tracing::{debug, warn};

use super::http::{HttpRequest, HttpResponse, TransportFuture};
use super::session::{Navigator, SessionProvider};

/// A step in the client's request pipeline.
///
/// Middleware runs in registration order for both hooks and cannot fail:
/// it observes or decorates traffic, it never replaces the outcome.
pub trait Middleware: Send + Sync {
    fn on_request<'a>(&'a self, _request: &'a mut HttpRequest) -> TransportFuture<'a, ()> {
        Box::pin(async {})
    }

    fn on_response<'a>(&'a self, _response: &'a HttpResponse) -> TransportFuture<'a, ()> {
        Box::pin(async {})
    }
}

/// Attaches `Authorization: Bearer <token>` when a session exists.
pub struct BearerAuth {
    session: Arc<dyn SessionProvider>,
}

impl BearerAuth {
    pub fn new(session: Arc<dyn SessionProvider>) -> Self {
        BearerAuth { session }
    }
}

impl Middleware for BearerAuth {
    fn on_request<'a>(&'a self, request: &'a mut HttpRequest) -> TransportFuture<'a, ()> {
        Box::pin(async move {
            match self.session.current_token().await {
                Ok(Some(token)) => request.set_header("Authorization", format!("Bearer {token}")),
                Ok(None) => {}
                Err(e) => debug!(
                    "session lookup failed, sending {} {} without credentials: {}",
                    request.method.as_str(),
                    request.path,
                    e
                ),
            }
        })
    }
}

/// Signs out and redirects to login when the backend answers 401.
pub struct AuthExpiry {
    session: Arc<dyn SessionProvider>,
    navigator: Arc<dyn Navigator>,
}

impl AuthExpiry {
    pub fn new(session: Arc<dyn SessionProvider>, navigator: Arc<dyn Navigator>) -> Self {
        AuthExpiry { session, navigator }
    }
}

impl Middleware for AuthExpiry {
    fn on_response<'a>(&'a self, response: &'a HttpResponse) -> TransportFuture<'a, ()> {
        Box::pin(async move {
            if response.status == 401 {
                warn!("backend rejected the session token, signing out");
                self.session.terminate().await;
                self.navigator.redirect_to_login();
            }
        })
    }
}
