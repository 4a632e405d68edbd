// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON client over a [`Transport`] with a middleware chain.

use std::sync::Arc;

use nv_core::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

use super::http::{HttpRequest, HttpResponse, Method, Transport};
use super::middleware::{AuthExpiry, BearerAuth, Middleware};
use super::session::{Navigator, SessionProvider};

/// Cheaply cloneable handle used by every resource client.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ApiClient {
    /// Create a client with an empty middleware chain.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        ApiClient {
            transport,
            middleware: Vec::new(),
        }
    }

    /// Create a client that authenticates with `session` and signs out on 401.
    pub fn with_session(
        transport: Arc<dyn Transport>,
        session: Arc<dyn SessionProvider>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        ApiClient::new(transport)
            .with_middleware(BearerAuth::new(Arc::clone(&session)))
            .with_middleware(AuthExpiry::new(session, navigator))
    }

    /// Append a middleware to the end of the chain.
    pub fn with_middleware(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Send a request and return the decoded JSON body.
    ///
    /// A 2xx with an empty body yields `Value::Null`. A 401 is reported as
    /// [`ApiError::AuthExpired`] after the middleware has reacted to it.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut request = HttpRequest::new(method, path).with_query(query);
        request.body = body;
        self.execute(request).await
    }

    /// Send a request and decode the body into `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let value = self.send(method, path, query, body).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::Decode(format!("{} {}: {}", method.as_str(), path, e)))
    }

    /// Run `request` through the middleware chain and the transport.
    pub async fn execute(&self, mut request: HttpRequest) -> Result<Value, ApiError> {
        for middleware in &self.middleware {
            middleware.on_request(&mut request).await;
        }

        let method = request.method;
        let path = request.path.clone();
        trace!("{} {}", method.as_str(), path);

        let response = self.transport.execute(request).await?;
        trace!("{} {} -> {}", method.as_str(), path, response.status);

        for middleware in &self.middleware {
            middleware.on_response(&response).await;
        }

        interpret(response)
    }
}

/// Map a raw response to a JSON value or an error.
fn interpret(response: HttpResponse) -> Result<Value, ApiError> {
    if response.is_success() {
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        return Ok(serde_json::from_str(&response.body)?);
    }

    if response.status == 401 {
        return Err(ApiError::AuthExpired);
    }

    Err(ApiError::Http {
        status: response.status,
        message: error_message(&response),
    })
}

/// Extract the server-supplied message from an error body.
///
/// Understands `{"detail": "..."}`, validation lists of the form
/// `{"detail": [{"msg": "..."}]}`, and `{"message"|"error": "..."}`.
/// Anything else falls back to the raw body or the status reason.
fn error_message(response: &HttpResponse) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&response.body) {
        match map.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if !messages.is_empty() {
                    return messages.join("; ");
                }
            }
            _ => {}
        }
        for field in ["message", "error"] {
            if let Some(Value::String(message)) = map.get(field) {
                return message.clone();
            }
        }
    }

    let body = response.body.trim();
    if !body.is_empty() {
        return body.to_string();
    }

    reqwest::StatusCode::from_u16(response.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("request failed")
        .to_string()
}
