// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP transport for the backend API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────┐
//! │  Resource   │────►│  ApiClient   │────►│  Transport  │────►│ Backend │
//! │  clients    │◄────│ (middleware) │◄────│   (trait)   │◄────│   API   │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐
//!                     │   Session    │  (token, sign-out, redirect)
//!                     └──────────────┘
//! ```
//!
//! The middleware chain is the only place that reads the session token and
//! the only place allowed to tear a session down.

mod client;
mod http;
mod middleware;
mod session;

pub use client::ApiClient;
pub use http::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport, TransportFuture};
pub use middleware::{AuthExpiry, BearerAuth, Middleware};
pub use session::{
    FileSession, Navigator, SessionError, SessionProvider, TerminalNavigator, TOKEN_ENV,
};

#[cfg(test)]
pub(crate) mod test_helpers;


#[cfg(test)]
mod middleware_tests;
