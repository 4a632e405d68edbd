// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity cache and synchronization engine.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  read / mutate  ┌──────────────┐     ┌─────────────┐
//! │   Commands   │────────────────►│ ConsoleStore │────►│  Resource   │
//! │  (watch, …)  │◄────────────────│  (keys and   │     │   clients   │
//! └──────────────┘   subscribe     │ invalidation)│     └─────────────┘
//!                                  └──────────────┘
//!                                         │
//!                                         ▼
//!                                  ┌──────────────┐
//!                                  │  QueryCache  │  (entries, in-flight
//!                                  │              │   fetches, retries)
//!                                  └──────────────┘
//! ```
//!
//! # Guarantees
//!
//! - At most one fetch per key is in flight; concurrent readers share it
//! - A failed refresh keeps the last good value visible
//! - A successful mutation marks all of its declared keys stale at once,
//!   before any later read of those keys can return
//! - Results for removed or invalidated entries are discarded

mod cache;
pub mod keys;
mod retry;
mod state;
mod store;

pub use cache::{CacheEvent, CacheEventKind, QueryCache, QueryOptions, Subscription};
pub use keys::{KeyPattern, QueryKey, Segment};
pub use retry::RetryPolicy;
pub use state::{QueryState, QueryStatus};
pub use store::{ConsoleStore, StoreSettings};
