// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The entity cache.
//!
//! Entries are created on first read and only leave the cache through
//! [`QueryCache::remove`] or [`QueryCache::clear`]. Each entry holds at most
//! one in-flight fetch; concurrent readers of the same key join it.
//!
//! Fetches run on spawned tasks and report back with the generation they
//! were started under. Invalidation and removal bump the generation, so a
//! result that arrives late is dropped instead of overwriting newer state.

use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::future::{BoxFuture, FutureExt, Shared};
use nv_core::ApiError;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

use super::keys::{KeyPattern, QueryKey};
use super::retry::{run_with_retry, RetryPolicy};
use super::state::{QueryState, QueryStatus};

type AnyValue = Arc<dyn Any + Send + Sync>;
type SharedFetch = Shared<BoxFuture<'static, Result<AnyValue, ApiError>>>;
type Callback = Arc<dyn Fn(&CacheEvent) + Send + Sync>;

/// Per-read policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Age after which a cached value is refreshed in the background.
    pub stale_after: Duration,
    /// Disabled reads never fetch and never create an entry.
    pub enabled: bool,
    pub retry: RetryPolicy,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            stale_after: Duration::ZERO,
            enabled: true,
            retry: RetryPolicy::default(),
        }
    }
}

impl QueryOptions {
    pub fn new() -> Self {
        QueryOptions::default()
    }

    pub fn stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

/// What happened to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheEventKind {
    /// A fetch stored a new value.
    Updated,
    /// A fetch exhausted its retries.
    Failed,
    /// The entry was marked for re-fetch.
    Invalidated,
    Removed,
}

/// Notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEvent {
    pub key: QueryKey,
    pub kind: CacheEventKind,
}

/// Handle returned by [`QueryCache::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    cache: Weak<Inner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.cache.upgrade() {
            inner.subscribers().retain(|s| s.id != self.id);
        }
    }
}

#[derive(Default)]
struct Entry {
    data: Option<AnyValue>,
    fetched_at: Option<Instant>,
    updated_at: Option<DateTime<Utc>>,
    error: Option<ApiError>,
    failure_count: u32,
    invalidated: bool,
    in_flight: Option<SharedFetch>,
    generation: u64,
}

impl Entry {
    fn is_stale(&self, stale_after: Duration) -> bool {
        if self.invalidated {
            return true;
        }
        match self.fetched_at {
            Some(at) => at.elapsed() >= stale_after,
            None => true,
        }
    }

    fn state<T: Send + Sync + 'static>(&self) -> QueryState<T> {
        let data = self.data.clone().and_then(|v| v.downcast::<T>().ok());
        let is_fetching = self.in_flight.is_some();
        QueryState {
            status: QueryStatus::derive(data.is_some(), self.error.is_some(), is_fetching),
            data,
            error: self.error.clone(),
            is_fetching,
            failure_count: self.failure_count,
            updated_at: self.updated_at,
        }
    }
}

struct Subscriber {
    id: u64,
    pattern: KeyPattern,
    callback: Callback,
}

#[derive(Default)]
struct Inner {
    entries: Mutex<HashMap<QueryKey, Entry>>,
    subscribers: Mutex<Vec<Subscriber>>,
    generation: AtomicU64,
    next_subscriber: AtomicU64,
}

impl Inner {
    fn entries(&self) -> MutexGuard<'_, HashMap<QueryKey, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribers(&self) -> MutexGuard<'_, Vec<Subscriber>> {
        self.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Shared cache handle. Clones refer to the same entries.
#[derive(Clone, Default)]
pub struct QueryCache {
    inner: Arc<Inner>,
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache::default()
    }

    /// Read `key`, fetching it with `fetcher` when needed.
    ///
    /// - fresh entry: returned from the cache, no fetch
    /// - stale entry: returned from the cache, refreshed in the background
    /// - absent or invalidated entry: fetched before returning
    ///
    /// A fetch already in flight for `key` is joined rather than repeated.
    /// Reads never hold the cache lock across a suspension point.
    pub async fn read<T, F, Fut>(&self, key: QueryKey, options: QueryOptions, fetcher: F) -> QueryState<T>
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        if !options.enabled {
            trace!("read of {} is disabled", key);
            return self.peek(&key);
        }

        let (fetch, generation) = {
            let mut entries = self.inner.entries();
            let entry = entries.entry(key.clone()).or_default();
            if !entry.is_stale(options.stale_after) {
                debug!("cache hit for {}", key);
                return entry.state();
            }

            let must_wait = entry.data.is_none() || entry.invalidated;
            let fetch = if let Some(fetch) = entry.in_flight.clone() {
                debug!("joining in-flight fetch for {}", key);
                fetch
            } else {
                debug!("fetching {} ({})", key, if must_wait { "miss" } else { "stale" });
                self.start_fetch(&key, entry, options.retry, fetcher)
            };
            if !must_wait {
                return entry.state();
            }
            (fetch, entry.generation)
        };

        let result = fetch.await;
        self.state_after_fetch(&key, generation, result)
    }

    /// Cached state of `key` without fetching.
    pub fn peek<T: Send + Sync + 'static>(&self, key: &QueryKey) -> QueryState<T> {
        self.inner
            .entries()
            .get(key)
            .map(Entry::state::<T>)
            .unwrap_or_else(QueryState::idle)
    }

    /// Run `mutation` once; on success invalidate every entry matching
    /// `invalidates`. On failure the cache is left untouched.
    pub async fn mutate<T, Fut>(&self, mutation: Fut, invalidates: Vec<KeyPattern>) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.mutate_with(mutation, move |_| invalidates).await
    }

    /// Like [`mutate`](Self::mutate), for invalidations that depend on the
    /// mutation's result.
    pub async fn mutate_with<T, Fut, I>(&self, mutation: Fut, invalidates: I) -> Result<T, ApiError>
    where
        Fut: Future<Output = Result<T, ApiError>>,
        I: FnOnce(&T) -> Vec<KeyPattern>,
    {
        match mutation.await {
            Ok(value) => {
                let patterns = invalidates(&value);
                self.invalidate(&patterns);
                Ok(value)
            }
            Err(e) => {
                debug!("mutation failed, cache untouched: {}", e);
                Err(e)
            }
        }
    }

    /// Mark every entry matching any of `patterns` for re-fetch.
    ///
    /// All matches are marked under a single lock acquisition. Fetches
    /// already in flight for those entries are detached; their results are
    /// discarded. Returns the number of entries invalidated.
    pub fn invalidate(&self, patterns: &[KeyPattern]) -> usize {
        let events: Vec<CacheEvent> = {
            let mut entries = self.inner.entries();
            entries
                .iter_mut()
                .filter(|(key, _)| patterns.iter().any(|p| p.matches(key)))
                .map(|(key, entry)| {
                    entry.invalidated = true;
                    entry.in_flight = None;
                    entry.generation = self.inner.next_generation();
                    CacheEvent {
                        key: key.clone(),
                        kind: CacheEventKind::Invalidated,
                    }
                })
                .collect()
        };
        for pattern in patterns {
            debug!("invalidated {}", pattern);
        }
        self.notify(&events);
        events.len()
    }

    /// Drop every entry matching `pattern`. Fetches still running for them
    /// complete but their results are not stored.
    pub fn remove(&self, pattern: &KeyPattern) -> usize {
        self.remove_where(|key| pattern.matches(key))
    }

    /// Drop every entry.
    pub fn clear(&self) -> usize {
        self.remove_where(|_| true)
    }

    fn remove_where(&self, mut predicate: impl FnMut(&QueryKey) -> bool) -> usize {
        let events: Vec<CacheEvent> = {
            let mut entries = self.inner.entries();
            let removed: Vec<QueryKey> = entries.keys().filter(|k| predicate(k)).cloned().collect();
            for key in &removed {
                entries.remove(key);
            }
            removed
                .into_iter()
                .map(|key| CacheEvent {
                    key,
                    kind: CacheEventKind::Removed,
                })
                .collect()
        };
        self.notify(&events);
        events.len()
    }

    /// Call `callback` for every event on a key matching `pattern`.
    ///
    /// Callbacks run after the cache lock is released, on whichever task
    /// caused the event. They may read the cache.
    pub fn subscribe(
        &self,
        pattern: KeyPattern,
        callback: impl Fn(&CacheEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let id = self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers().push(Subscriber {
            id,
            pattern,
            callback: Arc::new(callback),
        });
        Subscription {
            id,
            cache: Arc::downgrade(&self.inner),
        }
    }

    fn notify(&self, events: &[CacheEvent]) {
        if events.is_empty() {
            return;
        }
        let subscribers: Vec<(KeyPattern, Callback)> = self
            .inner
            .subscribers()
            .iter()
            .map(|s| (s.pattern.clone(), Arc::clone(&s.callback)))
            .collect();
        for event in events {
            for (pattern, callback) in &subscribers {
                if pattern.matches(&event.key) {
                    callback(event);
                }
            }
        }
    }

    fn start_fetch<T, F, Fut>(
        &self,
        key: &QueryKey,
        entry: &mut Entry,
        policy: RetryPolicy,
        fetcher: F,
    ) -> SharedFetch
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
    {
        let generation = self.inner.next_generation();
        entry.generation = generation;

        let task = {
            let cache = Arc::downgrade(&self.inner);
            let key = key.clone();
            tokio::spawn(async move {
                let attempted = run_with_retry(&policy, move || fetcher()).await;
                let result = attempted.result.map(|value| Arc::new(value) as AnyValue);
                if let Some(inner) = cache.upgrade() {
                    QueryCache { inner }.settle(&key, generation, &result, attempted.failures);
                }
                result
            })
        };

        let cache = Arc::downgrade(&self.inner);
        let key = key.clone();
        let fetch = async move {
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    let error = ApiError::Network(format!("fetch task failed: {e}"));
                    if let Some(inner) = cache.upgrade() {
                        QueryCache { inner }.settle(&key, generation, &Err(error.clone()), 1);
                    }
                    Err(error)
                }
            }
        }
        .boxed()
        .shared();

        entry.in_flight = Some(fetch.clone());
        fetch
    }

    /// Apply a fetch result if it still belongs to the entry.
    fn settle(&self, key: &QueryKey, generation: u64, result: &Result<AnyValue, ApiError>, failures: u32) {
        let kind = {
            let mut entries = self.inner.entries();
            let Some(entry) = entries.get_mut(key) else {
                debug!("discarding result for removed entry {}", key);
                return;
            };
            if entry.generation != generation {
                debug!("discarding superseded result for {}", key);
                return;
            }
            entry.in_flight = None;
            match result {
                Ok(value) => {
                    entry.data = Some(Arc::clone(value));
                    entry.fetched_at = Some(Instant::now());
                    entry.updated_at = Some(Utc::now());
                    entry.error = None;
                    entry.failure_count = 0;
                    entry.invalidated = false;
                    CacheEventKind::Updated
                }
                Err(e) => {
                    entry.error = Some(e.clone());
                    entry.failure_count += failures;
                    warn!("fetching {} failed after {} attempt(s): {}", key, failures, e);
                    CacheEventKind::Failed
                }
            }
        };
        self.notify(&[CacheEvent {
            key: key.clone(),
            kind,
        }]);
    }

    /// State handed to a reader that waited on a fetch.
    ///
    /// When the entry was settled by that fetch the reader gets the entry's
    /// state. When the entry is gone or was invalidated again meanwhile, it
    /// still holds older data, so the reader gets the result it waited for.
    fn state_after_fetch<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
        generation: u64,
        result: Result<AnyValue, ApiError>,
    ) -> QueryState<T> {
        let state = self
            .inner
            .entries()
            .get(key)
            .filter(|entry| entry.generation == generation)
            .map(Entry::state::<T>);
        match state {
            Some(state) if state.data.is_some() || state.error.is_some() => state,
            _ => match result.and_then(|value| downcast::<T>(key, value)) {
                Ok(data) => QueryState {
                    data: Some(data),
                    status: QueryStatus::Success,
                    ..QueryState::idle()
                },
                Err(error) => QueryState {
                    status: QueryStatus::Error,
                    error: Some(error),
                    ..QueryState::idle()
                },
            },
        }
    }
}

fn downcast<T: Send + Sync + 'static>(key: &QueryKey, value: AnyValue) -> Result<Arc<T>, ApiError> {
    value
        .downcast::<T>()
        .map_err(|_| ApiError::Decode(format!("cached value for {key} has an unexpected type")))
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
