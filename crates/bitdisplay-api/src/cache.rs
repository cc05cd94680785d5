//! # Response Cache
//!
//! Explicit memoization for handler results. Entries are keyed by
//! `scope/args`, carry their own TTL, and are stored as serialized JSON so
//! one cache serves every route.
//!
//! Expired entries are dropped lazily on read. When the cache is at
//! capacity an insert first sweeps expired entries; if it is still full the
//! computed value is handed back without being stored.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;

/// Thirty days.
pub const TIME_30D: Duration = Duration::from_secs(30 * 24 * 60 * 60);
/// One hour.
pub const TIME_1H: Duration = Duration::from_secs(60 * 60);
/// Ten seconds.
pub const TIME_10S: Duration = Duration::from_secs(10);

/// Default maximum number of live entries.
pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// A bounded, TTL-aware JSON memo shared across handlers.
#[derive(Debug, Clone)]
pub struct ResponseCache {
    entries: Arc<DashMap<String, Entry>>,
    capacity: usize,
}

impl ResponseCache {
    /// An empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            capacity,
        }
    }

    /// The cache key for `scope` and `args`.
    pub fn key(scope: &str, args: &str) -> String {
        format!("{scope}/{args}")
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// A live value for `key`. An expired entry is removed and reported as
    /// a miss.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();
        let hit = self.entries.get(key).map(|e| (e.value.clone(), e.is_expired(now)));
        match hit {
            Some((value, false)) => Some(value),
            Some((_, true)) => {
                self.entries.remove_if(key, |_, e| e.is_expired(now));
                None
            }
            None => None,
        }
    }

    /// Store `value` under `key` for `ttl`. Returns whether it was stored.
    pub fn insert(&self, key: String, value: Value, ttl: Duration) -> bool {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.purge_expired();
            if self.entries.len() >= self.capacity {
                tracing::debug!(key, capacity = self.capacity, "cache full, not storing");
                return false;
            }
        }
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.insert(key, entry);
        true
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, e| !e.is_expired(now));
        before.saturating_sub(self.entries.len())
    }

    /// Return the cached value for `(scope, args)`, or run `compute`, store
    /// its result for `ttl` and return it. Errors are never cached.
    pub fn memoize<E>(
        &self,
        scope: &str,
        args: &str,
        ttl: Duration,
        compute: impl FnOnce() -> Result<Value, E>,
    ) -> Result<Value, E> {
        let key = Self::key(scope, args);
        if let Some(value) = self.get(&key) {
            tracing::debug!(key, "cache hit");
            return Ok(value);
        }
        tracing::debug!(key, "cache miss");
        let value = compute()?;
        self.insert(key, value.clone(), ttl);
        Ok(value)
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
