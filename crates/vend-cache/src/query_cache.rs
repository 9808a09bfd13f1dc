//! The query result cache.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::error::CacheError;

/// Default capacity bound.
pub const DEFAULT_CAPACITY: usize = 50;

/// Default entry time-to-live.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// A stored entry: serialized value plus absolute expiration instant.
#[derive(Debug, Clone)]
struct Entry {
    value: serde_json::Value,
    expires_at_millis: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    /// Keys in insertion order; the front is the eviction candidate.
    order: VecDeque<String>,
}

/// A bounded, time-boxed memoization layer keyed by canonical query strings.
///
/// Values are stored as JSON so one cache can hold heterogeneous result
/// types. Entries are replaced wholesale, never partially updated.
///
/// Eviction is insertion-order: when full, the oldest-inserted entry is
/// removed to make room. Overwriting an existing key keeps its original
/// insertion position. Expired entries are removed lazily when read.
pub struct QueryCache {
    inner: Mutex<Inner>,
    capacity: usize,
    ttl_millis: u64,
    clock: Arc<dyn Clock>,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TTL)
    }
}

impl QueryCache {
    /// Create a cache with the given capacity and TTL, using the system clock.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self::with_clock(capacity, ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an injected clock.
    pub fn with_clock(capacity: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            capacity: capacity.max(1),
            ttl_millis: ttl.as_millis() as u64,
            clock,
        }
    }

    /// Get a cached value.
    ///
    /// Returns `None` on a miss. An entry read past its expiration is removed
    /// and treated as absent. An entry that no longer decodes as `T` is
    /// dropped and treated as absent rather than surfacing an error.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let mut inner = self.inner.lock().expect("cache lock poisoned");

        let entry = match inner.entries.get(key) {
            Some(entry) => entry,
            None => {
                debug!(key, "cache miss");
                return None;
            }
        };

        if self.clock.now_millis() >= entry.expires_at_millis {
            debug!(key, "cache entry expired");
            Self::remove(&mut inner, key);
            return None;
        }

        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => {
                debug!(key, "cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key, error = %e, "dropping undecodable cache entry");
                Self::remove(&mut inner, key);
                None
            }
        }
    }

    /// Store a value, evicting the oldest-inserted entry if at capacity.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let value = serde_json::to_value(value)?;
        let entry = Entry {
            value,
            expires_at_millis: self.clock.now_millis() + self.ttl_millis,
        };

        let mut inner = self.inner.lock().expect("cache lock poisoned");

        if inner.entries.contains_key(key) {
            // Replace wholesale, keeping the original insertion position.
            inner.entries.insert(key.to_string(), entry);
            return Ok(());
        }

        while inner.entries.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                debug!(key = %oldest, "cache evict");
                inner.entries.remove(&oldest);
            } else {
                break;
            }
        }

        inner.order.push_back(key.to_string());
        inner.entries.insert(key.to_string(), entry);
        Ok(())
    }

    /// Check whether a fresh entry exists for the key, without touching it.
    pub fn contains(&self, key: &str) -> bool {
        let inner = self.inner.lock().expect("cache lock poisoned");
        inner
            .entries
            .get(key)
            .map(|e| self.clock.now_millis() < e.expires_at_millis)
            .unwrap_or(false)
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.order.clear();
        info!(removed, "cache cleared");
    }

    /// Remove every entry whose key contains the given substring.
    ///
    /// Returns the number of entries removed.
    pub fn invalidate(&self, pattern: &str) -> usize {
        let mut inner = self.inner.lock().expect("cache lock poisoned");
        let matching: Vec<String> = inner
            .order
            .iter()
            .filter(|k| k.contains(pattern))
            .cloned()
            .collect();
        for key in &matching {
            Self::remove(&mut inner, key);
        }
        info!(pattern, removed = matching.len(), "cache invalidated");
        matching.len()
    }

    /// Number of entries currently stored (including not-yet-reaped expired ones).
    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn remove(inner: &mut Inner, key: &str) {
        inner.entries.remove(key);
        inner.order.retain(|k| k != key);
    }
}
