//! Optional memoization for repeated identical queries.
//!
//! Every engine query is a bounded pure computation, so caching is never
//! required for correctness. When layered on, the cache is an explicit
//! component keyed by the full filter tuple with a fixed TTL; the dataset
//! itself stays the only source of truth.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use priceatlas_common::InflationCategory;

/// The full filter tuple for a dashboard query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterKey {
    pub year: Option<i32>,
    pub category: Option<InflationCategory>,
}

struct Entry<V> {
    value: Arc<V>,
    expires_at: DateTime<Utc>,
    hit_count: u64,
}

/// In-memory TTL memoization of query results.
pub struct MemoCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash + Clone, V> MemoCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Look up a cached result. None if missing or expired.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        let entry = entries.get_mut(key)?;
        if entry.expires_at <= Utc::now() {
            return None;
        }
        entry.hit_count += 1;
        Some(Arc::clone(&entry.value))
    }

    /// Store a result with a fresh expiry (upsert).
    pub fn set(&self, key: K, value: V) -> Arc<V> {
        let value = Arc::new(value);
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.insert(
            key,
            Entry {
                value: Arc::clone(&value),
                expires_at: Utc::now() + self.ttl,
                hit_count: 0,
            },
        );
        value
    }

    /// Return the cached result or compute, store, and return it.
    pub fn get_or_insert_with(&self, key: K, compute: impl FnOnce() -> V) -> Arc<V> {
        if let Some(hit) = self.get(&key) {
            debug!("query cache hit");
            return hit;
        }
        debug!("query cache miss");
        self.set(key, compute())
    }

    /// Delete expired entries. Returns how many were removed.
    pub fn evict_expired(&self) -> usize {
        let now = Utc::now();
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        before - entries.len()
    }

    /// Number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
