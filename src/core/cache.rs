//! In-memory caching with a time-to-live bound.
//!
//! The reference population for a season is expensive to fetch, so the stats
//! provider keeps recent results in an LRU cache. Expiry is an explicit
//! policy passed at construction rather than ambient state, which keeps the
//! provider testable and the cache's lifetime visible at the call site.
//! Entries live for the configured TTL and are dropped on the first read
//! after they expire; nothing is persisted across process runs.

use lru::LruCache;
use std::{
    hash::Hash,
    num::NonZeroUsize,
    sync::Mutex,
    time::{Duration, Instant},
};

/// Capacity and expiry settings for a [`TtlCache`].
#[derive(Debug, Clone, Copy)]
pub struct CachePolicy {
    /// Maximum number of entries held before LRU eviction.
    pub capacity: usize,
    /// How long an entry stays valid after insertion.
    pub ttl: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            // League tables change slowly within a session; a handful of
            // seasons and a ten-minute window cover interactive use.
            capacity: 8,
            ttl: Duration::from_secs(600),
        }
    }
}

struct Entry<V> {
    value: V,
    stored_at: Instant,
}

/// LRU cache whose entries expire after a fixed time-to-live.
pub struct TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    entries: Mutex<LruCache<K, Entry<V>>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(
                NonZeroUsize::new(policy.capacity.max(1)).unwrap(),
            )),
            ttl: policy.ttl,
        }
    }

    /// Get a live entry, dropping it instead if it has expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(entry) = entries.get(key) {
            if entry.stored_at.elapsed() < self.ttl {
                return Some(entry.value.clone());
            }
        } else {
            return None;
        }
        entries.pop(key);
        None
    }

    pub fn put(&self, key: K, value: V) {
        let mut entries = self.entries.lock().unwrap();
        entries.put(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// (live or expired entry count, capacity)
    pub fn stats(&self) -> (usize, usize) {
        let entries = self.entries.lock().unwrap();
        (entries.len(), entries.cap().get())
    }
}
