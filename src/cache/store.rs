//! Cache Store Module
//!
//! Main cache engine: a HashMap of entries with per-entry deadlines, lazy
//! eviction on lookup and a mutable default TTL.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};

// == TTL Cache ==
/// In-memory key/value store with time-based expiry.
///
/// Every operation is total. Expired entries are only removed when a lookup
/// (`get` or `has`) touches them; there is no background sweep and no
/// capacity bound.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Lookup statistics
    stats: CacheStats,
    /// TTL in minutes for `set` calls without an explicit TTL
    default_ttl: i64,
    /// Time source for deadlines
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Debug,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache on the system clock.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL in minutes for entries stored without one
    pub fn new(default_ttl: i64) -> Self {
        Self::with_clock(default_ttl, Arc::new(SystemClock::new()))
    }

    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(default_ttl: i64, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            default_ttl,
            clock,
        }
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry outright.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - TTL in minutes (uses the default TTL if None); zero or
    ///   negative stores an already-expired entry
    pub fn set(&mut self, key: K, value: V, ttl: Option<i64>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let entry = CacheEntry::new(value, ttl, self.clock.now());

        debug!(key = ?key, ttl_minutes = ttl, "cache set");
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value under `key` if it is live.
    ///
    /// An entry found past its deadline is removed before returning `None`.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if self.evict_if_expired(key) {
            self.stats.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                debug!(key = ?key, "cache hit");
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                debug!(key = ?key, "cache miss");
                None
            }
        }
    }

    // == Has ==
    /// Returns whether a live entry exists for `key`, with the same lazy
    /// eviction as [`get`](Self::get).
    pub fn has(&mut self, key: &K) -> bool {
        if self.evict_if_expired(key) {
            return false;
        }
        self.entries.contains_key(key)
    }

    // == Delete ==
    /// Removes the entry for `key`. Returns whether anything was removed.
    pub fn delete(&mut self, key: &K) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            debug!(key = ?key, "cache delete");
            self.stats.set_total_entries(self.entries.len());
        }
        removed
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "cache clear");
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Default TTL ==
    /// Changes the TTL used by later `set` calls that omit one. Existing
    /// entries keep their deadlines.
    pub fn set_default_ttl(&mut self, minutes: i64) {
        self.default_ttl = minutes;
    }

    pub fn default_ttl(&self) -> i64 {
        self.default_ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Inspection ==
    /// Number of stored entries, including expired ones not yet touched.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry is stored under `key`, without checking or evicting
    /// on expiry.
    pub fn contains_raw(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Deadline of the entry under `key`, as a reading of the cache clock.
    pub fn expires_at(&self, key: &K) -> Option<Duration> {
        self.entries.get(key).map(|entry| entry.expires_at)
    }

    /// Remaining lifetime of the entry under `key`.
    pub fn ttl_remaining(&self, key: &K) -> Option<Duration> {
        let now = self.clock.now();
        self.entries.get(key).map(|entry| entry.ttl_remaining(now))
    }

    // Removes the entry under `key` if it has reached its deadline.
    fn evict_if_expired(&mut self, key: &K) -> bool {
        let now = self.clock.now();
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(now));

        if expired {
            self.entries.remove(key);
            self.stats.record_expiration();
            self.stats.set_total_entries(self.entries.len());
            debug!(key = ?key, "cache entry expired");
        }
        expired
    }
}
