//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

// == Cache Entry ==
/// A stored value together with its creation time and deadline.
///
/// Both timestamps are readings of the owning cache's [`Clock`](super::Clock).
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Clock reading when the entry was written
    pub created_at: Duration,
    /// Clock reading at which the entry stops being live
    pub expires_at: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry written at `now` that lives for `ttl_minutes`.
    ///
    /// A TTL of zero or less yields an entry whose deadline is `now`, which
    /// is already expired.
    pub fn new(value: V, ttl_minutes: i64, now: Duration) -> Self {
        Self {
            value,
            created_at: now,
            expires_at: now.saturating_add(minutes_to_duration(ttl_minutes)),
        }
    }

    // == Is Expired ==
    /// An entry is live strictly before its deadline and expired from the
    /// deadline onwards.
    pub fn is_expired(&self, now: Duration) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Remaining lifetime at `now`, zero once expired.
    pub fn ttl_remaining(&self, now: Duration) -> Duration {
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Converts a consumer-facing minute count into a duration, clamping
/// non-positive values to zero.
pub fn minutes_to_duration(minutes: i64) -> Duration {
    if minutes <= 0 {
        Duration::ZERO
    } else {
        Duration::from_secs((minutes as u64).saturating_mul(60))
    }
}
