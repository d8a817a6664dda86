//! Cache Module
//!
//! Provides the in-memory TTL cache and the typed slots the client caches
//! expensive lookups in.

mod clock;
mod entry;
mod key;
mod stats;
mod store;
mod value;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{minutes_to_duration, CacheEntry};
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::TtlCache;
pub use value::CachedValue;

/// The application cache: one slot per [`CacheKey`].
pub type PortalCache = TtlCache<CacheKey, CachedValue>;

/// Handle to the process-wide cache, shared by every consumer.
pub type SharedCache = Arc<RwLock<PortalCache>>;

/// Wraps a cache so it can be handed to consumers.
pub fn shared(cache: PortalCache) -> SharedCache {
    Arc::new(RwLock::new(cache))
}

// == TTL Presets ==
/// Common TTLs, in minutes.
pub mod ttl {
    pub const SHORT: i64 = 5;
    pub const MEDIUM: i64 = 15;
    pub const LONG: i64 = 60;
    pub const VERY_LONG: i64 = 1440;
}

/// TTL in minutes applied when neither caller nor configuration gives one.
pub const DEFAULT_TTL_MINUTES: i64 = ttl::SHORT;
