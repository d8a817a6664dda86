//! Cache Keys
//!
//! Every cached resource owns exactly one slot. The variants carry no
//! arguments, so weather looked up by city and weather looked up by IP
//! share the same slot.

use std::fmt;
use std::str::FromStr;

// == Cache Key ==
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Profile of the signed-in user
    UserInfo,
    /// Most recent weather snapshot
    Weather,
}

impl CacheKey {
    /// Every key, in declaration order.
    pub const ALL: [CacheKey; 2] = [CacheKey::UserInfo, CacheKey::Weather];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::UserInfo => "userInfo",
            CacheKey::Weather => "weather",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CacheKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("Unknown cache key: {}", s))
    }
}
