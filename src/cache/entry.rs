//! Cache Entry Module
//!
//! A memoized transformation output and its lifetime.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A memoized upstream output.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The transformed output
    pub output: String,
    /// When the output was stored
    pub stored_at: Instant,
    /// When the output stops being served, None = never
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry living for `ttl`, or forever when `ttl` is None.
    pub fn new(output: String, ttl: Option<Duration>) -> Self {
        let now = Instant::now();
        Self {
            output,
            stored_at: now,
            expires_at: ttl.map(|ttl| now + ttl),
        }
    }

    // == Is Expired ==
    /// An entry is expired once `now` reaches its expiry instant.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires| now >= expires)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}
