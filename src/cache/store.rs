//! Transform Store Module
//!
//! Bounded input -> output map combining LRU tracking and optional expiry.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats, RecencyIndex};

// == Transform Store ==
/// Memoized transformations keyed by exact input string.
///
/// Invariant: `len() <= capacity()` after every operation.
#[derive(Debug)]
pub struct TransformStore {
    entries: HashMap<String, CacheEntry>,
    recency: RecencyIndex,
    stats: CacheStats,
    capacity: usize,
    ttl: Option<Duration>,
}

impl TransformStore {
    // == Constructor ==
    /// Creates a store holding at most `capacity` entries, each living for
    /// `ttl` (forever when None).
    pub fn new(capacity: usize, ttl: Option<Duration>) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyIndex::new(),
            stats: CacheStats::new(capacity),
            capacity,
            ttl,
        }
    }

    // == Lookup ==
    /// Returns the memoized output for `input` and marks it most recently used.
    ///
    /// Expired entries are dropped and reported as misses.
    pub fn lookup(&mut self, input: &str) -> Option<String> {
        let expired = match self.entries.get(input) {
            Some(entry) if !entry.is_expired() => {
                let output = entry.output.clone();
                self.recency.touch(input);
                self.stats.record_hit();
                return Some(output);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.remove_entry(input);
            self.stats.record_expirations(1);
        }
        self.stats.record_miss();
        None
    }

    // == Insert ==
    /// Stores `input -> output`, evicting the least recently used entry first
    /// when a new key would exceed capacity.
    pub fn insert(&mut self, input: String, output: String) {
        if self.capacity == 0 {
            return;
        }

        if !self.entries.contains_key(&input) {
            // Expired entries give up their slots before any live entry is evicted
            if self.entries.len() >= self.capacity && self.ttl.is_some() {
                self.purge_expired();
            }
            while self.entries.len() >= self.capacity {
                let Some(oldest) = self.recency.pop_oldest() else {
                    break;
                };
                self.entries.remove(&oldest);
                self.stats.record_eviction();
            }
        }

        self.recency.touch(&input);
        self.entries.insert(input, CacheEntry::new(output, self.ttl));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Purge Expired ==
    /// Removes every expired entry, returning how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let now = Instant::now();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(input, _)| input.clone())
            .collect();

        for input in &expired {
            self.remove_entry(input);
        }

        self.stats.record_expirations(expired.len());
        expired.len()
    }

    // == Record Upstream ==
    /// Records the outcome of an upstream call made on a miss.
    pub fn record_upstream(&mut self, succeeded: bool) {
        self.stats.record_upstream(succeeded);
    }

    // == Stats ==
    /// Returns a snapshot of the counters with the current size and capacity.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats.capacity = self.capacity();
        stats
    }

    // == Contains ==
    /// Checks for an entry without touching recency or counters.
    #[cfg(test)]
    pub fn contains(&self, input: &str) -> bool {
        self.entries.contains_key(input)
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Maximum number of entries held at once.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn remove_entry(&mut self, input: &str) {
        self.entries.remove(input);
        self.recency.remove(input);
        self.stats.set_total_entries(self.entries.len());
    }
}
