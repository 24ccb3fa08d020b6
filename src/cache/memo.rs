//! Memoized Transform Module
//!
//! Wraps a [`Transformer`] so repeated inputs are answered from the store.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{CacheStats, TransformStore};
use crate::error::Result;
use crate::upstream::Transformer;

// == Memoized Transform ==
/// A transformer with an LRU memo in front of it.
///
/// Cloning is cheap and clones share both the upstream and the store.
/// The store lock is released while the upstream call is in flight, so two
/// concurrent misses on the same input may both reach the upstream.
#[derive(Clone)]
pub struct MemoizedTransform {
    upstream: Arc<dyn Transformer>,
    store: Arc<RwLock<TransformStore>>,
}

impl MemoizedTransform {
    pub fn new(upstream: Arc<dyn Transformer>, store: TransformStore) -> Self {
        Self {
            upstream,
            store: Arc::new(RwLock::new(store)),
        }
    }

    // == Get Or Compute ==
    /// Returns the memoized output for `input`, calling the upstream on a miss.
    ///
    /// Failed upstream calls are never cached.
    pub async fn get_or_compute(&self, input: &str) -> Result<String> {
        // Write lock: a hit bumps recency
        if let Some(output) = self.store.write().await.lookup(input) {
            debug!("Cache hit for input of {} bytes", input.len());
            return Ok(output);
        }

        debug!("Cache miss for input of {} bytes, calling upstream", input.len());
        let outcome = self.upstream.transform(input).await;

        let mut store = self.store.write().await;
        store.record_upstream(outcome.is_ok());
        match outcome {
            Ok(output) => {
                store.insert(input.to_string(), output.clone());
                Ok(output)
            }
            Err(e) => {
                warn!("Upstream transform failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    /// Shared handle to the underlying store, for background maintenance.
    pub fn store(&self) -> Arc<RwLock<TransformStore>> {
        Arc::clone(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Upper-cases the reversed input and counts calls; fails after `fail_after` calls.
    struct CountingUpstream {
        calls: AtomicUsize,
        fail_after: usize,
    }

    impl CountingUpstream {
        fn new(fail_after: usize) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail_after,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transformer for CountingUpstream {
        async fn transform(&self, input: &str) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call >= self.fail_after {
                return Err(ServiceError::upstream_unavailable());
            }
            Ok(input.chars().rev().collect::<String>().to_uppercase())
        }
    }

    fn memo(upstream: Arc<CountingUpstream>, capacity: usize) -> MemoizedTransform {
        MemoizedTransform::new(upstream, TransformStore::new(capacity, None))
    }

    #[tokio::test]
    async fn test_second_call_is_served_from_cache() {
        let upstream = CountingUpstream::new(1);
        let memo = memo(upstream.clone(), 100);

        assert_eq!(memo.get_or_compute("test").await.unwrap(), "TSET");
        // The upstream would fail now, so this must be a cache hit
        assert_eq!(memo.get_or_compute("test").await.unwrap(), "TSET");
        assert_eq!(upstream.calls(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let upstream = CountingUpstream::new(0);
        let memo = memo(upstream.clone(), 100);

        let err = memo.get_or_compute("test").await.unwrap_err();
        assert_eq!(err, ServiceError::upstream_unavailable());
        assert!(memo.get_or_compute("test").await.is_err());

        assert_eq!(upstream.calls(), 2);
        let stats = memo.stats().await;
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.upstream_failures, 2);
    }

    #[tokio::test]
    async fn test_evicted_key_is_recomputed() {
        let upstream = CountingUpstream::new(usize::MAX);
        let memo = memo(upstream.clone(), 2);

        memo.get_or_compute("a").await.unwrap();
        memo.get_or_compute("b").await.unwrap();
        memo.get_or_compute("c").await.unwrap();
        assert_eq!(upstream.calls(), 3);

        // "b" and "c" are still cached
        memo.get_or_compute("b").await.unwrap();
        memo.get_or_compute("c").await.unwrap();
        assert_eq!(upstream.calls(), 3);

        // "a" was evicted first
        memo.get_or_compute("a").await.unwrap();
        assert_eq!(upstream.calls(), 4);
        assert_eq!(memo.stats().await.evictions, 2);
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let upstream = CountingUpstream::new(usize::MAX);
        let memo = memo(upstream.clone(), 10);

        memo.get_or_compute("test").await.unwrap();
        memo.get_or_compute("TEST").await.unwrap();
        assert_eq!(upstream.calls(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_access_keeps_store_bounded() {
        let upstream = CountingUpstream::new(usize::MAX);
        let memo = memo(upstream, 8);

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let memo = memo.clone();
                tokio::spawn(async move { memo.get_or_compute(&format!("key{}", i % 16)).await })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }

        let stats = memo.stats().await;
        assert!(stats.total_entries <= 8);
        assert_eq!(stats.hits + stats.misses, 64);
    }
}
