//! Cache Module
//!
//! Memoizes upstream transformations in a bounded LRU store with optional expiry.

mod entry;
mod lru;
mod memo;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::RecencyIndex;
pub use memo::MemoizedTransform;
pub use stats::CacheStats;
pub use store::TransformStore;
