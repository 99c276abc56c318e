//! Cache Module
//!
//! The in-memory side of the crate: a bounded LRU structure built from a
//! key index and an arena-backed recency list, plus performance counters.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruList;
pub use stats::CacheStats;
pub use store::CacheStore;
