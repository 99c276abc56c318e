//! cached_kv - a bounded LRU cache in front of a persistent key-value store
//!
//! Serves reads out of memory when possible while keeping the backing store
//! the single source of truth: write-through on put, read-through on miss,
//! unconditional invalidation on delete, deterministic LRU eviction when
//! capacity is exceeded. The cache is purely in-memory and rebuilds empty on
//! restart.
//!
//! # Example
//! ```
//! use cached_kv::{CachedKv, MemoryStore};
//!
//! let kv = CachedKv::new(MemoryStore::new(), 1024);
//! kv.put(b"user:1", b"alice", None)?;
//! let (value, _timestamp) = kv.get(b"user:1")?;
//! assert_eq!(value, "alice");
//! # Ok::<(), cached_kv::CacheError>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod facade;
pub mod store;

pub use cache::{CacheEntry, CacheStats, CacheStore};
pub use config::Config;
pub use error::{CacheError, Result};
pub use facade::CachedKv;
pub use store::{MemoryStore, StoreValue, UnderlyingStore};
