//! Facade Module
//!
//! `CachedKv` is the only component that talks to both the in-memory
//! `CacheStore` and the `UnderlyingStore`, and it is what enforces the
//! coherence contract between them:
//!
//! - Read-through: a miss falls through to the store, and only a confirmed
//!   successful read populates the cache.
//! - Write-through: the store write happens first; only on success is the
//!   cache updated, so the cache never holds a value that was never durably
//!   persisted.
//! - Delete: a successful store delete always invalidates the cache copy,
//!   so no stale value can be served afterward.
//!
//! The cache mutex is held only for O(1) critical sections and never across
//! a store call, so a slow or blocked backend cannot stall cache hits.

use bytes::Bytes;
use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::cache::{CacheStats, CacheStore};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::store::UnderlyingStore;

// == Cached KV Facade ==
/// Bounded LRU cache in front of a persistent key-value store.
///
/// Holds the backend by composition; the store stays the single source of
/// truth and the cache rebuilds empty on restart.
#[derive(Debug)]
pub struct CachedKv<S> {
    /// The authoritative backend
    store: S,
    /// In-memory LRU state; one unit of mutual exclusion, since even a
    /// lookup mutates recency order
    cache: Mutex<CacheStore>,
}

impl<S: UnderlyingStore> CachedKv<S> {
    // == Constructors ==
    /// Creates a facade over `store` with the given cache capacity.
    ///
    /// # Panics
    /// Panics if `cache_capacity` is zero.
    pub fn new(store: S, cache_capacity: usize) -> Self {
        Self {
            store,
            cache: Mutex::new(CacheStore::new(cache_capacity)),
        }
    }

    /// Creates a facade configured from a [`Config`].
    pub fn with_config(store: S, config: &Config) -> Self {
        Self::new(store, config.cache_capacity)
    }

    // == Get ==
    /// Reads a key, serving from the cache when possible.
    ///
    /// A cache hit returns immediately with no store access. On a miss the
    /// cache lock is released, the store is read, and a successful read
    /// populates the cache before returning. A store not-found or failure
    /// leaves the cache untouched.
    ///
    /// Two callers missing on the same key concurrently may both read the
    /// store and both populate; the last writer wins with an identical
    /// value, so the race is benign.
    pub fn get(&self, key: &[u8]) -> Result<(Bytes, Bytes)> {
        if let Some(entry) = self.cache.lock().lookup(key) {
            trace!("Cache hit for key {}", String::from_utf8_lossy(key));
            return Ok((entry.value, entry.timestamp));
        }

        debug!(
            "Cache miss for key {}, reading through",
            String::from_utf8_lossy(key)
        );
        match self.store.get(key) {
            Ok(Some(found)) => {
                self.cache.lock().upsert(
                    Bytes::copy_from_slice(key),
                    found.value.clone(),
                    found.timestamp.clone(),
                );
                Ok((found.value, found.timestamp))
            }
            Ok(None) => Err(CacheError::not_found(key)),
            Err(cause) => Err(CacheError::Store(cause)),
        }
    }

    // == Put ==
    /// Writes a key-value pair through to the store, then updates the cache.
    ///
    /// The store write is authoritative and happens first; if it fails, the
    /// cache is left exactly as it was and the failure is propagated. The
    /// timestamp defaults to the empty byte string when not provided.
    pub fn put(&self, key: &[u8], value: &[u8], timestamp: Option<&[u8]>) -> Result<()> {
        self.store.put(key, value).map_err(CacheError::Store)?;

        let timestamp = timestamp.map(Bytes::copy_from_slice).unwrap_or_default();
        self.cache.lock().upsert(
            Bytes::copy_from_slice(key),
            Bytes::copy_from_slice(value),
            timestamp,
        );
        debug!("Wrote through key {}", String::from_utf8_lossy(key));
        Ok(())
    }

    // == Delete ==
    /// Deletes a key from the store, then invalidates any cached copy.
    ///
    /// Deleting an absent key is a success (idempotent delete). Whether or
    /// not the key existed, a successful store delete invalidates the cache
    /// entry; only a genuine store error leaves the cache untouched.
    pub fn delete(&self, key: &[u8]) -> Result<()> {
        self.store.delete(key).map_err(CacheError::Store)?;

        if self.cache.lock().invalidate(key) {
            trace!(
                "Invalidated cached copy of key {}",
                String::from_utf8_lossy(key)
            );
        }
        Ok(())
    }

    // == Diagnostics ==
    /// Returns a snapshot of the cache performance counters.
    pub fn stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    /// Returns the current number of cache-resident entries.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Returns the configured cache capacity.
    pub fn cache_capacity(&self) -> usize {
        self.cache.lock().capacity()
    }

    /// Returns whether a key is cache-resident, without touching recency.
    pub fn is_cached(&self, key: &[u8]) -> bool {
        self.cache.lock().peek(key).is_some()
    }
}
