//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for facade operations.
///
/// `NotFound` is a normal, expected outcome (the key is absent in both the
/// cache and the underlying store), not a fault. `Store` wraps a failure
/// reported by the underlying store with its originating cause; the cache
/// layer never retries or suppresses it.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key absent in both the cache and the underlying store
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Failure reported by the underlying store, passed through unmodified
    #[error("Underlying store error: {0}")]
    Store(#[source] anyhow::Error),
}

impl CacheError {
    /// Builds a `NotFound` for a byte-string key, rendered lossily for display.
    pub fn not_found(key: &[u8]) -> Self {
        CacheError::NotFound(String::from_utf8_lossy(key).into_owned())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache layer.
pub type Result<T> = std::result::Result<T, CacheError>;
