//! Underlying Store Module
//!
//! The contract consumed from the persistent key-value backend. The facade
//! holds implementations of [`UnderlyingStore`] by composition and treats
//! them purely as a capability: it neither knows nor cares whether the
//! backend is a log-structured engine, a B-tree, or a remote service.

mod memory;

pub use memory::MemoryStore;

use anyhow::Result;
use bytes::Bytes;

// == Store Value ==
/// A record read from the underlying store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreValue {
    /// The stored value
    pub value: Bytes,
    /// Opaque timestamp, empty for backends without timestamp support
    pub timestamp: Bytes,
}

impl StoreValue {
    /// Creates a store value carrying a timestamp.
    pub fn new(value: Bytes, timestamp: Bytes) -> Self {
        Self { value, timestamp }
    }

    /// Creates a store value with the empty timestamp.
    pub fn untimestamped(value: Bytes) -> Self {
        Self {
            value,
            timestamp: Bytes::new(),
        }
    }
}

// == Underlying Store Trait ==
/// The durable, authoritative key-value backend fronted by the cache.
///
/// All methods take `&self`; interior mutability and its synchronization are
/// the backend's concern, as they are for an embedded storage engine. Errors
/// are opaque causes; the cache layer wraps them unmodified and never retries.
pub trait UnderlyingStore: Send + Sync {
    /// Reads a key. `Ok(None)` means the key is absent (an expected
    /// outcome, not a failure).
    fn get(&self, key: &[u8]) -> Result<Option<StoreValue>>;

    /// Durably writes a key-value pair.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<()>;

    /// Deletes a key. Deleting an absent key succeeds idempotently.
    fn delete(&self, key: &[u8]) -> Result<()>;
}

// == Arc Delegation ==
// Shared backends work unchanged; callers can keep a handle to the same
// store instance the facade fronts.
impl<T: UnderlyingStore + ?Sized> UnderlyingStore for std::sync::Arc<T> {
    fn get(&self, key: &[u8]) -> Result<Option<StoreValue>> {
        (**self).get(key)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &[u8]) -> Result<()> {
        (**self).delete(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_untimestamped_value() {
        let value = StoreValue::untimestamped(Bytes::from_static(b"v"));
        assert_eq!(value.value, "v");
        assert!(value.timestamp.is_empty());
    }

    #[test]
    fn test_timestamped_value() {
        let value = StoreValue::new(Bytes::from_static(b"v"), Bytes::from_static(b"t7"));
        assert_eq!(value.timestamp, "t7");
    }

    #[test]
    fn test_arc_backend_delegates() {
        let store = Arc::new(MemoryStore::new());

        store.put(b"k", b"v").unwrap();
        let found = Arc::clone(&store).get(b"k").unwrap().unwrap();
        assert_eq!(found.value, "v");

        store.delete(b"k").unwrap();
        assert!(store.get(b"k").unwrap().is_none());
    }
}
