//! Cache Entry Module
//!
//! Defines the record stored for each cached key.

use bytes::Bytes;

// == Cache Entry ==
/// One cached record: a key, its value, and an opaque timestamp.
///
/// Entries are immutable once constructed; an update replaces the entry
/// wholesale rather than mutating it in place. The timestamp is carried
/// verbatim and never interpreted by the cache; backends without timestamp
/// support use the empty byte string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The cached key
    pub key: Bytes,
    /// The cached value
    pub value: Bytes,
    /// Opaque timestamp reported by the store, or empty
    pub timestamp: Bytes,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry.
    pub fn new(key: Bytes, value: Bytes, timestamp: Bytes) -> Self {
        Self {
            key,
            value,
            timestamp,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(
            Bytes::from_static(b"k"),
            Bytes::from_static(b"v"),
            Bytes::new(),
        );

        assert_eq!(entry.key, "k");
        assert_eq!(entry.value, "v");
        assert!(entry.timestamp.is_empty());
    }

    #[test]
    fn test_entry_clone_is_cheap_copy() {
        let entry = CacheEntry::new(
            Bytes::from_static(b"k"),
            Bytes::from_static(b"v"),
            Bytes::from_static(b"t1"),
        );
        let copy = entry.clone();

        assert_eq!(copy, entry);
    }
}
