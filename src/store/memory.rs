//! In-Memory Store Module
//!
//! A thread-safe, map-backed [`UnderlyingStore`] implementation. Serves as
//! the reference backend for tests and for embedding the facade without a
//! durable engine; it never reports a store failure.

use std::collections::HashMap;

use bytes::Bytes;
use parking_lot::RwLock;

use crate::store::{StoreValue, UnderlyingStore};

// == Memory Store ==
/// Map-backed key-value store with no timestamp support.
///
/// Reads report the empty timestamp, matching the contract for backends
/// that do not version their records.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Bytes, Bytes>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl UnderlyingStore for MemoryStore {
    fn get(&self, key: &[u8]) -> anyhow::Result<Option<StoreValue>> {
        let records = self.records.read();
        Ok(records
            .get(key)
            .map(|value| StoreValue::untimestamped(value.clone())))
    }

    fn put(&self, key: &[u8], value: &[u8]) -> anyhow::Result<()> {
        let mut records = self.records.write();
        records.insert(
            Bytes::copy_from_slice(key),
            Bytes::copy_from_slice(value),
        );
        Ok(())
    }

    fn delete(&self, key: &[u8]) -> anyhow::Result<()> {
        let mut records = self.records.write();
        records.remove(key);
        Ok(())
    }
}
