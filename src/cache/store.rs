//! Cache Store Module
//!
//! The in-memory LRU structure: a key index over the arena-backed recency
//! list, bounded by a fixed capacity. Pure data structure — no I/O and no
//! knowledge of the underlying store; `CachedKv` owns that orchestration.

use std::collections::HashMap;

use bytes::Bytes;

use crate::cache::{CacheEntry, CacheStats, LruList};

// == Cache Store ==
/// Bounded LRU cache over byte-string keys.
///
/// Holds a bijection between `index` (key → arena slot) and `order` (the
/// recency list): every resident key has exactly one slot and every occupied
/// slot is indexed by exactly one key. Debug builds re-check the bijection
/// after each mutation.
#[derive(Debug)]
pub struct CacheStore {
    /// Key to recency-list slot
    index: HashMap<Bytes, usize>,
    /// Recency order, front = most recently used
    order: LruList,
    /// Performance counters
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore bounded at `capacity` entries.
    ///
    /// # Panics
    /// Panics if `capacity` is zero; a zero-capacity cache cannot satisfy
    /// the insert-after-evict sequence.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        Self {
            index: HashMap::with_capacity(capacity),
            order: LruList::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Lookup ==
    /// Looks up a key, touching it on a hit.
    ///
    /// A hit moves the entry to the front of the recency order and returns
    /// an owned copy. A miss records a miss and has no other side effect.
    pub fn lookup(&mut self, key: &[u8]) -> Option<CacheEntry> {
        match self.index.get(key) {
            Some(&idx) => {
                self.order.move_to_front(idx);
                self.stats.record_hit();
                self.order.entry(idx).cloned()
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Upsert ==
    /// Inserts or replaces an entry and marks it most recently used.
    ///
    /// An existing key has its entry replaced wholesale in place. A new key
    /// inserted at capacity first evicts the least recently used entry.
    /// Never fails.
    pub fn upsert(&mut self, key: Bytes, value: Bytes, timestamp: Bytes) {
        if let Some(&idx) = self.index.get(&key) {
            self.order.replace(idx, CacheEntry::new(key, value, timestamp));
            self.order.move_to_front(idx);
        } else {
            if self.index.len() >= self.capacity {
                if let Some(evicted) = self.order.pop_back() {
                    self.index.remove(&evicted.key);
                    self.stats.record_eviction();
                }
            }
            let entry = CacheEntry::new(key.clone(), value, timestamp);
            let idx = self.order.push_front(entry);
            self.index.insert(key, idx);
        }

        self.stats.set_resident_entries(self.index.len());
        self.debug_check_coherent();
    }

    // == Invalidate ==
    /// Removes a key from the index and the recency order.
    ///
    /// Returns whether the key was resident. Never fails.
    pub fn invalidate(&mut self, key: &[u8]) -> bool {
        match self.index.remove(key) {
            Some(idx) => {
                self.order.remove(idx);
                self.stats.set_resident_entries(self.index.len());
                self.debug_check_coherent();
                true
            }
            None => false,
        }
    }

    // == Peek ==
    /// Reads an entry without touching recency order or counters.
    ///
    /// For tests and diagnostics; `lookup` is the operational read path.
    pub fn peek(&self, key: &[u8]) -> Option<&CacheEntry> {
        self.index.get(key).and_then(|&idx| self.order.entry(idx))
    }

    // == Introspection ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Walks resident entries from most to least recently used.
    pub(crate) fn iter_recency(&self) -> impl Iterator<Item = &CacheEntry> {
        self.order.iter()
    }

    /// Returns a snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_resident_entries(self.index.len());
        stats
    }

    // == Coherence Check ==
    /// Asserts the index/order bijection in debug builds.
    ///
    /// Unreachable by construction; a failure here is an internal bug, not
    /// a condition callers can observe or handle.
    fn debug_check_coherent(&self) {
        #[cfg(debug_assertions)]
        {
            debug_assert_eq!(
                self.index.len(),
                self.order.len(),
                "index and recency order disagree on size"
            );
            debug_assert!(
                self.index.len() <= self.capacity,
                "resident entries exceed capacity"
            );

            let mut linked = 0usize;
            for entry in self.order.iter() {
                let slot = self.index.get(&entry.key);
                debug_assert!(
                    slot.is_some_and(|&idx| {
                        self.order.entry(idx).map(|e| &e.key) == Some(&entry.key)
                    }),
                    "linked entry missing from index or indexed to a foreign slot"
                );
                linked += 1;
            }
            // Equal counts plus unique map keys rule out duplicates in the list
            debug_assert_eq!(linked, self.index.len(), "recency order holds unindexed entries");
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: &'static str) -> Bytes {
        Bytes::from_static(s.as_bytes())
    }

    fn upsert(store: &mut CacheStore, key: &'static str, value: &'static str) {
        store.upsert(b(key), b(value), Bytes::new());
    }

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(100);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.capacity(), 100);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_store_zero_capacity_panics() {
        CacheStore::new(0);
    }

    #[test]
    fn test_store_upsert_and_lookup() {
        let mut store = CacheStore::new(100);

        upsert(&mut store, "key1", "value1");
        let entry = store.lookup(b"key1").unwrap();

        assert_eq!(entry.value, "value1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_miss() {
        let mut store = CacheStore::new(100);

        assert!(store.lookup(b"nonexistent").is_none());
        assert_eq!(store.stats().misses, 1);
    }

    #[test]
    fn test_store_upsert_replaces_wholesale() {
        let mut store = CacheStore::new(100);

        store.upsert(b("key1"), b("value1"), b("t1"));
        store.upsert(b("key1"), b("value2"), Bytes::new());

        let entry = store.lookup(b"key1").unwrap();
        assert_eq!(entry.value, "value2");
        assert!(entry.timestamp.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_invalidate() {
        let mut store = CacheStore::new(100);

        upsert(&mut store, "key1", "value1");

        assert!(store.invalidate(b"key1"));
        assert!(store.is_empty());
        assert!(store.lookup(b"key1").is_none());
    }

    #[test]
    fn test_store_invalidate_absent_key() {
        let mut store = CacheStore::new(100);
        assert!(!store.invalidate(b"nonexistent"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_evicts_least_recently_used() {
        let mut store = CacheStore::new(3);

        upsert(&mut store, "key1", "value1");
        upsert(&mut store, "key2", "value2");
        upsert(&mut store, "key3", "value3");

        // At capacity: inserting key4 evicts key1 (never touched since insert)
        upsert(&mut store, "key4", "value4");

        assert_eq!(store.len(), 3);
        assert!(store.peek(b"key1").is_none());
        assert!(store.peek(b"key2").is_some());
        assert!(store.peek(b"key3").is_some());
        assert!(store.peek(b"key4").is_some());
        assert_eq!(store.stats().evictions, 1);
    }

    #[test]
    fn test_store_lookup_touch_changes_eviction() {
        let mut store = CacheStore::new(3);

        upsert(&mut store, "key1", "value1");
        upsert(&mut store, "key2", "value2");
        upsert(&mut store, "key3", "value3");

        // Touch key1 so key2 becomes the eviction candidate
        store.lookup(b"key1");
        upsert(&mut store, "key4", "value4");

        assert!(store.peek(b"key1").is_some());
        assert!(store.peek(b"key2").is_none());
    }

    #[test]
    fn test_store_upsert_touch_changes_eviction() {
        let mut store = CacheStore::new(2);

        upsert(&mut store, "key1", "value1");
        upsert(&mut store, "key2", "value2");

        // Re-upserting key1 touches it, so key2 is evicted next
        upsert(&mut store, "key1", "value1b");
        upsert(&mut store, "key3", "value3");

        assert!(store.peek(b"key1").is_some());
        assert!(store.peek(b"key2").is_none());
        assert!(store.peek(b"key3").is_some());
    }

    #[test]
    fn test_store_peek_does_not_touch() {
        let mut store = CacheStore::new(2);

        upsert(&mut store, "key1", "value1");
        upsert(&mut store, "key2", "value2");

        // peek must not rescue key1 from eviction
        assert!(store.peek(b"key1").is_some());
        upsert(&mut store, "key3", "value3");

        assert!(store.peek(b"key1").is_none());
        assert_eq!(store.stats().hits, 0);
        assert_eq!(store.stats().misses, 0);
    }

    #[test]
    fn test_store_capacity_bound_holds() {
        let mut store = CacheStore::new(4);

        for i in 0..32 {
            let key = Bytes::from(format!("key{i}"));
            store.upsert(key, b("v"), Bytes::new());
            assert!(store.len() <= store.capacity());
        }
        assert_eq!(store.len(), 4);
        assert_eq!(store.stats().evictions, 28);
    }

    #[test]
    fn test_store_stats_counts() {
        let mut store = CacheStore::new(100);

        upsert(&mut store, "key1", "value1");
        store.lookup(b"key1");
        store.lookup(b"nonexistent");

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.resident_entries, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }
}
