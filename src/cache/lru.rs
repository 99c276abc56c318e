//! LRU Recency List Module
//!
//! Implements the recency order backing LRU eviction.
//!
//! Entries live in a dense arena (`Vec<Option<Node>>`) and are linked into a
//! doubly linked list through explicit `prev`/`next` slot indices:
//! - Front (head) = most recently used
//! - Back (tail) = least recently used, next eviction candidate
//!
//! Slot indices stay stable across every operation, so the index map in
//! `CacheStore` can hold them without rescanning the list. Removed slots are
//! recycled through a free list, which keeps the arena no larger than the
//! cache capacity.

use crate::cache::CacheEntry;

// == List Node ==
/// One arena slot: an entry plus its link indices.
#[derive(Debug)]
struct Node {
    entry: CacheEntry,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU List ==
/// Recency-ordered list of cache entries with O(1) touch, insert and remove.
#[derive(Debug, Default)]
pub struct LruList {
    /// Arena of nodes; `None` marks a recycled slot
    nodes: Vec<Option<Node>>,
    /// Recycled slot indices available for reuse
    free: Vec<usize>,
    /// Most recently used slot
    head: Option<usize>,
    /// Least recently used slot
    tail: Option<usize>,
}

impl LruList {
    // == Constructor ==
    /// Creates an empty list with arena space reserved for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
        }
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Returns true if no entries are linked.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Accessors ==
    /// Returns the entry stored in a slot, if the slot is occupied.
    pub fn entry(&self, idx: usize) -> Option<&CacheEntry> {
        self.nodes.get(idx).and_then(|slot| slot.as_ref()).map(|n| &n.entry)
    }

    /// Returns the least recently used entry without unlinking it.
    pub fn back(&self) -> Option<&CacheEntry> {
        self.tail.and_then(|idx| self.entry(idx))
    }

    /// Returns the most recently used entry.
    pub fn front(&self) -> Option<&CacheEntry> {
        self.head.and_then(|idx| self.entry(idx))
    }

    // == Push Front ==
    /// Links a new entry at the front (most recently used) and returns its slot.
    pub fn push_front(&mut self, entry: CacheEntry) -> usize {
        let idx = self.allocate_slot();
        self.nodes[idx] = Some(Node {
            entry,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head_node) = self.nodes[head_idx].as_mut() {
                head_node.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        idx
    }

    // == Replace ==
    /// Replaces the entry in an occupied slot wholesale, keeping its position.
    pub fn replace(&mut self, idx: usize, entry: CacheEntry) {
        if let Some(node) = self.nodes.get_mut(idx).and_then(|slot| slot.as_mut()) {
            node.entry = entry;
        }
    }

    // == Move To Front ==
    /// Marks a slot as most recently used.
    ///
    /// No-op if the slot is already at the front or unoccupied.
    pub fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        let (prev, next) = match self.nodes.get(idx).and_then(|slot| slot.as_ref()) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        // Unlink from the current position
        if let Some(prev_idx) = prev {
            if let Some(prev_node) = self.nodes[prev_idx].as_mut() {
                prev_node.next = next;
            }
        }
        if let Some(next_idx) = next {
            if let Some(next_node) = self.nodes[next_idx].as_mut() {
                next_node.prev = prev;
            }
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }

        // Relink at the front
        if let Some(node) = self.nodes[idx].as_mut() {
            node.prev = None;
            node.next = self.head;
        }
        if let Some(head_idx) = self.head {
            if let Some(head_node) = self.nodes[head_idx].as_mut() {
                head_node.prev = Some(idx);
            }
        }
        self.head = Some(idx);
    }

    // == Remove ==
    /// Unlinks a slot and recycles it, returning its entry.
    pub fn remove(&mut self, idx: usize) -> Option<CacheEntry> {
        let entry = self.unlink(idx)?;
        self.free.push(idx);
        Some(entry)
    }

    // == Pop Back ==
    /// Unlinks and returns the least recently used entry.
    pub fn pop_back(&mut self) -> Option<CacheEntry> {
        let tail_idx = self.tail?;
        self.remove(tail_idx)
    }

    // == Iteration ==
    /// Walks entries from most to least recently used.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &CacheEntry> {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            let idx = cursor?;
            let node = self.nodes.get(idx).and_then(|slot| slot.as_ref())?;
            cursor = node.next;
            Some(&node.entry)
        })
    }

    // == Internals ==
    /// Takes a recycled slot if one exists, otherwise grows the arena.
    fn allocate_slot(&mut self) -> usize {
        if let Some(idx) = self.free.pop() {
            idx
        } else {
            self.nodes.push(None);
            self.nodes.len() - 1
        }
    }

    /// Takes the node out of a slot and patches its neighbors.
    fn unlink(&mut self, idx: usize) -> Option<CacheEntry> {
        let node = self.nodes.get_mut(idx)?.take()?;

        if let Some(prev_idx) = node.prev {
            if let Some(prev_node) = self.nodes[prev_idx].as_mut() {
                prev_node.next = node.next;
            }
        } else {
            self.head = node.next;
        }

        if let Some(next_idx) = node.next {
            if let Some(next_node) = self.nodes[next_idx].as_mut() {
                next_node.prev = node.prev;
            }
        } else {
            self.tail = node.prev;
        }

        Some(node.entry)
    }
}
