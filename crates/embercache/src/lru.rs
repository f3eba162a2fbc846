//! LRU (Least Recently Used) cache implementation
//!
//! Hash index plus a single recency list over the node arena.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

use crate::arena::{Arena, LinkedList};
use crate::error::{Error, Result};

struct LruEntry<K, V> {
    key: K,
    value: V,
}

/// Fixed-capacity key-value store evicting the least-recently-used entry.
///
/// Both [`get`](LruCache::get) and [`put`](LruCache::put) refresh recency;
/// [`peek`](LruCache::peek) does not. All operations are O(1) amortized.
pub struct LruCache<K, V> {
    index: HashMap<K, usize, RandomState>,
    arena: Arena<LruEntry<K, V>>,
    order: LinkedList,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] when `capacity` is zero; a cache
    /// that evicts every entry it admits is rejected up front.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        Ok(Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            arena: Arena::with_capacity(capacity),
            order: LinkedList::default(),
            capacity,
        })
    }

    /// Look up `key`, marking the entry most-recently-used on a hit.
    ///
    /// A miss returns `None` and leaves the cache untouched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.order.move_to_back(&mut self.arena, idx);
        self.arena.get(idx).map(|entry| &entry.value)
    }

    /// Look up `key` without refreshing recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.arena.get(idx).map(|entry| &entry.value)
    }

    /// Whether `key` is currently cached. Does not refresh recency.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or update `key`, leaving it most-recently-used.
    ///
    /// Returns the entry evicted to make room, if any. Updating an existing
    /// key never evicts.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(entry) = self.arena.get_mut(idx) {
                entry.value = value;
            }
            self.order.move_to_back(&mut self.arena, idx);
            return None;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.pop_lru()
        } else {
            None
        };

        let idx = self.arena.insert(LruEntry {
            key: key.clone(),
            value,
        });
        self.order.push_back(&mut self.arena, idx);
        self.index.insert(key, idx);

        evicted
    }

    /// Detach and return the least-recently-used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let idx = self.order.pop_front(&mut self.arena)?;
        let entry = self.arena.remove(idx)?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Remove `key` from the cache, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.remove(key)?;
        self.order.unlink(&mut self.arena, idx);
        self.arena.remove(idx).map(|entry| entry.value)
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry, keeping the configured capacity.
    pub fn clear(&mut self) {
        self.index.clear();
        self.arena.clear();
        self.order = LinkedList::default();
    }
}
