//! Thread-safe handles layering statistics over the single-threaded cores
//!
//! Synchronization is a wrapping layer, kept out of the eviction logic: a
//! whole-cache `parking_lot::RwLock` guards each core. Lookups mutate
//! recency/frequency order on both policies, so every cache operation takes
//! the write lock; the read lock only serves size queries. Consumers needing
//! more parallelism should shard multiple handles.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::lfu::LfuCache;
use crate::lru::LruCache;
use crate::stats::{CacheStats, StatsSnapshot};

/// Cloneable, thread-safe handle over an [`LruCache`].
///
/// Clones share the same cache and the same counters.
pub struct SharedLruCache<K, V> {
    inner: Arc<RwLock<LruCache<K, V>>>,
    stats: Arc<CacheStats>,
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a shared cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`](crate::Error::InvalidCapacity)
    /// when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(LruCache::new(capacity)?)),
            stats: Arc::new(CacheStats::new()),
        })
    }

    /// Look up `key`, returning an owned copy of the value and recording a
    /// hit or miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        match cache.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or update `key`, recording the insertion and any eviction it
    /// forced.
    pub fn insert(&self, key: K, value: V) {
        let mut cache = self.inner.write();
        let evicted = cache.put(key, value);
        self.stats.record_insertion();
        if evicted.is_some() {
            self.stats.record_eviction();
        }
    }

    /// Remove `key`, returning its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Drop every entry and zero the counters.
    pub fn clear(&self) {
        self.inner.write().clear();
        self.stats.reset();
    }

    /// Current counter values.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

/// Cloneable, thread-safe handle over an [`LfuCache`].
///
/// Clones share the same cache and the same counters.
pub struct SharedLfuCache<K, V> {
    inner: Arc<RwLock<LfuCache<K, V>>>,
    stats: Arc<CacheStats>,
}

impl<K, V> Clone for SharedLfuCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> SharedLfuCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a shared cache holding at most `capacity` entries. Capacity 0
    /// is allowed and makes every insert a no-op.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(LfuCache::new(capacity))),
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// Look up `key`, returning an owned copy of the value and recording a
    /// hit or miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut cache = self.inner.write();
        match cache.get(key) {
            Some(value) => {
                let value = value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or update `key`, recording the insertion and any eviction it
    /// forced.
    pub fn insert(&self, key: K, value: V) {
        let mut cache = self.inner.write();
        let evicted = cache.put(key, value);
        self.stats.record_insertion();
        if evicted.is_some() {
            self.stats.record_eviction();
        }
    }

    /// Remove `key`, returning its value.
    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    /// Current access count for `key`, if cached.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.inner.read().frequency(key)
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Drop every entry and zero the counters.
    pub fn clear(&self) {
        self.inner.write().clear();
        self.stats.reset();
    }

    /// Current counter values.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}
