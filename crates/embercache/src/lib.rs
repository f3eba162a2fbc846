//! # embercache
//!
//! Bounded in-memory key-value caches with O(1) eviction.
//!
//! ## Architecture
//! - **Arena**: index-addressed linked nodes, no raw pointers
//! - **LruCache**: AHash index + single recency list, evicts least recent
//! - **LfuCache**: AHash index + per-frequency recency lists + min-frequency
//!   tracker, evicts least frequent (least recent on ties)
//! - **Shared handles**: `parking_lot::RwLock` wrappers with hit/miss stats
//!
//! The core caches take `&mut self` and do no locking; wrap them in
//! [`SharedLruCache`]/[`SharedLfuCache`] when handles must cross threads.

#![warn(missing_docs)]

mod arena;
mod error;
mod lfu;
mod lru;
mod shared;
mod stats;

pub use error::{Error, Result};
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use shared::{SharedLfuCache, SharedLruCache};
pub use stats::{CacheStats, StatsSnapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policies_diverge_on_frequency() {
        // Same access sequence, different victims: LRU drops the stale key,
        // LFU drops the cold one.
        let mut lru = LruCache::new(2).unwrap();
        let mut lfu = LfuCache::new(2);

        lru.put(1, 1);
        lru.put(2, 2);
        lru.get(&1);
        lru.get(&1);
        lru.put(2, 2);
        lru.put(3, 3); // LRU evicts 1 despite its three touches

        lfu.put(1, 1);
        lfu.put(2, 2);
        lfu.get(&1);
        lfu.get(&1);
        lfu.put(2, 2);
        lfu.put(3, 3); // LFU keeps 1 (freq 3) and evicts 2 (freq 2)

        assert_eq!(lru.get(&1), None);
        assert_eq!(lru.get(&2), Some(&2));
        assert_eq!(lfu.get(&1), Some(&1));
        assert_eq!(lfu.get(&2), None);
    }
}
