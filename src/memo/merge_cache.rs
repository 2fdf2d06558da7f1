// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Overlap cache implementations.

use std::collections::HashMap;

use super::{CacheCounts, OverlapCache};
use crate::inner::overlap_offset;

/// Packed ordered pair `(prev, index)` of inner positions.
///
/// Layout is `(prev << 16) | index`. Positions must fit in 16 bits; anything
/// larger would alias another pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u32);

impl CacheKey {
    /// Number of bits reserved for each position.
    pub const INDEX_BITS: u32 = 16;

    /// Largest position that can be packed.
    pub const MAX_INDEX: usize = (1 << Self::INDEX_BITS) - 1;

    /// Pack an ordered pair of positions.
    ///
    /// # Panics
    ///
    /// Panics if either position exceeds [`CacheKey::MAX_INDEX`].
    pub fn new(prev: usize, index: usize) -> Self {
        assert!(
            prev <= Self::MAX_INDEX && index <= Self::MAX_INDEX,
            "Cache key out of range: ({}, {}) does not fit in {} bits per index",
            prev,
            index,
            Self::INDEX_BITS
        );
        Self(((prev as u32) << Self::INDEX_BITS) | index as u32)
    }

    /// Position of the preceding inner.
    pub fn prev(self) -> usize {
        (self.0 >> Self::INDEX_BITS) as usize
    }

    /// Position of the inner being merged.
    pub fn index(self) -> usize {
        (self.0 & Self::MAX_INDEX as u32) as usize
    }
}

/// Hash map backed overlap cache, valid for one search run.
#[derive(Debug, Default)]
pub struct MergeCache {
    offsets: HashMap<CacheKey, usize>,
    counts: CacheCounts,
}

impl MergeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct pairs stored.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl OverlapCache for MergeCache {
    fn get_or_compute(&mut self, prev: usize, index: usize, a: &[u8], b: &[u8]) -> usize {
        let key = CacheKey::new(prev, index);
        if let Some(&offset) = self.offsets.get(&key) {
            self.counts.hits += 1;
            return offset;
        }
        self.counts.misses += 1;
        let offset = overlap_offset(a, b);
        self.offsets.insert(key, offset);
        offset
    }

    fn counts(&self) -> CacheCounts {
        self.counts
    }

    fn clear(&mut self) {
        self.offsets.clear();
        self.counts = CacheCounts::default();
    }
}

/// Pass-through "cache" that always recomputes.
#[derive(Debug, Default)]
pub struct NoCache {
    counts: CacheCounts,
}

impl OverlapCache for NoCache {
    fn get_or_compute(&mut self, _prev: usize, _index: usize, a: &[u8], b: &[u8]) -> usize {
        self.counts.misses += 1;
        overlap_offset(a, b)
    }

    fn counts(&self) -> CacheCounts {
        self.counts
    }

    fn clear(&mut self) {
        self.counts = CacheCounts::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_packing() {
        let key = CacheKey::new(3, 7);
        assert_eq!(key.prev(), 3);
        assert_eq!(key.index(), 7);
        assert_ne!(CacheKey::new(3, 7), CacheKey::new(7, 3));
        assert_ne!(CacheKey::new(0, 1), CacheKey::new(1, 0));
    }

    #[test]
    fn test_key_is_unique_over_input_range() {
        let mut seen = std::collections::HashSet::new();
        for prev in 0..21 {
            for index in 0..21 {
                assert!(seen.insert(CacheKey::new(prev, index)));
            }
        }
    }

    #[test]
    #[should_panic(expected = "Cache key out of range")]
    fn test_key_out_of_range() {
        let _ = CacheKey::new(CacheKey::MAX_INDEX + 1, 0);
    }

    #[test]
    fn test_merge_cache_hits() {
        let mut cache = MergeCache::new();
        assert_eq!(cache.get_or_compute(0, 1, b"abc", b"bcd"), 1);
        assert_eq!(cache.get_or_compute(0, 1, b"abc", b"bcd"), 1);
        assert_eq!(cache.get_or_compute(1, 0, b"bcd", b"abc"), 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.counts(), CacheCounts { hits: 1, misses: 2 });

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.counts(), CacheCounts::default());
    }

    #[test]
    fn test_merge_cache_trusts_key() {
        // The key alone identifies the pair; contents are only read on a miss.
        let mut cache = MergeCache::new();
        assert_eq!(cache.get_or_compute(0, 1, b"abc", b"bcd"), 1);
        assert_eq!(cache.get_or_compute(0, 1, b"xyz", b"uvw"), 1);
    }

    #[test]
    fn test_no_cache_recomputes() {
        let mut cache = NoCache::default();
        assert_eq!(cache.get_or_compute(0, 1, b"abc", b"bcd"), 1);
        assert_eq!(cache.get_or_compute(0, 1, b"xyz", b"uvw"), 3);
        assert_eq!(cache.counts(), CacheCounts { hits: 0, misses: 2 });
    }
}
