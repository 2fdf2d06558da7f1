// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized overlap offsets.
//!
//! Within one search run the same pair of adjacent inners shows up in many
//! permutations, so the overlap offset of each ordered pair is worth
//! remembering. The cache is an explicit object owned by the search engine;
//! [`NoCache`] implements the same interface and recomputes every time.
//!
//! Both implementations must produce identical offsets.

pub mod merge_cache;

pub use merge_cache::{CacheKey, MergeCache, NoCache};

/// Lookup counters reported by an [`OverlapCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheCounts {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that had to compute the overlap.
    pub misses: u64,
}

/// Source of overlap offsets for the merge step.
///
/// `prev` and `index` identify the ordered pair of inners (positions in the
/// list being searched); `a` and `b` are their contents.
pub trait OverlapCache {
    /// Return the overlap offset of `b` onto `a`, computing it if needed.
    fn get_or_compute(&mut self, prev: usize, index: usize, a: &[u8], b: &[u8]) -> usize;

    /// Lookup counters since construction (or the last [`clear`](Self::clear)).
    fn counts(&self) -> CacheCounts;

    /// Forget everything, ready for an independent run.
    fn clear(&mut self);
}

/// Build the cache selected by configuration.
pub fn new_cache(enabled: bool) -> Box<dyn OverlapCache> {
    if enabled {
        Box::new(MergeCache::new())
    } else {
        Box::new(NoCache::default())
    }
}
