// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive permutation search.
//!
//! The engine visits every ordering of the inners, builds a fresh
//! [`MergedInners`] for each, and keeps the shortest one that fits the
//! maximum result size.
//!
//! # Execution Model
//!
//! For each permutation produced by [`Permutations`]:
//! 1. Fold every inner, in order, into a new accumulator.
//! 2. If it fits and is strictly shorter than the incumbent, it replaces the
//!    incumbent as a whole and the observer hears about it.
//! 3. Whenever the integer percentage of processed permutations changes, the
//!    observer hears about that too.
//!
//! Ties go to the first permutation in lexicographic order. When nothing fits,
//! the empty result is returned.
//!
//! The engine owns its overlap cache and clears it at the start of every
//! search, since cache keys are positions in the list being searched.
//!
//! # Example
//!
//! ```
//! use superstring_search::engine::SearchEngine;
//! use superstring_search::inner::Inner;
//!
//! let inners = [Inner::new("a", "abc"), Inner::new("b", "bcd")];
//! let refs: Vec<&Inner> = inners.iter().collect();
//!
//! let mut engine = SearchEngine::with_merge_cache(true);
//! let best = engine.search(&refs, 10);
//! assert_eq!(best.value, b"abcd");
//! assert_eq!(best.merge_pos, vec![0, 1]);
//! ```

pub mod observer;
pub mod permutation;

pub use observer::{LogObserver, SearchObserver};
pub use permutation::{factorial, Permutations};

use tracing::{debug, info};

use crate::inner::Inner;
use crate::memo::{new_cache, OverlapCache};
use crate::state::{Counters, MergedInners, Statistics};

/// Search engine for the shortest merge over all orderings.
pub struct SearchEngine {
    /// Overlap offsets, valid for the current search only.
    cache: Box<dyn OverlapCache>,

    /// Counters for the most recent search.
    statistics: Statistics,
}

impl SearchEngine {
    /// Create an engine using the given cache.
    pub fn new(cache: Box<dyn OverlapCache>) -> Self {
        Self {
            cache,
            statistics: Statistics::new(),
        }
    }

    /// Create an engine with the merge cache switched on or off.
    pub fn with_merge_cache(enabled: bool) -> Self {
        Self::new(new_cache(enabled))
    }

    /// Search all orderings, logging progress through `tracing`.
    pub fn search(&mut self, inners: &[&Inner], max_result_size: usize) -> MergedInners {
        self.search_with_observer(inners, max_result_size, &mut LogObserver)
    }

    /// Search all orderings, reporting to `observer`.
    ///
    /// Returns the shortest merge no longer than `max_result_size`, or the
    /// empty result when no ordering fits.
    pub fn search_with_observer(
        &mut self,
        inners: &[&Inner],
        max_result_size: usize,
        observer: &mut dyn SearchObserver,
    ) -> MergedInners {
        self.cache.clear();
        self.statistics = Statistics::new();

        let total = factorial(inners.len());
        let mut processed: u128 = 0;
        let mut last_progress: u32 = 0;
        let mut best: Option<MergedInners> = None;

        for order in Permutations::new(inners.len()) {
            let candidate = MergedInners::from_order(inners, &order, self.cache.as_mut());
            self.statistics.increment_counter(Counters::Permutations);

            if candidate.len() > max_result_size {
                self.statistics.increment_counter(Counters::Oversized);
            } else if best
                .as_ref()
                .map_or(true, |incumbent| candidate.is_better_than(incumbent))
            {
                observer.on_new_result(&candidate, inners);
                self.statistics.increment_counter(Counters::Improvements);
                best = Some(candidate);
            }

            processed += 1;
            let progress = (processed * 100 / total) as u32;
            if progress != last_progress {
                observer.on_progress(progress);
                last_progress = progress;
            }
        }

        let counts = self.cache.counts();
        self.statistics.set(Counters::CacheHits, counts.hits);
        self.statistics.set(Counters::CacheMisses, counts.misses);
        for (name, value) in self.statistics.iter() {
            debug!(counter = name, value, "search statistics");
        }

        let best = best.filter(|result| !result.is_empty()).unwrap_or_default();
        info!(
            permutations = self.statistics.get(Counters::Permutations),
            size = best.len(),
            "search finished"
        );
        best
    }

    /// Counters for the most recent search.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_merge_cache(true)
    }
}
