// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use superstring_search::engine::Permutations;
use superstring_search::memo::NoCache;
use superstring_search::{Inner, MergedInners};

/// Build inners named `i0`, `i1`, ... from their contents.
pub fn owned<S: AsRef<str>>(values: &[S]) -> Vec<Inner> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Inner::new(format!("i{}", i), v.as_ref()))
        .collect()
}

/// Borrow a slice of inners the way the engine takes them.
pub fn refs(inners: &[Inner]) -> Vec<&Inner> {
    inners.iter().collect()
}

/// Merge every permutation independently, without any cache.
pub fn all_candidates(inners: &[&Inner]) -> Vec<MergedInners> {
    Permutations::new(inners.len())
        .map(|order| MergedInners::from_order(inners, &order, &mut NoCache::default()))
        .collect()
}
