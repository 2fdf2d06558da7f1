// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Merge accumulator for one candidate ordering.

use crate::inner::Inner;
use crate::memo::OverlapCache;

/// Expected upper bound on a result length, used to preallocate the buffer.
const VALUE_CAPACITY: usize = 255;

/// Progressive merge of inners in one order.
///
/// `inner_indices[i]` is the position (in the searched list) of the i-th
/// merged inner, and `merge_pos[i]` is where that inner starts in `value`.
/// The default value is the empty result: no inners and an empty buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedInners {
    pub inner_indices: Vec<usize>,
    pub merge_pos: Vec<usize>,
    pub value: Vec<u8>,
}

impl MergedInners {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the accumulator for a whole ordering.
    pub fn from_order(inners: &[&Inner], order: &[usize], cache: &mut dyn OverlapCache) -> Self {
        let mut merged = Self::new();
        for &index in order {
            merged.merge(inners, index, cache);
        }
        merged
    }

    /// Position of the most recently merged inner.
    pub fn last_index(&self) -> Option<usize> {
        self.inner_indices.last().copied()
    }

    /// Check whether nothing has been merged.
    pub fn is_empty(&self) -> bool {
        self.inner_indices.is_empty()
    }

    /// Length of the merged string.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Append `inners[index]` onto the tail of the running result.
    ///
    /// The previous inner is assumed to end at the tail of the buffer, which
    /// holds whenever no searched inner is a substring of another one.
    ///
    /// # Panics
    ///
    /// Panics if the cache returns an offset beyond the previous inner.
    pub fn merge(&mut self, inners: &[&Inner], index: usize, cache: &mut dyn OverlapCache) {
        let bytes = &inners[index].bytes;

        let Some(last) = self.last_index() else {
            self.merge_pos = Vec::with_capacity(inners.len());
            self.merge_pos.push(0);
            self.inner_indices = Vec::with_capacity(inners.len());
            self.inner_indices.push(index);
            self.value = Vec::with_capacity(VALUE_CAPACITY.max(bytes.len()));
            self.value.extend_from_slice(bytes);
            return;
        };

        let last_bytes = &inners[last].bytes;
        let pos = cache.get_or_compute(last, index, last_bytes, bytes);
        let len_a = last_bytes.len();
        assert!(
            pos <= len_a,
            "Overlap offset {} outside [0, {}] merging {} after {}",
            pos,
            len_a,
            index,
            last
        );

        self.merge_pos.push(self.value.len() - len_a + pos);

        // abc + bcd appends "d"; abcd + bc appends nothing
        let covered = len_a - pos;
        if covered < bytes.len() {
            self.value.extend_from_slice(&bytes[covered..]);
        }
        self.inner_indices.push(index);
    }

    /// Strictly shorter than `other`.
    ///
    /// Only meaningful between two completed candidates.
    pub fn is_better_than(&self, other: &MergedInners) -> bool {
        self.value.len() < other.value.len()
    }
}
