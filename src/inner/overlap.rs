// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Overlap calculation between two byte strings.
//!
//! The merge step appends one inner onto the tail of the running result. To
//! keep the result short, we look for the earliest position in the previous
//! inner where the next inner either fits entirely, or where a suffix of the
//! previous inner matches a prefix of the next one.
//!
//! # Examples
//!
//! ```
//! use superstring_search::inner::overlap_offset;
//!
//! assert_eq!(overlap_offset(b"abc", b"bcd"), 1); // append "d"
//! assert_eq!(overlap_offset(b"abc", b"def"), 3); // append everything
//! assert_eq!(overlap_offset(b"abcd", b"bc"), 1); // already contained
//! ```

/// Find the offset in `a` at which `b` can be laid over `a`.
///
/// Scans `k` in `0..a.len()` and returns the first `k` where either:
/// 1. all of `b` matches `a[k..]` (b is contained in a), or
/// 2. the match runs off the end of `a` (a suffix of `a` is a prefix of `b`).
///
/// Returns `a.len()` when there is no overlap at all. The smallest `k` is
/// always the longest overlap.
pub fn overlap_offset(a: &[u8], b: &[u8]) -> usize {
    let len_a = a.len();
    let len_b = b.len();

    for merge_at in 0..len_a {
        let matched = a[merge_at..]
            .iter()
            .zip(b)
            .take_while(|(x, y)| x == y)
            .count();

        // b is completely in a
        if matched == len_b {
            return merge_at;
        }
        // part of b is at the end of a
        if merge_at + matched == len_a {
            return merge_at;
        }
    }
    len_a
}

/// Check whether `needle` occurs as a contiguous substring of `haystack`.
///
/// The empty needle is contained in everything.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}
