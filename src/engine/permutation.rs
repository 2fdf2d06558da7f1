// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Lexicographic permutation generator.
//!
//! Every call to `next` hands out a fresh index vector, so callers never see
//! an ordering change underneath them. The enumeration starts at the identity
//! permutation and visits all `n!` orderings exactly once, in lexicographic
//! order; this order decides which of several equally short results wins.
//!
//! ```
//! use superstring_search::engine::Permutations;
//!
//! let all: Vec<Vec<usize>> = Permutations::new(3).collect();
//! assert_eq!(all.len(), 6);
//! assert_eq!(all[0], vec![0, 1, 2]);
//! assert_eq!(all[1], vec![0, 2, 1]);
//! assert_eq!(all[5], vec![2, 1, 0]);
//! ```

/// Number of permutations of `n` items.
///
/// Returned as `u128`: `21!` does not fit in a `u64`.
pub fn factorial(n: usize) -> u128 {
    (1..=n as u128).product()
}

/// Iterator over all permutations of `0..n` in lexicographic order.
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            next: Some((0..n).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        let mut following = current.clone();
        if advance(&mut following) {
            self.next = Some(following);
        }
        Some(current)
    }
}

/// Step `perm` to its lexicographic successor.
///
/// Returns false (leaving `perm` untouched) when `perm` is the last one.
fn advance(perm: &mut [usize]) -> bool {
    let Some(pivot) = perm.windows(2).rposition(|pair| pair[0] < pair[1]) else {
        return false;
    };
    // There is always a larger element to the right of the pivot.
    let Some(successor) = perm.iter().rposition(|&value| value > perm[pivot]) else {
        return false;
    };
    perm.swap(pivot, successor);
    perm[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
        assert_eq!(factorial(21), 51_090_942_171_709_440_000);
    }

    #[test]
    fn test_empty_has_one_permutation() {
        let all: Vec<Vec<usize>> = Permutations::new(0).collect();
        assert_eq!(all, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<Vec<usize>> = Permutations::new(3).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_all_distinct() {
        for n in 1..=6 {
            let all: Vec<Vec<usize>> = Permutations::new(n).collect();
            assert_eq!(all.len() as u128, factorial(n));
            let distinct: HashSet<Vec<usize>> = all.iter().cloned().collect();
            assert_eq!(distinct.len(), all.len());
            assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
