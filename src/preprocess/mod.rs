// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Containment preprocessing.
//!
//! An inner that is a substring of another inner adds nothing to the result,
//! so it is taken out of the search and linked into its container's
//! containment chain for reporting. Only maximal inners are left to permute.
//!
//! # Algorithm
//!
//! 1. Sort by length, longest first (stable, so equal lengths keep their
//!    input order).
//! 2. For each surviving inner `i`, absorb every later surviving `j` that `i`
//!    contains. `j` is spliced into `i`'s chain after the deepest link that
//!    still contains it. Every link is contained in the chain head, and a
//!    link nested in another link is placed after it.
//!
//! Identical inners collapse into the first one.

use tracing::debug;

use crate::inner::{contains, InnerArena, InnerId};

/// Remove contained inners, returning the ids left to search.
///
/// The returned ids are in descending length order. Absorbed inners are
/// reachable only through the containment chains of the survivors.
pub fn reduce(arena: &mut InnerArena) -> Vec<InnerId> {
    let mut order: Vec<InnerId> = arena.ids().collect();
    order.sort_by_key(|&id| std::cmp::Reverse(arena.get(id).len()));

    let mut absorbed = vec![false; order.len()];
    for i in 0..order.len() {
        if absorbed[i] {
            continue;
        }
        let container = order[i];
        for j in (i + 1)..order.len() {
            if absorbed[j] {
                continue;
            }
            let candidate = order[j];
            if !contains(&arena.get(container).bytes, &arena.get(candidate).bytes) {
                continue;
            }

            let insert_at = deepest_container(arena, container, candidate);
            let rest = arena.get(insert_at).contained;
            arena.get_mut(candidate).contained = rest;
            arena.get_mut(insert_at).contained = Some(candidate);
            absorbed[j] = true;

            debug!(
                inner = %arena.get(candidate).id,
                container = %arena.get(insert_at).id,
                "absorbed contained inner"
            );
        }
    }

    order
        .into_iter()
        .zip(absorbed)
        .filter_map(|(id, gone)| (!gone).then_some(id))
        .collect()
}

/// Deepest link of `head`'s chain (`head` included) that contains `candidate`.
fn deepest_container(arena: &InnerArena, head: InnerId, candidate: InnerId) -> InnerId {
    let needle = &arena.get(candidate).bytes;
    let mut deepest = head;
    let mut at = head;
    while let Some(next) = arena.get(at).contained {
        if contains(&arena.get(next).bytes, needle) {
            deepest = next;
        }
        at = next;
    }
    deepest
}
