// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable report of a search result.
//!
//! A [`Report`] holds the data derived from the best merge (placements,
//! category sums, the merged string and the absorbed inners) and renders it
//! as text:
//!
//! ```text
//! Inners: first at 0, second at 3
//! ABCDE FGH
//! Chi Values: +3fire +1water
//! omitted inners (because they are part of other inners):
//! bc is part of first
//! ```

use std::collections::BTreeMap;

use crate::inner::{contains, Inner, InnerArena};
use crate::state::MergedInners;

/// One included inner and where it starts in the merged string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub id: String,
    pub offset: usize,
}

/// An absorbed inner and the inner it is part of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Absorbed {
    pub id: String,
    pub container: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub placements: Vec<Placement>,
    /// Sum of `chi_value` per non-empty `chi_type`, ordered by type.
    pub chi_values: BTreeMap<String, i64>,
    pub value: Vec<u8>,
    pub absorbed: Vec<Absorbed>,
}

impl Report {
    /// Derive the report for `result`, a merge over `inners`.
    ///
    /// `arena` resolves the containment chains of the included inners.
    pub fn new(result: &MergedInners, inners: &[&Inner], arena: &InnerArena) -> Self {
        let mut placements = Vec::with_capacity(result.inner_indices.len());
        let mut chi_values = BTreeMap::new();
        let mut absorbed = Vec::new();

        for (&index, &offset) in result.inner_indices.iter().zip(&result.merge_pos) {
            let inner = inners[index];
            placements.push(Placement {
                id: inner.id.clone(),
                offset,
            });
            if !inner.chi_type.is_empty() {
                *chi_values.entry(inner.chi_type.clone()).or_insert(0) += inner.chi_value;
            }
            collect_absorbed(inner, arena, &mut absorbed);
        }

        Self {
            placements,
            chi_values,
            value: result.value.clone(),
            absorbed,
        }
    }

    /// The merged string split into `word_size` byte chunks separated by
    /// spaces.
    ///
    /// A `word_size` of 0 leaves the string unsplit.
    pub fn words(&self, word_size: usize) -> String {
        if word_size == 0 {
            return String::from_utf8_lossy(&self.value).into_owned();
        }
        let mut out = Vec::with_capacity(self.value.len() + self.value.len() / word_size);
        for (i, chunk) in self.value.chunks(word_size).enumerate() {
            if i > 0 {
                out.push(b' ');
            }
            out.extend_from_slice(chunk);
        }
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Render the full text report.
    pub fn render(&self, word_size: usize) -> String {
        let mut out = String::from("Inners: ");
        for (i, placement) in self.placements.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{} at {}", placement.id, placement.offset));
        }

        out.push('\n');
        out.push_str(&self.words(word_size));

        out.push_str("\nChi Values: ");
        for (i, (chi_type, chi_value)) in self.chi_values.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("+{}{}", chi_value, chi_type));
        }

        out.push_str("\nomitted inners (because they are part of other inners):\n");
        for (i, absorbed) in self.absorbed.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&format!("{} is part of {}", absorbed.id, absorbed.container));
        }
        out
    }
}

/// Walk `head`'s chain, pairing each link with the nearest earlier link (or
/// the head) that contains it.
fn collect_absorbed(head: &Inner, arena: &InnerArena, absorbed: &mut Vec<Absorbed>) {
    let mut seen: Vec<&Inner> = vec![head];
    for link in arena.chain(head) {
        let container = seen
            .iter()
            .rev()
            .find(|candidate| contains(&candidate.bytes, &link.bytes))
            .unwrap_or(&head);
        absorbed.push(Absorbed {
            id: link.id.clone(),
            container: container.id.clone(),
        });
        seen.push(link);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inner::InnerId;
    use crate::preprocess::reduce;

    #[test]
    fn test_words() {
        let report = Report {
            placements: vec![],
            chi_values: BTreeMap::new(),
            value: b"abcdefghijk".to_vec(),
            absorbed: vec![],
        };
        assert_eq!(report.words(5), "abcde fghij k");
        assert_eq!(report.words(11), "abcdefghijk");
        assert_eq!(report.words(0), "abcdefghijk");
    }

    #[test]
    fn test_words_count_bytes() {
        // "é" is two bytes; a word boundary may fall inside it.
        let report = Report {
            placements: vec![],
            chi_values: BTreeMap::new(),
            value: "aébc".as_bytes().to_vec(),
            absorbed: vec![],
        };
        assert_eq!(report.value.len(), 5);
        assert_eq!(report.words(2), "a\u{FFFD} \u{FFFD}b c");
        assert_eq!(report.words(1), "a \u{FFFD} \u{FFFD} b c");
        assert_eq!(report.words(3), "aé bc");
    }

    #[test]
    fn test_render_full() {
        let mut arena = InnerArena::new(vec![
            Inner::new("first", "ABCDE").with_chi("fire", 2),
            Inner::new("second", "DEFGH").with_chi("fire", 1),
            Inner::new("third", "BC").with_chi("water", 5),
            Inner::new("fourth", "GH").with_chi("water", 1),
            Inner::new("plain", "CD"),
        ]);
        let reduced = reduce(&mut arena);
        let inners = arena.select(&reduced);
        assert_eq!(inners.len(), 2);

        let mut engine = crate::engine::SearchEngine::default();
        let best = engine.search_with_observer(&inners, 20, &mut ());
        let report = Report::new(&best, &inners, &arena);

        assert_eq!(best.value, b"ABCDEFGH");
        assert_eq!(
            report.render(5),
            "Inners: first at 0, second at 3\n\
             ABCDE FGH\n\
             Chi Values: +3fire\n\
             omitted inners (because they are part of other inners):\n\
             plain is part of first, third is part of first, fourth is part of second"
        );
    }

    #[test]
    fn test_chain_reports_real_container() {
        let mut arena = InnerArena::new(vec![
            Inner::new("abcdef", "ABCDEF"),
            Inner::new("bcde", "BCDE"),
            Inner::new("ef", "EF"),
            Inner::new("cd", "CD"),
        ]);
        let reduced = reduce(&mut arena);
        let inners = arena.select(&reduced);
        let result = MergedInners {
            inner_indices: vec![0],
            merge_pos: vec![0],
            value: b"ABCDEF".to_vec(),
        };
        let report = Report::new(&result, &inners, &arena);
        let pairs: Vec<(&str, &str)> = report
            .absorbed
            .iter()
            .map(|a| (a.id.as_str(), a.container.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("ef", "abcdef"), ("bcde", "abcdef"), ("cd", "bcde")]
        );
        assert_eq!(arena.get(InnerId::new(0)).contained, Some(InnerId::new(2)));
    }

    #[test]
    fn test_empty_result() {
        let arena = InnerArena::default();
        let report = Report::new(&MergedInners::default(), &[], &arena);
        assert_eq!(
            report.render(5),
            "Inners: \n\nChi Values: \nomitted inners (because they are part of other inners):\n"
        );
    }
}
