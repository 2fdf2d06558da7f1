// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Inners: the named strings that must all appear in the result.
//!
//! Inners are created once from configuration and live in an [`InnerArena`].
//! The only mutation after creation is the containment link set by the
//! preprocessor, which is an index into the same arena.
//!
//! # Containment chains
//!
//! When an inner is a substring of another one, it is removed from the search
//! and hung off its container. Several contained inners form a singly linked
//! chain, largest first:
//!
//! ```text
//! ABCDEF -> BCDE -> CD
//! ```
//!
//! Every link is contained in the head. A link may sit after a sibling that
//! does not contain it, so reports look back along the chain for the nearest
//! link that does.

pub mod overlap;

pub use overlap::{contains, overlap_offset};

/// Index of an inner within its [`InnerArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InnerId(usize);

impl InnerId {
    /// Create an id from a raw arena index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw arena index.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One named input string plus its reporting metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inner {
    /// Identifier used in reports.
    pub id: String,

    /// Free text, reporting only.
    pub comment: String,

    /// Category label; empty when the inner has no category.
    pub chi_type: String,

    /// Weight added to the `chi_type` total when the inner is included.
    pub chi_value: i64,

    /// The string content.
    pub bytes: Vec<u8>,

    /// Next (smaller) inner in this inner's containment chain.
    pub contained: Option<InnerId>,
}

impl Inner {
    /// Create an inner with the given id and content and no category.
    pub fn new(id: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        Self {
            id: id.into(),
            bytes: value.as_ref().to_vec(),
            ..Self::default()
        }
    }

    /// Attach a category label and weight.
    pub fn with_chi(mut self, chi_type: impl Into<String>, chi_value: i64) -> Self {
        self.chi_type = chi_type.into();
        self.chi_value = chi_value;
        self
    }

    /// Attach a comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Length of the content in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the content is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Flat storage for all inners of one run, addressed by [`InnerId`].
#[derive(Debug, Clone, Default)]
pub struct InnerArena {
    inners: Vec<Inner>,
}

impl InnerArena {
    /// Create an arena holding `inners` in the given order.
    pub fn new(inners: Vec<Inner>) -> Self {
        Self { inners }
    }

    /// Get an inner by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this arena.
    pub fn get(&self, id: InnerId) -> &Inner {
        &self.inners[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: InnerId) -> &mut Inner {
        &mut self.inners[id.index()]
    }

    /// Number of inners, absorbed ones included.
    pub fn len(&self) -> usize {
        self.inners.len()
    }

    /// Check whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.inners.is_empty()
    }

    /// Iterate over all ids in arena order.
    pub fn ids(&self) -> impl Iterator<Item = InnerId> {
        (0..self.inners.len()).map(InnerId::new)
    }

    /// Resolve a list of ids to inner references, keeping the order.
    pub fn select(&self, ids: &[InnerId]) -> Vec<&Inner> {
        ids.iter().map(|&id| self.get(id)).collect()
    }

    /// Walk the containment chain hanging off `inner`, excluding `inner` itself.
    pub fn chain<'a>(&'a self, inner: &'a Inner) -> Chain<'a> {
        Chain {
            arena: self,
            next: inner.contained,
        }
    }
}

/// Iterator over a containment chain, in chain order.
#[derive(Debug)]
pub struct Chain<'a> {
    arena: &'a InnerArena,
    next: Option<InnerId>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Inner;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let inner = self.arena.get(id);
        self.next = inner.contained;
        Some(inner)
    }
}
