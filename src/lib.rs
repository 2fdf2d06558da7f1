// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for the shortest string containing a set of inners.
//!
//! Given up to 21 named strings ("inners"), the search tries every ordering,
//! greedily overlaps each inner onto the tail of the running result, and keeps
//! the shortest result that fits a maximum size.
//!
//! # Architecture
//!
//! The pipeline runs in three stages:
//!
//! 1. **Configuration** ([`config`]): parse and validate the YAML document,
//!    then move the inners into an [`InnerArena`].
//! 2. **Preprocessing** ([`preprocess`]): drop inners contained in other
//!    inners, linking them into containment chains for the report.
//! 3. **Search** ([`engine`]): enumerate all `N!` permutations of the
//!    remaining inners, building a [`MergedInners`] for each and keeping the
//!    best one.
//!
//! The [`report`] module renders the best merge for humans.
//!
//! ## Memoization
//!
//! The overlap offset of an ordered pair of inners does not depend on the
//! permutation, so the engine memoizes it ([`memo`]). The cache is owned by
//! the engine for one run and can be swapped for a pass-through
//! implementation; both give identical results.
//!
//! # Example
//!
//! ```
//! use superstring_search::{preprocess, InnerArena, Inner, Report, SearchEngine};
//!
//! let mut arena = InnerArena::new(vec![
//!     Inner::new("a", "abc"),
//!     Inner::new("b", "bcd"),
//!     Inner::new("c", "cd"),
//! ]);
//! let reduced = preprocess::reduce(&mut arena);
//! let inners = arena.select(&reduced);
//!
//! let best = SearchEngine::default().search(&inners, 10);
//! assert_eq!(best.value, b"abcd");
//!
//! let report = Report::new(&best, &inners, &arena);
//! assert_eq!(report.absorbed[0].id, "c");
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod inner;
pub mod memo;
pub mod preprocess;
pub mod report;
pub mod state;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use engine::{SearchEngine, SearchObserver};
pub use inner::{Inner, InnerArena, InnerId};
pub use report::Report;
pub use state::{MergedInners, Statistics};
