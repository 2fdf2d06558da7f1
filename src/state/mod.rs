// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - [`MergedInners`]: the merge accumulator built for each candidate ordering
//! - [`Statistics`]: counters gathered over a run

pub mod merged;
pub mod statistics;

pub use merged::MergedInners;
pub use statistics::{Counters, Statistics};
