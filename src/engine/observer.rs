// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Notifications emitted while the search runs.

use tracing::info;

use crate::inner::Inner;
use crate::state::MergedInners;

/// Receives search notifications.
///
/// Both methods default to doing nothing; `()` is the silent observer.
pub trait SearchObserver {
    /// A new shortest result was found.
    #[allow(unused)]
    fn on_new_result(&mut self, result: &MergedInners, inners: &[&Inner]) {}

    /// The integer percentage of permutations processed changed.
    #[allow(unused)]
    fn on_progress(&mut self, percent: u32) {}
}

impl SearchObserver for () {}

/// Logs notifications through `tracing`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn on_new_result(&mut self, result: &MergedInners, inners: &[&Inner]) {
        let ids: Vec<&str> = result
            .inner_indices
            .iter()
            .map(|&index| inners[index].id.as_str())
            .collect();
        info!(
            size = result.len(),
            value = %String::from_utf8_lossy(&result.value),
            inners = ?ids,
            "new result"
        );
    }

    fn on_progress(&mut self, percent: u32) {
        info!("{}% done", percent);
    }
}
