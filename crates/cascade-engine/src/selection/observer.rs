//! Selection progress callbacks.

use super::report::{RoundReport, SelectionResult};

/// Receives selection progress as it happens.
///
/// Both methods have no-op defaults, so observers only override what they
/// need. `Send + Sync` so one observer can watch runs on several threads.
pub trait SelectionObserver: Send + Sync {
    /// Called once per round, after the round's seed (if any) is accepted.
    fn on_seed_selected(&self, _report: &RoundReport) {}

    /// Called once when the run finishes.
    fn on_selection_complete(&self, _result: &SelectionResult) {}
}
