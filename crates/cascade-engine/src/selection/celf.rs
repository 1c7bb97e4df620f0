//! CELF lazy greedy selection.

use cascade_core::types::NodeIdx;
use rayon::prelude::*;

use super::lazy_queue::{LazyQueue, QueueRecord};
use super::report::RoundRecorder;
use super::selector::slot_count;
use super::spread::{CountingSpread, SpreadFunction};

/// Singleton spread of every candidate, in candidate order.
pub(crate) fn singleton_gains<S: SpreadFunction + ?Sized>(
    spread: &CountingSpread<'_, S>,
    candidates: &[NodeIdx],
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        candidates
            .par_iter()
            .map(|&c| spread.marginal_gain(&[], c, 0.0))
            .collect()
    } else {
        candidates
            .iter()
            .map(|&c| spread.marginal_gain(&[], c, 0.0))
            .collect()
    }
}

/// Cached gains only ever overestimate the true marginal gain, so a stale
/// top is refreshed and re-ranked until a fresh record surfaces; that record
/// is the round's best. A best gain that is not positive ends selection the
/// way it does for naive greedy.
pub(crate) fn run<S: SpreadFunction + ?Sized>(
    spread: &CountingSpread<'_, S>,
    candidates: &[NodeIdx],
    k: usize,
    parallel: bool,
    recorder: &mut RoundRecorder<'_>,
) {
    let mut queue = LazyQueue::with_capacity(slot_count(candidates));
    for (&c, gain) in candidates.iter().zip(singleton_gains(spread, candidates, parallel)) {
        queue.push(QueueRecord::new(c, gain, 0));
    }

    // Round 0 is charged with the initial singleton evaluations.
    let mut lookups = candidates.len();
    for _ in 0..k {
        let generation = recorder.seeds().len();
        while let Some(top) = queue.peek().copied() {
            if top.is_fresh(generation) {
                break;
            }
            let gain = spread.marginal_gain(recorder.seeds(), top.node, recorder.cumulative());
            lookups += 1;
            queue.update(top.node, gain, generation);
        }

        let Some(best) = queue.pop() else {
            break;
        };
        if best.gain <= 0.0 {
            recorder.exhaust(lookups, k);
            break;
        }
        recorder.record(Some(best.node), best.gain, lookups);
        lookups = 0;
    }
}
