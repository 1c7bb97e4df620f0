//! Naive greedy selection.

use cascade_core::types::NodeIdx;
use rayon::prelude::*;

use super::report::RoundRecorder;
use super::selector::slot_count;
use super::spread::{CountingSpread, SpreadFunction};

/// Each round evaluates every remaining candidate against the current seed
/// set and keeps the first strictly greatest gain in candidate order.
///
/// A round whose best gain is not positive adds no seed. It and every
/// later round record a gain of zero.
pub(crate) fn run<S: SpreadFunction + ?Sized>(
    spread: &CountingSpread<'_, S>,
    candidates: &[NodeIdx],
    k: usize,
    parallel: bool,
    recorder: &mut RoundRecorder<'_>,
) {
    let mut chosen = vec![false; slot_count(candidates)];

    for _ in 0..k {
        let remaining: Vec<NodeIdx> = candidates
            .iter()
            .copied()
            .filter(|c| !chosen[c.index()])
            .collect();
        if remaining.is_empty() {
            break;
        }

        let base = recorder.cumulative();
        let seeds = recorder.seeds().to_vec();
        let gains: Vec<f64> = if parallel {
            remaining
                .par_iter()
                .map(|&c| spread.marginal_gain(&seeds, c, base))
                .collect()
        } else {
            remaining
                .iter()
                .map(|&c| spread.marginal_gain(&seeds, c, base))
                .collect()
        };

        let mut best: Option<NodeIdx> = None;
        let mut best_gain = 0.0;
        for (&c, &gain) in remaining.iter().zip(&gains) {
            if gain > best_gain {
                best_gain = gain;
                best = Some(c);
            }
        }

        match best {
            Some(node) => {
                chosen[node.index()] = true;
                recorder.record(Some(node), best_gain, remaining.len());
            }
            None => {
                recorder.exhaust(remaining.len(), k);
                break;
            }
        }
    }
}
