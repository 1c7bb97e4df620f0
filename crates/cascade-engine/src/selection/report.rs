//! Per-round reports and the final selection result.

use std::time::{Duration, Instant};

use cascade_core::config::SelectionAlgorithm;
use cascade_core::types::NodeIdx;
use serde::{Deserialize, Serialize};

use super::observer::SelectionObserver;
use crate::graph::GraphModel;

/// What one selection round produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Zero-based round number.
    pub round: usize,
    /// The accepted seed. `None` when no candidate had a positive gain.
    pub seed: Option<NodeIdx>,
    pub marginal_gain: f64,
    pub cumulative_spread: f64,
    /// Full marginal-gain recomputations spent this round.
    pub lookups: usize,
    /// Wall-clock time since selection started.
    pub elapsed: Duration,
}

/// Output of one selection run.
///
/// The per-round vectors are parallel: entry `i` describes round `i`.
/// `seeds` can be shorter than the round vectors when a round found no
/// candidate with a positive gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub algorithm: SelectionAlgorithm,
    /// Seeds in selection order.
    pub seeds: Vec<NodeIdx>,
    pub gains: Vec<f64>,
    pub cumulative: Vec<f64>,
    pub elapsed: Vec<Duration>,
    pub lookups: Vec<usize>,
    /// Spread-function calls made by the run.
    pub evaluations: u64,
    /// Final cumulative expected spread.
    pub total_spread: f64,
}

impl SelectionResult {
    pub fn rounds(&self) -> usize {
        self.gains.len()
    }

    /// Seeds as caller keys.
    pub fn seed_keys<G: GraphModel>(&self, graph: &G) -> Vec<G::Node> {
        graph.keys(&self.seeds)
    }

    pub fn total_elapsed(&self) -> Duration {
        self.elapsed.last().copied().unwrap_or_default()
    }
}

/// Accumulates rounds, logs them, and notifies the observer.
pub(crate) struct RoundRecorder<'o> {
    started: Instant,
    observer: Option<&'o dyn SelectionObserver>,
    result: SelectionResult,
}

impl<'o> RoundRecorder<'o> {
    pub(crate) fn new(
        algorithm: SelectionAlgorithm,
        budget: usize,
        observer: Option<&'o dyn SelectionObserver>,
    ) -> Self {
        Self {
            started: Instant::now(),
            observer,
            result: SelectionResult {
                algorithm,
                seeds: Vec::with_capacity(budget),
                gains: Vec::with_capacity(budget),
                cumulative: Vec::with_capacity(budget),
                elapsed: Vec::with_capacity(budget),
                lookups: Vec::with_capacity(budget),
                evaluations: 0,
                total_spread: 0.0,
            },
        }
    }

    pub(crate) fn seeds(&self) -> &[NodeIdx] {
        &self.result.seeds
    }

    /// Spread of the current seed set, as accumulated from accepted gains.
    pub(crate) fn cumulative(&self) -> f64 {
        self.result.total_spread
    }

    pub(crate) fn record(&mut self, seed: Option<NodeIdx>, marginal_gain: f64, lookups: usize) {
        let round = self.result.gains.len();
        if let Some(s) = seed {
            self.result.seeds.push(s);
            self.result.total_spread += marginal_gain;
        }
        let elapsed = self.started.elapsed();
        let cumulative_spread = self.result.total_spread;
        self.result.gains.push(marginal_gain);
        self.result.cumulative.push(cumulative_spread);
        self.result.elapsed.push(elapsed);
        self.result.lookups.push(lookups);

        match seed {
            Some(node) => tracing::debug!(
                algorithm = self.result.algorithm.name(),
                round,
                node = %node,
                marginal_gain,
                cumulative_spread,
                lookups,
                elapsed_ms = elapsed.as_millis() as u64,
                "seed selected"
            ),
            None => tracing::debug!(
                algorithm = self.result.algorithm.name(),
                round,
                lookups,
                elapsed_ms = elapsed.as_millis() as u64,
                "no candidate with positive gain"
            ),
        }

        if let Some(observer) = self.observer {
            observer.on_seed_selected(&RoundReport {
                round,
                seed,
                marginal_gain,
                cumulative_spread,
                lookups,
                elapsed,
            });
        }
    }

    /// Record this round and every later one up to `k` as empty. Once no
    /// candidate has a positive gain the seed set stops changing, so later
    /// rounds cannot find one either.
    pub(crate) fn exhaust(&mut self, lookups: usize, k: usize) {
        self.record(None, 0.0, lookups);
        while self.result.gains.len() < k {
            self.record(None, 0.0, 0);
        }
    }

    pub(crate) fn finish(mut self, evaluations: u64) -> SelectionResult {
        self.result.evaluations = evaluations;
        let elapsed = self.started.elapsed();
        tracing::info!(
            algorithm = self.result.algorithm.name(),
            seeds = self.result.seeds.len(),
            cumulative_spread = self.result.total_spread,
            evaluations,
            elapsed_ms = elapsed.as_millis() as u64,
            "seed selection complete"
        );
        if let Some(observer) = self.observer {
            observer.on_selection_complete(&self.result);
        }
        self.result
    }
}
