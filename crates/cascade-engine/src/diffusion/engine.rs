//! Monte-Carlo spread estimator over a graph model.

use cascade_core::config::DiffusionConfig;
use cascade_core::errors::DiffusionError;
use cascade_core::types::NodeIdx;
use rayon::prelude::*;

use super::types::{DiffusionModel, DiffusionParams, SpreadStats};
use super::{independent_cascade, linear_threshold};
use crate::graph::GraphModel;

/// Estimates expected spread for seed sets under IC or LT.
///
/// The engine borrows the graph for its lifetime; the graph cannot change
/// while estimates are being drawn.
#[derive(Debug)]
pub struct DiffusionEngine<'g, G: GraphModel> {
    graph: &'g G,
    params: DiffusionParams,
}

impl<'g, G: GraphModel> DiffusionEngine<'g, G> {
    pub fn new(graph: &'g G, params: DiffusionParams) -> Result<Self, DiffusionError> {
        params.validate()?;
        Ok(Self { graph, params })
    }

    pub fn from_config(graph: &'g G, config: &DiffusionConfig) -> Result<Self, DiffusionError> {
        Self::new(graph, DiffusionParams::from_config(config)?)
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn params(&self) -> &DiffusionParams {
        &self.params
    }

    /// Mean final active-set size over `mc` trials.
    pub fn estimate_spread(&self, seeds: &[NodeIdx]) -> f64 {
        self.simulate(seeds).mean
    }

    /// Run all trials and summarise their outcomes.
    ///
    /// Repeated seeds count once. An empty seed set spreads to nobody.
    pub fn simulate(&self, seeds: &[NodeIdx]) -> SpreadStats {
        let seeds = normalize_seeds(seeds, self.graph.node_count());
        let mc = self.params.mc;
        if seeds.is_empty() {
            return SpreadStats::constant(0, mc);
        }

        let outcomes: Vec<usize> = if self.params.parallel {
            (0..mc)
                .into_par_iter()
                .map(|trial| self.run_trial(&seeds, trial))
                .collect()
        } else {
            (0..mc).map(|trial| self.run_trial(&seeds, trial)).collect()
        };
        let stats = SpreadStats::from_outcomes(&outcomes);

        tracing::trace!(
            model = self.params.model.name(),
            seeds = seeds.len(),
            trials = mc,
            mean = stats.mean,
            "spread estimated"
        );
        stats
    }

    /// Spread estimate for seeds given as node keys.
    pub fn spread_of(&self, keys: &[G::Node]) -> Result<f64, DiffusionError> {
        let seeds = keys
            .iter()
            .map(|key| {
                self.graph
                    .index_of(key)
                    .ok_or_else(|| DiffusionError::UnknownSeed {
                        node: format!("{key:?}"),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.estimate_spread(&seeds))
    }

    /// One trial. `sorted_seeds` must be sorted, deduplicated, and in range.
    pub fn run_trial(&self, sorted_seeds: &[NodeIdx], trial: u32) -> usize {
        let mut rng = self.params.streams.trial_rng(trial, sorted_seeds);
        match self.params.model {
            DiffusionModel::IndependentCascade { p } => {
                independent_cascade::run_trial(self.graph, sorted_seeds, p, &mut rng)
            }
            DiffusionModel::LinearThreshold { low, high } => {
                linear_threshold::run_trial(self.graph, sorted_seeds, low, high, &mut rng)
            }
        }
    }
}

/// Sort and deduplicate a seed set, dropping indices outside the graph.
pub(crate) fn normalize_seeds(seeds: &[NodeIdx], node_count: usize) -> Vec<NodeIdx> {
    let mut out: Vec<NodeIdx> = Vec::with_capacity(seeds.len());
    for &s in seeds {
        if s.index() < node_count {
            out.push(s);
        } else {
            tracing::warn!(seed = %s, node_count, "dropping seed outside the graph");
        }
    }
    out.sort_unstable();
    out.dedup();
    out
}
