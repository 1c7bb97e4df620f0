//! Polarity-aware diffusion on hypergraphs.

use std::collections::VecDeque;

use cascade_core::config::DiffusionConfig;
use cascade_core::errors::DiffusionError;
use cascade_core::types::NodeIdx;
use rand::Rng;
use rayon::prelude::*;

use super::engine::normalize_seeds;
use super::streams::RandomStreams;
use super::types::SpreadStats;
use crate::graph::{GraphModel, Hypergraph, NodeKey};
use crate::polarity::{polarity_matches, PolaritySource};

/// Breadth-first polarity-aware activation from `seeds`.
///
/// For each dequeued active user `u`, every inactive co-member `v` of every
/// hyperedge `e` containing `u` activates outright when `u` and `v` hold the
/// same polarity on `e` (two absent polarities agree), and otherwise with
/// probability `1 - theta`. Returns the activated users in activation
/// order, seeds first.
pub fn polarity_aware_diffusion<N, E, S, R>(
    graph: &Hypergraph<N, E>,
    seeds: &[NodeIdx],
    source: &S,
    theta: f64,
    rng: &mut R,
) -> Vec<NodeIdx>
where
    N: NodeKey,
    E: NodeKey,
    S: PolaritySource<N, E> + ?Sized,
    R: Rng + ?Sized,
{
    let mut active = vec![false; graph.node_count()];
    let mut activated = Vec::with_capacity(seeds.len());
    let mut queue = VecDeque::with_capacity(seeds.len());
    for &s in seeds {
        if !active[s.index()] {
            active[s.index()] = true;
            activated.push(s);
            queue.push_back(s);
        }
    }

    while let Some(u) = queue.pop_front() {
        let user = graph.node(u);
        for e in graph.incident_edges(u) {
            let edge = graph.edge_name(e);
            for &v in graph.members(e) {
                if active[v.index()] {
                    continue;
                }
                let agrees = polarity_matches(source, user, graph.node(v), edge);
                if agrees || rng.gen::<f64>() > theta {
                    active[v.index()] = true;
                    activated.push(v);
                    queue.push_back(v);
                }
            }
        }
    }

    activated
}

/// Monte-Carlo wrapper around [`polarity_aware_diffusion`].
///
/// With the default single trial this is one reproducible run per call.
pub struct PolarityDiffusion<'g, N: NodeKey, E: NodeKey, S: ?Sized> {
    graph: &'g Hypergraph<N, E>,
    source: &'g S,
    theta: f64,
    mc: u32,
    streams: RandomStreams,
    parallel: bool,
}

impl<'g, N, E, S> PolarityDiffusion<'g, N, E, S>
where
    N: NodeKey,
    E: NodeKey,
    S: PolaritySource<N, E> + ?Sized,
{
    pub fn new(graph: &'g Hypergraph<N, E>, source: &'g S, theta: f64) -> Result<Self, DiffusionError> {
        if !(0.0..=1.0).contains(&theta) {
            return Err(DiffusionError::InvalidTheta { theta });
        }
        Ok(Self {
            graph,
            source,
            theta,
            mc: 1,
            streams: RandomStreams::default(),
            parallel: false,
        })
    }

    /// Take `theta`, `mc`, streams and parallelism from a config.
    pub fn from_config(
        graph: &'g Hypergraph<N, E>,
        source: &'g S,
        config: &DiffusionConfig,
    ) -> Result<Self, DiffusionError> {
        Ok(Self::new(graph, source, config.effective_theta())?
            .with_trials(config.effective_mc())?
            .with_streams(RandomStreams::from_policy(
                config.effective_streams(),
                config.effective_base_seed(),
            ))
            .with_parallel(config.effective_parallel()))
    }

    pub fn with_trials(mut self, mc: u32) -> Result<Self, DiffusionError> {
        if mc == 0 {
            return Err(DiffusionError::ZeroTrials);
        }
        self.mc = mc;
        Ok(self)
    }

    pub fn with_streams(mut self, streams: RandomStreams) -> Self {
        self.streams = streams;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn graph(&self) -> &'g Hypergraph<N, E> {
        self.graph
    }

    /// Activated users for one trial.
    pub fn activate(&self, seeds: &[NodeIdx], trial: u32) -> Vec<NodeIdx> {
        let seeds = normalize_seeds(seeds, self.graph.node_count());
        let mut rng = self.streams.trial_rng(trial, &seeds);
        polarity_aware_diffusion(self.graph, &seeds, self.source, self.theta, &mut rng)
    }

    pub fn estimate_spread(&self, seeds: &[NodeIdx]) -> f64 {
        self.simulate(seeds).mean
    }

    pub fn simulate(&self, seeds: &[NodeIdx]) -> SpreadStats {
        let seeds = normalize_seeds(seeds, self.graph.node_count());
        if seeds.is_empty() {
            return SpreadStats::constant(0, self.mc);
        }
        let trial = |t: u32| {
            let mut rng = self.streams.trial_rng(t, &seeds);
            polarity_aware_diffusion(self.graph, &seeds, self.source, self.theta, &mut rng).len()
        };
        let outcomes: Vec<usize> = if self.parallel {
            (0..self.mc).into_par_iter().map(trial).collect()
        } else {
            (0..self.mc).map(trial).collect()
        };
        let stats = SpreadStats::from_outcomes(&outcomes);
        tracing::trace!(
            model = "polarity",
            seeds = seeds.len(),
            trials = self.mc,
            mean = stats.mean,
            "spread estimated"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polarity::PolarityTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn overlapping() -> Hypergraph<u32, &'static str> {
        Hypergraph::from_edges([("A", vec![1, 2, 3]), ("B", vec![3, 4, 5])]).unwrap()
    }

    fn keys(h: &Hypergraph<u32, &'static str>, idx: &[NodeIdx]) -> Vec<u32> {
        let mut k = h.keys(idx);
        k.sort();
        k
    }

    #[test]
    fn test_unlabelled_pairs_spread_everywhere() {
        let h = overlapping();
        let none = |_: &u32, _: &&str| Option::<i8>::None;
        let mut rng = StdRng::seed_from_u64(0);
        let seeds = [h.index_of(&1).unwrap()];
        let active = polarity_aware_diffusion(&h, &seeds, &none, 1.0, &mut rng);
        assert_eq!(keys(&h, &active), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_absent_polarity_blocks_labelled_member_at_theta_one() {
        let h = overlapping();
        let only_three = |u: &u32, _: &&str| if *u == 3 { Some(1i8) } else { None };
        let mut rng = StdRng::seed_from_u64(0);
        let seeds = [h.index_of(&1).unwrap()];
        let active = polarity_aware_diffusion(&h, &seeds, &only_three, 1.0, &mut rng);
        assert_eq!(keys(&h, &active), vec![1, 2]);
    }

    #[test]
    fn test_theta_zero_crosses_disagreement() {
        let h = overlapping();
        let mut table = PolarityTable::new();
        table.insert(1u32, "A", 1i8).insert(2, "A", -1).insert(3, "A", -1);
        let mut rng = StdRng::seed_from_u64(3);
        let seeds = [h.index_of(&1).unwrap()];
        let active = polarity_aware_diffusion(&h, &seeds, &table, 0.0, &mut rng);
        assert_eq!(active.len(), 5);
    }

    #[test]
    fn test_theta_validated() {
        let h = overlapping();
        let none = |_: &u32, _: &&str| Option::<i8>::None;
        assert!(PolarityDiffusion::new(&h, &none, 1.5).is_err());
        let err = PolarityDiffusion::new(&h, &none, 0.5)
            .unwrap()
            .with_trials(0)
            .err();
        assert!(matches!(err, Some(DiffusionError::ZeroTrials)));
    }

    #[test]
    fn test_activation_is_reproducible_per_trial() {
        let h = overlapping();
        let sign = |u: &u32, _: &&str| Some(u % 2 == 0);
        let diffusion = PolarityDiffusion::new(&h, &sign, 0.5).unwrap();
        let seeds = [h.index_of(&1).unwrap()];
        assert_eq!(diffusion.activate(&seeds, 4), diffusion.activate(&seeds, 4));
    }
}
