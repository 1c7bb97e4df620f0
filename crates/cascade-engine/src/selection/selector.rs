//! Seed selection front end.

use cascade_core::config::{CascadeConfig, SelectionAlgorithm};
use cascade_core::errors::SelectionError;
use cascade_core::types::NodeIdx;

use super::observer::SelectionObserver;
use super::report::{RoundRecorder, SelectionResult};
use super::spread::{CountingSpread, SpreadFunction};
use super::{celf, celf_pp, greedy};
use crate::diffusion::DiffusionEngine;
use crate::graph::GraphModel;

/// Picks up to `k` seeds from a candidate set by maximising a spread
/// function.
///
/// ```ignore
/// let engine = DiffusionEngine::new(&graph, DiffusionParams::ic(0.1))?;
/// let result = SeedSelector::new(&graph, &engine).celf(4);
/// ```
pub struct SeedSelector<'a, S: SpreadFunction + ?Sized> {
    spread: &'a S,
    candidates: Vec<NodeIdx>,
    parallel: bool,
    observer: Option<&'a dyn SelectionObserver>,
}

impl<'a, S: SpreadFunction + ?Sized> SeedSelector<'a, S> {
    /// Every node of `graph` is a candidate.
    pub fn new<G: GraphModel>(graph: &G, spread: &'a S) -> Self {
        Self::with_candidates(spread, graph.nodes())
    }

    /// Restrict selection to `candidates`. Duplicates collapse.
    pub fn with_candidates<I>(spread: &'a S, candidates: I) -> Self
    where
        I: IntoIterator<Item = NodeIdx>,
    {
        let mut candidates: Vec<NodeIdx> = candidates.into_iter().collect();
        candidates.sort_unstable();
        candidates.dedup();
        Self {
            spread,
            candidates,
            parallel: false,
            observer: None,
        }
    }

    /// Evaluate naive-greedy candidates (and initial singleton gains) on
    /// the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn observer(mut self, observer: &'a dyn SelectionObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn candidates(&self) -> &[NodeIdx] {
        &self.candidates
    }

    /// Run `algorithm` with budget `k`. `k == 0` or no candidates yields an
    /// empty result; a budget above the candidate count stops early.
    pub fn select(&self, algorithm: SelectionAlgorithm, k: usize) -> SelectionResult {
        let spread = CountingSpread::new(self.spread);
        let mut recorder = RoundRecorder::new(algorithm, k.min(self.candidates.len()), self.observer);

        tracing::debug!(
            algorithm = algorithm.name(),
            k,
            candidates = self.candidates.len(),
            parallel = self.parallel,
            "seed selection started"
        );

        if k > 0 && !self.candidates.is_empty() {
            let (cands, parallel) = (&self.candidates[..], self.parallel);
            match algorithm {
                SelectionAlgorithm::Greedy => greedy::run(&spread, cands, k, parallel, &mut recorder),
                SelectionAlgorithm::Celf => celf::run(&spread, cands, k, parallel, &mut recorder),
                SelectionAlgorithm::CelfPlusPlus => {
                    celf_pp::run(&spread, cands, k, parallel, &mut recorder)
                }
            }
        }

        recorder.finish(spread.evaluations())
    }

    pub fn greedy(&self, k: usize) -> SelectionResult {
        self.select(SelectionAlgorithm::Greedy, k)
    }

    pub fn celf(&self, k: usize) -> SelectionResult {
        self.select(SelectionAlgorithm::Celf, k)
    }

    pub fn celf_pp(&self, k: usize) -> SelectionResult {
        self.select(SelectionAlgorithm::CelfPlusPlus, k)
    }
}

/// Build a diffusion engine from `config` and run the configured algorithm
/// and budget over every node of `graph`.
pub fn select_from_config<G: GraphModel>(
    graph: &G,
    config: &CascadeConfig,
) -> Result<SelectionResult, SelectionError> {
    CascadeConfig::validate(config)?;
    let engine = DiffusionEngine::from_config(graph, &config.diffusion)?;
    let selector = SeedSelector::new(graph, &engine).parallel(config.diffusion.effective_parallel());
    Ok(selector.select(
        config.selection.effective_algorithm(),
        config.selection.effective_k(),
    ))
}

/// Length of a per-node arena covering every candidate index.
pub(crate) fn slot_count(candidates: &[NodeIdx]) -> usize {
    candidates.iter().map(|c| c.index() + 1).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DiGraphView;

    #[test]
    fn test_slot_count() {
        assert_eq!(slot_count(&[]), 0);
        assert_eq!(slot_count(&[NodeIdx::new(4), NodeIdx::new(1)]), 5);
    }

    #[test]
    fn test_candidates_deduplicated() {
        let f = |s: &[NodeIdx]| s.len() as f64;
        let sel = SeedSelector::with_candidates(&f, [NodeIdx::new(2), NodeIdx::new(0), NodeIdx::new(2)]);
        assert_eq!(sel.candidates(), &[NodeIdx::new(0), NodeIdx::new(2)]);
    }

    #[test]
    fn test_select_from_config() {
        let g = DiGraphView::from_edges([(0u32, 1), (0, 2), (0, 3), (4, 0)]);
        let config = CascadeConfig::from_toml(
            "[diffusion]\np = 1.0\nmc = 1\n\n[selection]\nk = 1\nalgorithm = \"celf_pp\"\n",
        )
        .unwrap();
        let result = select_from_config(&g, &config).unwrap();
        assert_eq!(result.seed_keys(&g), vec![4]);
        assert_eq!(result.total_spread, 5.0);
    }

    #[test]
    fn test_select_from_config_rejects_invalid() {
        let g = DiGraphView::from_edges([(0u32, 1)]);
        let mut config = CascadeConfig::default();
        config.diffusion.p = Some(3.0);
        assert!(select_from_config(&g, &config).is_err());
    }
}
