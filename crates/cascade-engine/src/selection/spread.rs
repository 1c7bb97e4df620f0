//! The spread-function seam between simulators and selectors.

use std::sync::atomic::{AtomicU64, Ordering};

use cascade_core::types::NodeIdx;

use crate::diffusion::{DiffusionEngine, PolarityDiffusion};
use crate::graph::{GraphModel, NodeKey};
use crate::polarity::PolaritySource;

/// Anything that maps a seed set to an expected spread.
///
/// Selectors assume `spread(&[]) == 0` and that repeated calls with the
/// same seeds return the same value.
pub trait SpreadFunction: Sync {
    fn spread(&self, seeds: &[NodeIdx]) -> f64;
}

impl<F> SpreadFunction for F
where
    F: Fn(&[NodeIdx]) -> f64 + Sync,
{
    fn spread(&self, seeds: &[NodeIdx]) -> f64 {
        self(seeds)
    }
}

impl<G: GraphModel> SpreadFunction for DiffusionEngine<'_, G> {
    fn spread(&self, seeds: &[NodeIdx]) -> f64 {
        self.estimate_spread(seeds)
    }
}

impl<N, E, S> SpreadFunction for PolarityDiffusion<'_, N, E, S>
where
    N: NodeKey,
    E: NodeKey,
    S: PolaritySource<N, E> + ?Sized,
{
    fn spread(&self, seeds: &[NodeIdx]) -> f64 {
        self.estimate_spread(seeds)
    }
}

/// Counts evaluations of the wrapped spread function.
pub struct CountingSpread<'a, S: SpreadFunction + ?Sized> {
    inner: &'a S,
    calls: AtomicU64,
}

impl<'a, S: SpreadFunction + ?Sized> CountingSpread<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self {
            inner,
            calls: AtomicU64::new(0),
        }
    }

    pub fn evaluations(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Non-negative gain of adding `candidate` to `seeds`, given that
    /// `base` is the spread of `seeds`.
    pub fn marginal_gain(&self, seeds: &[NodeIdx], candidate: NodeIdx, base: f64) -> f64 {
        let mut with = Vec::with_capacity(seeds.len() + 1);
        with.extend_from_slice(seeds);
        with.push(candidate);
        (self.spread(&with) - base).max(0.0)
    }
}

impl<S: SpreadFunction + ?Sized> SpreadFunction for CountingSpread<'_, S> {
    fn spread(&self, seeds: &[NodeIdx]) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.spread(seeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_calls() {
        let size = |s: &[NodeIdx]| s.len() as f64;
        let counting = CountingSpread::new(&size);
        assert_eq!(counting.spread(&[NodeIdx::new(0)]), 1.0);
        assert_eq!(counting.marginal_gain(&[NodeIdx::new(0)], NodeIdx::new(1), 1.0), 1.0);
        assert_eq!(counting.evaluations(), 2);
    }

    #[test]
    fn test_marginal_gain_clamped() {
        let shrinking = |s: &[NodeIdx]| 10.0 - s.len() as f64;
        let counting = CountingSpread::new(&shrinking);
        assert_eq!(counting.marginal_gain(&[], NodeIdx::new(0), 10.0), 0.0);
    }
}
