//! Simulation-free seed rankings for hypergraphs.
//!
//! These run in time linear in the incidence structure and are useful as
//! baselines against the greedy selectors or as candidate pre-filters.

pub mod hyperdegree;
pub mod relevance;

pub use hyperdegree::hyperdegree_seeds;
pub use relevance::{relevance_scores, relevance_seeds};

use cascade_core::types::NodeIdx;

/// Indices `0..scores.len()` ordered by descending score, stable on ties.
pub(crate) fn rank_by<F>(count: usize, score: F) -> Vec<NodeIdx>
where
    F: Fn(usize) -> f64,
{
    let scores: Vec<f64> = (0..count).map(&score).collect();
    let mut order: Vec<NodeIdx> = (0..count).map(NodeIdx::new).collect();
    order.sort_by(|a, b| scores[b.index()].total_cmp(&scores[a.index()]));
    order
}
