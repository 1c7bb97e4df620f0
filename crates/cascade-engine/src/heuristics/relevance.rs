//! Relevance-based seeding over a chosen subset of topics.

use std::collections::HashMap;
use std::hash::BuildHasher;

use cascade_core::types::NodeIdx;

use super::rank_by;
use crate::graph::{GraphModel, Hypergraph, NodeKey};

/// Relevance score per user: `R[u] = Σ |t| · r_t` over the selected topics
/// `t` that contain `u`.
///
/// Topics missing from the hypergraph are skipped; topics without a
/// relevance entry score zero. A topic listed twice counts twice.
pub fn relevance_scores<N, E, H>(
    graph: &Hypergraph<N, E>,
    topics: &[E],
    relevance: &HashMap<E, f64, H>,
) -> Vec<f64>
where
    N: NodeKey,
    E: NodeKey,
    H: BuildHasher,
{
    let mut scores = vec![0.0; graph.node_count()];
    for topic in topics {
        let Some(edge) = graph.edge_index(topic) else {
            continue;
        };
        let members = graph.members(edge);
        let weight = members.len() as f64 * relevance.get(topic).copied().unwrap_or(0.0);
        for &u in members {
            scores[u.index()] += weight;
        }
    }
    scores
}

/// Top `k` users by `|R[u]|`. Ties keep node index order.
pub fn relevance_seeds<N, E, H>(
    graph: &Hypergraph<N, E>,
    topics: &[E],
    relevance: &HashMap<E, f64, H>,
    k: usize,
) -> Vec<NodeIdx>
where
    N: NodeKey,
    E: NodeKey,
    H: BuildHasher,
{
    let scores = relevance_scores(graph, topics, relevance);
    let mut ranked = rank_by(scores.len(), |u| scores[u].abs());
    ranked.truncate(k);
    ranked
}
