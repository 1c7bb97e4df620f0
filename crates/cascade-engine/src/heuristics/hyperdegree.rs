//! Opinion-based seeding: users in the most hyperedges first.

use cascade_core::types::NodeIdx;

use super::rank_by;
use crate::graph::{GraphModel, Hypergraph, NodeKey};

/// Top `k` users by hyperdegree. Ties keep node index order.
pub fn hyperdegree_seeds<N: NodeKey, E: NodeKey>(graph: &Hypergraph<N, E>, k: usize) -> Vec<NodeIdx> {
    let mut ranked = rank_by(graph.node_count(), |u| graph.hyperdegree(NodeIdx::new(u)) as f64);
    ranked.truncate(k);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_connected_first() {
        let h = Hypergraph::from_edges([
            ("A", vec!["ann", "bob"]),
            ("B", vec!["bob", "cat"]),
            ("C", vec!["bob", "cat", "dan"]),
        ])
        .unwrap();
        let seeds = h.keys(&hyperdegree_seeds(&h, 2));
        assert_eq!(seeds, vec!["bob", "cat"]);
    }

    #[test]
    fn test_budget_larger_than_users() {
        let h = Hypergraph::from_edges([("A", vec![1u32, 2])]).unwrap();
        assert_eq!(hyperdegree_seeds(&h, 10).len(), 2);
        assert!(hyperdegree_seeds(&h, 0).is_empty());
    }
}
