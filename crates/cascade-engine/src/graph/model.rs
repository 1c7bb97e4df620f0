//! The `GraphModel` trait shared by plain graphs and hypergraphs.

use std::fmt::Debug;
use std::hash::Hash;

use cascade_core::errors::GraphError;
use cascade_core::types::{EdgeIdx, NodeIdx};

/// Requirements on caller-supplied node and hyperedge keys.
pub trait NodeKey: Clone + Eq + Hash + Ord + Debug + Send + Sync + 'static {}

impl<T> NodeKey for T where T: Clone + Eq + Hash + Ord + Debug + Send + Sync + 'static {}

/// Which structural variant a model is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Pairwise directed edges `u -> v`.
    Directed,
    /// Named hyperedges over unordered member sets.
    Hypergraph,
}

impl GraphKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Hypergraph => "hypergraph",
        }
    }
}

/// Read-only view over an immutable graph structure.
///
/// Nodes are interned into dense [`NodeIdx`] values `0..node_count()` in
/// insertion order. Edges are likewise dense [`EdgeIdx`] values. The two
/// propagation neighbourhoods differ per variant:
///
/// | method              | directed graph  | hypergraph                                  |
/// |---------------------|-----------------|---------------------------------------------|
/// | `cascade_targets`   | successors      | 2-section neighbours (distinct, no self)    |
/// | `threshold_sources` | in-neighbours   | co-members, once per shared hyperedge       |
pub trait GraphModel: Sync {
    /// Caller-facing node key.
    type Node: NodeKey;

    fn kind(&self) -> GraphKind;

    fn node_count(&self) -> usize;

    /// Key for a dense index. Panics if `idx` is out of range.
    fn node(&self, idx: NodeIdx) -> &Self::Node;

    fn index_of(&self, key: &Self::Node) -> Option<NodeIdx>;

    /// All nodes in index order.
    fn nodes(&self) -> impl Iterator<Item = NodeIdx> + '_ {
        (0..self.node_count()).map(NodeIdx::new)
    }

    fn edge_count(&self) -> usize;

    /// Members of an edge. For a directed edge: source then target.
    fn edge_members(&self, edge: EdgeIdx) -> impl Iterator<Item = NodeIdx> + '_;

    fn edge_contains(&self, edge: EdgeIdx, node: NodeIdx) -> bool;

    /// Edges that contain `node`, in ascending edge order for hypergraphs.
    fn incident_edges(&self, node: NodeIdx) -> impl Iterator<Item = EdgeIdx> + '_;

    /// Nodes an active `node` makes one IC activation attempt against.
    fn cascade_targets(&self, node: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_;

    /// Peers whose activity counts towards `node`'s LT threshold.
    fn threshold_sources(&self, node: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_;

    /// Resolve caller keys to dense indices.
    fn resolve(&self, keys: &[Self::Node]) -> Result<Vec<NodeIdx>, GraphError> {
        keys.iter()
            .map(|key| {
                self.index_of(key).ok_or_else(|| GraphError::UnknownNode {
                    node: format!("{key:?}"),
                })
            })
            .collect()
    }

    /// Keys for a slice of dense indices.
    fn keys(&self, indices: &[NodeIdx]) -> Vec<Self::Node> {
        indices.iter().map(|&idx| self.node(idx).clone()).collect()
    }
}
