//! Plain directed graph view backed by a petgraph `DiGraph`.

use cascade_core::types::{EdgeIdx, FxHashMap, NodeIdx};
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use super::model::{GraphKind, GraphModel, NodeKey};

/// A directed graph of users. Parallel edges collapse into one.
///
/// Nodes are never removed, so petgraph's dense `NodeIndex` doubles as the
/// model's [`NodeIdx`].
#[derive(Debug, Clone)]
pub struct DiGraphView<N: NodeKey> {
    graph: DiGraph<N, ()>,
    /// Map from caller key -> NodeIndex for O(1) lookup.
    node_index: FxHashMap<N, NodeIndex>,
}

impl<N: NodeKey> DiGraphView<N> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    /// Build a graph from `(source, target)` pairs. Nodes are interned in
    /// first-seen order.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut view = Self::new();
        for (u, v) in edges {
            view.add_edge(u, v);
        }
        view
    }

    /// Add a node, returning its index. Adding an existing key is a no-op.
    pub fn add_node(&mut self, key: N) -> NodeIdx {
        if let Some(&existing) = self.node_index.get(&key) {
            return NodeIdx::new(existing.index());
        }
        let idx = self.graph.add_node(key.clone());
        self.node_index.insert(key, idx);
        NodeIdx::new(idx.index())
    }

    /// Add a directed edge `u -> v`, interning both endpoints.
    pub fn add_edge(&mut self, u: N, v: N) -> EdgeIdx {
        let a = NodeIndex::new(self.add_node(u).index());
        let b = NodeIndex::new(self.add_node(v).index());
        EdgeIdx::new(self.graph.update_edge(a, b, ()).index())
    }

    /// Out-degree of a node.
    pub fn out_degree(&self, node: NodeIdx) -> usize {
        self.graph
            .neighbors_directed(NodeIndex::new(node.index()), Direction::Outgoing)
            .count()
    }

    /// The underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<N, ()> {
        &self.graph
    }

    fn to_idx(ix: NodeIndex) -> NodeIdx {
        NodeIdx::new(ix.index())
    }
}

impl<N: NodeKey> Default for DiGraphView<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> GraphModel for DiGraphView<N> {
    type Node = N;

    fn kind(&self) -> GraphKind {
        GraphKind::Directed
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn node(&self, idx: NodeIdx) -> &N {
        &self.graph[NodeIndex::new(idx.index())]
    }

    fn index_of(&self, key: &N) -> Option<NodeIdx> {
        self.node_index.get(key).map(|&ix| Self::to_idx(ix))
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn edge_members(&self, edge: EdgeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        self.graph
            .edge_endpoints(EdgeIndex::new(edge.index()))
            .into_iter()
            .flat_map(|(a, b)| [Self::to_idx(a), Self::to_idx(b)])
    }

    fn edge_contains(&self, edge: EdgeIdx, node: NodeIdx) -> bool {
        self.edge_members(edge).any(|m| m == node)
    }

    fn incident_edges(&self, node: NodeIdx) -> impl Iterator<Item = EdgeIdx> + '_ {
        let ix = NodeIndex::new(node.index());
        self.graph
            .edges_directed(ix, Direction::Outgoing)
            .chain(self.graph.edges_directed(ix, Direction::Incoming))
            .map(|e| EdgeIdx::new(e.id().index()))
    }

    fn cascade_targets(&self, node: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(node.index()), Direction::Outgoing)
            .map(Self::to_idx)
    }

    fn threshold_sources(&self, node: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        self.graph
            .neighbors_directed(NodeIndex::new(node.index()), Direction::Incoming)
            .map(Self::to_idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_interned_in_first_seen_order() {
        let g = DiGraphView::from_edges([("b", "a"), ("a", "c")]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.index_of(&"b"), Some(NodeIdx::new(0)));
        assert_eq!(g.index_of(&"a"), Some(NodeIdx::new(1)));
        assert_eq!(*g.node(NodeIdx::new(2)), "c");
    }

    #[test]
    fn test_parallel_edges_collapse() {
        let mut g = DiGraphView::new();
        let e1 = g.add_edge(0u32, 1);
        let e2 = g.add_edge(0u32, 1);
        assert_eq!(e1, e2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.out_degree(NodeIdx::new(0)), 1);
    }

    #[test]
    fn test_successors_and_predecessors() {
        let g = DiGraphView::from_edges([(0u32, 1), (0, 2), (3, 1)]);
        let mut succ: Vec<_> = g.cascade_targets(NodeIdx::new(0)).collect();
        succ.sort();
        assert_eq!(succ, vec![NodeIdx::new(1), NodeIdx::new(2)]);

        let one = g.index_of(&1).unwrap();
        let mut pred: Vec<_> = g.threshold_sources(one).map(|i| *g.node(i)).collect();
        pred.sort();
        assert_eq!(pred, vec![0, 3]);
    }

    #[test]
    fn test_edge_membership() {
        let mut g = DiGraphView::new();
        let e = g.add_edge("x", "y");
        let members: Vec<_> = g.edge_members(e).collect();
        assert_eq!(members, vec![NodeIdx::new(0), NodeIdx::new(1)]);
        assert!(g.edge_contains(e, NodeIdx::new(1)));
        assert_eq!(g.incident_edges(NodeIdx::new(1)).count(), 1);
    }

    #[test]
    fn test_resolve_unknown_key() {
        let g = DiGraphView::from_edges([(1u32, 2)]);
        assert!(g.resolve(&[1, 2]).is_ok());
        assert!(g.resolve(&[7]).is_err());
    }
}
