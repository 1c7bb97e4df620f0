//! Hypergraph of named hyperedges over users.
//!
//! Hyperedges are shared-context groups (opinion categories, topics). A user
//! may belong to any number of them. Membership is stored as sorted index
//! lists; the 2-section adjacency (users sharing at least one hyperedge) is
//! computed once in [`HypergraphBuilder::build`].

use cascade_core::errors::GraphError;
use cascade_core::types::{EdgeIdx, FxHashMap, NodeIdx, SmallVec4};

use super::model::{GraphKind, GraphModel, NodeKey};

/// Immutable hypergraph. Build with [`HypergraphBuilder`].
#[derive(Debug, Clone)]
pub struct Hypergraph<N: NodeKey, E: NodeKey = String> {
    nodes: Vec<N>,
    node_index: FxHashMap<N, NodeIdx>,
    edge_names: Vec<E>,
    edge_index: FxHashMap<E, EdgeIdx>,
    /// Sorted, deduplicated members per hyperedge.
    members: Vec<Vec<NodeIdx>>,
    /// Incident hyperedges per node, ascending.
    incidence: Vec<SmallVec4<EdgeIdx>>,
    /// Distinct co-members per node, ascending, excluding the node itself.
    two_section: Vec<Vec<NodeIdx>>,
}

impl<N: NodeKey, E: NodeKey> Hypergraph<N, E> {
    pub fn builder() -> HypergraphBuilder<N, E> {
        HypergraphBuilder::new()
    }

    /// Build from `(name, members)` pairs.
    pub fn from_edges<I, M>(edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (E, M)>,
        M: IntoIterator<Item = N>,
    {
        let mut builder = HypergraphBuilder::new();
        for (name, members) in edges {
            builder.add_hyperedge(name, members)?;
        }
        builder.build()
    }

    pub fn edge_name(&self, edge: EdgeIdx) -> &E {
        &self.edge_names[edge.index()]
    }

    pub fn edge_index(&self, name: &E) -> Option<EdgeIdx> {
        self.edge_index.get(name).copied()
    }

    /// All hyperedges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeIdx> + '_ {
        (0..self.edge_names.len()).map(EdgeIdx::new)
    }

    /// Sorted members of a hyperedge.
    pub fn members(&self, edge: EdgeIdx) -> &[NodeIdx] {
        &self.members[edge.index()]
    }

    /// Number of hyperedges containing `node`.
    pub fn hyperdegree(&self, node: NodeIdx) -> usize {
        self.incidence[node.index()].len()
    }

    /// Distinct 2-section neighbours of `node`.
    pub fn neighbours(&self, node: NodeIdx) -> &[NodeIdx] {
        &self.two_section[node.index()]
    }
}

impl<N: NodeKey, E: NodeKey> GraphModel for Hypergraph<N, E> {
    type Node = N;

    fn kind(&self) -> GraphKind {
        GraphKind::Hypergraph
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, idx: NodeIdx) -> &N {
        &self.nodes[idx.index()]
    }

    fn index_of(&self, key: &N) -> Option<NodeIdx> {
        self.node_index.get(key).copied()
    }

    fn edge_count(&self) -> usize {
        self.edge_names.len()
    }

    fn edge_members(&self, edge: EdgeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        self.members[edge.index()].iter().copied()
    }

    fn edge_contains(&self, edge: EdgeIdx, node: NodeIdx) -> bool {
        self.members[edge.index()].binary_search(&node).is_ok()
    }

    fn incident_edges(&self, node: NodeIdx) -> impl Iterator<Item = EdgeIdx> + '_ {
        self.incidence[node.index()].iter().copied()
    }

    fn cascade_targets(&self, node: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        self.two_section[node.index()].iter().copied()
    }

    fn threshold_sources(&self, node: NodeIdx) -> impl Iterator<Item = NodeIdx> + '_ {
        self.incidence[node.index()].iter().flat_map(move |&e| {
            self.members[e.index()]
                .iter()
                .copied()
                .filter(move |&m| m != node)
        })
    }
}

/// Incremental construction of a [`Hypergraph`].
#[derive(Debug, Clone)]
pub struct HypergraphBuilder<N: NodeKey, E: NodeKey = String> {
    nodes: Vec<N>,
    node_index: FxHashMap<N, NodeIdx>,
    edge_names: Vec<E>,
    edge_index: FxHashMap<E, EdgeIdx>,
    members: Vec<Vec<NodeIdx>>,
}

impl<N: NodeKey, E: NodeKey> HypergraphBuilder<N, E> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            edge_names: Vec::new(),
            edge_index: FxHashMap::default(),
            members: Vec::new(),
        }
    }

    /// Add a user that may belong to no hyperedge.
    pub fn add_node(&mut self, key: N) -> NodeIdx {
        if let Some(&existing) = self.node_index.get(&key) {
            return existing;
        }
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(key.clone());
        self.node_index.insert(key, idx);
        idx
    }

    /// Add a named hyperedge. Repeated members collapse; names must be
    /// unique and the member set non-empty.
    pub fn add_hyperedge<M>(&mut self, name: E, members: M) -> Result<EdgeIdx, GraphError>
    where
        M: IntoIterator<Item = N>,
    {
        if self.edge_index.contains_key(&name) {
            return Err(GraphError::DuplicateHyperedge {
                name: format!("{name:?}"),
            });
        }
        let keys: Vec<N> = members.into_iter().collect();
        if keys.is_empty() {
            return Err(GraphError::EmptyHyperedge {
                name: format!("{name:?}"),
            });
        }

        let mut idxs: Vec<NodeIdx> = keys.into_iter().map(|k| self.add_node(k)).collect();
        idxs.sort_unstable();
        idxs.dedup();

        let edge = EdgeIdx::new(self.edge_names.len());
        self.edge_names.push(name.clone());
        self.edge_index.insert(name, edge);
        self.members.push(idxs);
        Ok(edge)
    }

    /// Freeze the builder, computing incidence and 2-section adjacency.
    pub fn build(self) -> Result<Hypergraph<N, E>, GraphError> {
        let limit = u32::MAX as usize;
        if self.nodes.len() > limit || self.edge_names.len() > limit {
            return Err(GraphError::TooLarge {
                count: self.nodes.len().max(self.edge_names.len()),
            });
        }

        let n = self.nodes.len();
        let mut incidence: Vec<SmallVec4<EdgeIdx>> = vec![SmallVec4::new(); n];
        for (e, members) in self.members.iter().enumerate() {
            for m in members {
                incidence[m.index()].push(EdgeIdx::new(e));
            }
        }

        let two_section = (0..n)
            .map(|u| {
                let me = NodeIdx::new(u);
                let mut adj: Vec<NodeIdx> = incidence[u]
                    .iter()
                    .flat_map(|e| self.members[e.index()].iter().copied())
                    .filter(|&v| v != me)
                    .collect();
                adj.sort_unstable();
                adj.dedup();
                adj
            })
            .collect();

        Ok(Hypergraph {
            nodes: self.nodes,
            node_index: self.node_index,
            edge_names: self.edge_names,
            edge_index: self.edge_index,
            members: self.members,
            incidence,
            two_section,
        })
    }
}

impl<N: NodeKey, E: NodeKey> Default for HypergraphBuilder<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
