//! Shared graph fixtures and generators for tests and benchmarks.
//! Deterministic: same seed → same graph across runs.

use cascade_engine::{DiGraphView, GraphModel, Hypergraph, PolarityTable};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Out-degrees of the 34 members of Zachary's karate club.
pub const KARATE_OUT_DEGREES: [usize; 34] = [
    16, 9, 10, 6, 3, 4, 4, 4, 5, 2, 3, 1, 2, 5, 2, 2, 2, 2, 2, 3, 2, 2, 2, 5, 3, 3, 2, 4, 3, 4,
    4, 6, 12, 17,
];

/// Fixture size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphSize {
    /// 50 nodes, unit test scale.
    Micro,
    /// 500 nodes.
    Small,
    /// 5K nodes.
    Medium,
}

impl GraphSize {
    pub fn node_count(&self) -> u32 {
        match self {
            Self::Micro => 50,
            Self::Small => 500,
            Self::Medium => 5_000,
        }
    }

    pub fn out_degree(&self) -> usize {
        match self {
            Self::Micro => 3,
            Self::Small => 4,
            Self::Medium => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
        }
    }
}

/// `0 -> 1 -> ... -> n-1`.
pub fn path(n: u32) -> DiGraphView<u32> {
    let mut g = DiGraphView::new();
    for i in 0..n {
        g.add_node(i);
    }
    for i in 1..n {
        g.add_edge(i - 1, i);
    }
    g
}

/// Center `0` pointing at leaves `1..=leaves`.
pub fn star(leaves: u32) -> DiGraphView<u32> {
    DiGraphView::from_edges((1..=leaves).map(|leaf| (0, leaf)))
}

/// Two hyperedges sharing user 3: `A = {1, 2, 3}`, `B = {3, 4, 5}`.
pub fn overlapping_hyperedges() -> Hypergraph<u32, String> {
    let built = Hypergraph::from_edges([
        ("A".to_string(), vec![1, 2, 3]),
        ("B".to_string(), vec![3, 4, 5]),
    ]);
    match built {
        Ok(h) => h,
        Err(e) => unreachable!("fixed fixture is well formed: {e}"),
    }
}

/// Polarities for [`overlapping_hyperedges`] where user 3 sides with A
/// and against B.
pub fn split_polarity() -> PolarityTable<u32, String, i8> {
    let mut table = PolarityTable::new();
    for u in [1, 2, 3] {
        table.insert(u, "A".to_string(), 1);
    }
    table.insert(3, "B".to_string(), -1);
    for u in [4, 5] {
        table.insert(u, "B".to_string(), 1);
    }
    table
}

/// 34-node digraph with the karate-club out-degree sequence and targets
/// drawn uniformly from the other members.
pub fn karate_like(seed: u64) -> DiGraphView<u32> {
    let n = KARATE_OUT_DEGREES.len() as u32;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = DiGraphView::new();
    for u in 0..n {
        g.add_node(u);
    }
    for (u, &degree) in KARATE_OUT_DEGREES.iter().enumerate() {
        let u = u as u32;
        let others: Vec<u32> = (0..n).filter(|&v| v != u).collect();
        for &v in others.choose_multiple(&mut rng, degree.min(others.len())) {
            g.add_edge(u, v);
        }
    }
    g
}

/// Random digraph where every node points at `out_degree` distinct others.
pub fn random_digraph(n: u32, out_degree: usize, seed: u64) -> DiGraphView<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = DiGraphView::new();
    for u in 0..n {
        g.add_node(u);
    }
    for u in 0..n {
        let others: Vec<u32> = (0..n).filter(|&v| v != u).collect();
        for &v in others.choose_multiple(&mut rng, out_degree.min(others.len())) {
            g.add_edge(u, v);
        }
    }
    g
}

/// Random digraph at a preset size.
pub fn sized_digraph(size: GraphSize, seed: u64) -> DiGraphView<u32> {
    random_digraph(size.node_count(), size.out_degree(), seed)
}

/// Random hypergraph of `edges` topics over `users` users, each topic with
/// 2..=`max_size` members.
pub fn random_hypergraph(
    users: u32,
    edges: usize,
    max_size: usize,
    seed: u64,
) -> Hypergraph<u32, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let all: Vec<u32> = (0..users).collect();
    let mut builder = Hypergraph::builder();
    for u in 0..users {
        builder.add_node(u);
    }
    let max_size = max_size.clamp(2, all.len().max(2));
    for e in 0..edges {
        let size = rng.gen_range(2..=max_size).min(all.len());
        let members: Vec<u32> = all.choose_multiple(&mut rng, size).copied().collect();
        if members.is_empty() {
            continue;
        }
        // Names are unique by construction.
        let _ = builder.add_hyperedge(format!("topic_{e}"), members);
    }
    match builder.build() {
        Ok(h) => h,
        Err(e) => unreachable!("user count fits the index space: {e}"),
    }
}

/// Random ±1 polarity for every `(member, topic)` pair.
pub fn random_polarity(
    graph: &Hypergraph<u32, String>,
    seed: u64,
) -> PolarityTable<u32, String, i8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut table = PolarityTable::new();
    for e in graph.edges() {
        let topic = graph.edge_name(e);
        for &m in graph.members(e) {
            let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
            table.insert(*graph.node(m), topic.clone(), sign);
        }
    }
    table
}
