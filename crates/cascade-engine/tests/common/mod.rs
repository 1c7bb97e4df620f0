//! Shared graph builders for the engine integration tests.
//!
//! Mirrors `cascade-bench/src/fixtures.rs`; keep the two in step.

#![allow(dead_code)]

use cascade_engine::{DiGraphView, Hypergraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// `0 -> 1 -> ... -> n-1`.
pub fn path(n: u32) -> DiGraphView<u32> {
    DiGraphView::from_edges((1..n).map(|i| (i - 1, i)))
}

/// Center `0` pointing at leaves `1..=leaves`.
pub fn star(leaves: u32) -> DiGraphView<u32> {
    DiGraphView::from_edges((1..=leaves).map(|leaf| (0, leaf)))
}

/// `{A: {1,2,3}}`, `{B: {3,4,5}}`.
pub fn overlapping() -> Hypergraph<u32, &'static str> {
    Hypergraph::from_edges([("A", vec![1, 2, 3]), ("B", vec![3, 4, 5])]).unwrap()
}

/// Random digraph where each node points at `out_degree` distinct others.
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

/// Random hypergraph with `edges` hyperedges of 2..=`max_size` members.
pub fn random_hypergraph(users: u32, edges: usize, max_size: usize, seed: u64) -> Hypergraph<u32, String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let all: Vec<u32> = (0..users).collect();
    let mut builder = Hypergraph::builder();
    for u in 0..users {
        builder.add_node(u);
    }
    for e in 0..edges {
        let size = 2 + (e % max_size.saturating_sub(1).max(1));
        let members: Vec<u32> = all.choose_multiple(&mut rng, size.min(all.len())).copied().collect();
        builder.add_hyperedge(format!("e{e}"), members).unwrap();
    }
    builder.build().unwrap()
}
