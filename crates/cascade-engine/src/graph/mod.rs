//! Read-only graph models consumed by the diffusion simulators.
//!
//! Two variants share one interface: a plain directed graph backed by
//! petgraph, and a hypergraph of named member sets. The variant is fixed
//! when the model is built; simulators are generic over [`GraphModel`].

pub mod digraph;
pub mod hypergraph;
pub mod model;

pub use digraph::DiGraphView;
pub use hypergraph::{Hypergraph, HypergraphBuilder};
pub use model::{GraphKind, GraphModel, NodeKey};
