//! # cascade-engine
//!
//! Influence estimation and seed selection.
//!
//! - [`graph`]: read-only graph models (plain digraph, hypergraph)
//! - [`polarity`]: `(user, hyperedge)` polarity resolution
//! - [`diffusion`]: Monte-Carlo IC / LT / polarity-aware spread estimation
//! - [`selection`]: naive greedy, CELF, and CELF++ seed selection
//! - [`heuristics`]: simulation-free hypergraph seed rankings

pub mod diffusion;
pub mod graph;
pub mod heuristics;
pub mod polarity;
pub mod selection;

pub use diffusion::{DiffusionEngine, DiffusionModel, DiffusionParams, RandomStreams, SpreadStats};
pub use graph::{DiGraphView, GraphKind, GraphModel, Hypergraph, HypergraphBuilder, NodeKey};
pub use polarity::{PolaritySource, PolarityTable};
pub use selection::{SeedSelector, SelectionObserver, SelectionResult, SpreadFunction};
