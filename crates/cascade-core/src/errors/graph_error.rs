//! Graph construction errors.

use super::error_code::{self, CascadeErrorCode};

/// Errors raised while building or querying a graph model.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Unknown node: {node}")]
    UnknownNode { node: String },

    #[error("Duplicate hyperedge: {name}")]
    DuplicateHyperedge { name: String },

    #[error("Hyperedge {name} has no members")]
    EmptyHyperedge { name: String },

    #[error("Graph too large: {count} elements exceeds the u32 index space")]
    TooLarge { count: usize },
}

impl CascadeErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        error_code::GRAPH_ERROR
    }
}
