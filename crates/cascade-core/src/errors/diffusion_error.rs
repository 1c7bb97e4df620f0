//! Diffusion parameter errors.

use super::error_code::{self, CascadeErrorCode};
use super::GraphError;

/// Errors raised when a diffusion engine is configured or queried with
/// parameters outside their domain.
#[derive(Debug, thiserror::Error)]
pub enum DiffusionError {
    #[error("Activation probability must be in [0, 1], got {p}")]
    InvalidProbability { p: f64 },

    #[error("Polarity threshold theta must be in [0, 1], got {theta}")]
    InvalidTheta { theta: f64 },

    #[error("Monte-Carlo trial count must be at least 1")]
    ZeroTrials,

    #[error("Invalid threshold range [{low}, {high}): need 0 <= low <= high")]
    InvalidThresholdRange { low: f64, high: f64 },

    #[error("Seed node not present in graph: {node}")]
    UnknownSeed { node: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

impl CascadeErrorCode for DiffusionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownSeed { .. } => error_code::UNKNOWN_SEED,
            Self::Graph(e) => e.error_code(),
            _ => error_code::INVALID_PARAMETER,
        }
    }
}
