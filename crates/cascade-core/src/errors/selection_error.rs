//! Seed selection errors.

use super::error_code::CascadeErrorCode;
use super::{ConfigError, DiffusionError};

/// Errors that can occur while preparing a seed-selection run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Diffusion error: {0}")]
    Diffusion(#[from] DiffusionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CascadeErrorCode for SelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Diffusion(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
