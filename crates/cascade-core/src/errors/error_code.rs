//! CascadeErrorCode trait for stable, machine-readable error codes.

/// Trait for mapping Cascade errors to stable code strings.
/// Collaborators (ingestion pipelines, plotting front ends) match on the
/// code rather than on the human-readable message.
pub trait CascadeErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const UNKNOWN_SEED: &str = "UNKNOWN_SEED";
