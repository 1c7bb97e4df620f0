//! Error handling for Cascade.
//! One error enum per subsystem, `thiserror` only.
//!
//! Errors surface at construction and validation boundaries. Simulation and
//! seed selection themselves are infallible: degenerate inputs (no
//! neighbours, empty seed sets, budgets larger than the node set) resolve to
//! zero or neutral values rather than errors.

pub mod config_error;
pub mod diffusion_error;
pub mod error_code;
pub mod graph_error;
pub mod selection_error;

pub use config_error::ConfigError;
pub use diffusion_error::DiffusionError;
pub use error_code::CascadeErrorCode;
pub use graph_error::GraphError;
pub use selection_error::SelectionError;
