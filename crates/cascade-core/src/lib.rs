//! # cascade-core
//!
//! Foundation crate for the Cascade influence-maximization engine.
//! Defines identifiers, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::CascadeConfig;
pub use types::{EdgeIdx, NodeIdx};
