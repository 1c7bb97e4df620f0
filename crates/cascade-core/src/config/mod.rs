//! Configuration system for Cascade.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod cascade_config;
pub mod diffusion_config;
pub mod selection_config;

pub use cascade_config::{CascadeConfig, CliOverrides};
pub use diffusion_config::{DiffusionConfig, DiffusionModelKind, StreamPolicy};
pub use selection_config::{SelectionAlgorithm, SelectionConfig};
