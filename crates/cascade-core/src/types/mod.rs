//! Identifiers and collection aliases shared across the workspace.

pub mod collections;
pub mod identifiers;

pub use collections::{FxHashMap, FxHashSet, SmallVec4};
pub use identifiers::{EdgeIdx, NodeIdx};
