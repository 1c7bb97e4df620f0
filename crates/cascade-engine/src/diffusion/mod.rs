//! Monte-Carlo spread estimation.
//!
//! A spread estimate is the unweighted mean, over `mc` trials, of the final
//! active-set size. Each trial owns a `StdRng` whose seed is derived by the
//! configured [`RandomStreams`] policy, so estimates are reproducible and
//! the parallel path returns bit-identical results to the sequential one.

pub mod engine;
pub mod independent_cascade;
pub mod linear_threshold;
pub mod polarity;
pub mod streams;
pub mod types;

pub use engine::DiffusionEngine;
pub use polarity::{polarity_aware_diffusion, PolarityDiffusion};
pub use streams::RandomStreams;
pub use types::{DiffusionModel, DiffusionParams, SpreadStats};
