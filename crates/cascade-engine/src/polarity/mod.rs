//! Polarity resolution for `(user, hyperedge)` pairs.
//!
//! A polarity is any comparable value (sign, label, flag). Lookups that
//! cannot be resolved yield `None`, and two `None`s compare equal, so
//! unlabelled pairs behave as agreeing.

pub mod source;
pub mod table;

pub use source::{polarity_matches, PolaritySource};
pub use table::PolarityTable;
