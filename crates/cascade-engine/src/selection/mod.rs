//! Greedy seed selection.
//!
//! Three strategies maximise a [`SpreadFunction`] under a seed budget `k`:
//!
//! - naive greedy: every round re-evaluates every remaining candidate
//! - CELF: lazy re-evaluation through a generation-stamped max-queue
//! - CELF++: CELF plus a cached gain that assumes the current best node is
//!   selected next
//!
//! All three report seeds, per-round marginal gains, cumulative spread,
//! elapsed time, and how many spread evaluations they spent.

pub mod celf;
pub mod celf_pp;
pub mod greedy;
pub mod lazy_queue;
pub mod observer;
pub mod report;
pub mod selector;
pub mod spread;

pub use lazy_queue::{LazyQueue, QueueRecord};
pub use observer::SelectionObserver;
pub use report::{RoundReport, SelectionResult};
pub use selector::{select_from_config, SeedSelector};
pub use spread::{CountingSpread, SpreadFunction};
