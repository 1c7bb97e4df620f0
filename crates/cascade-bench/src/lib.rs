//! # cascade-bench
//!
//! Deterministic graph fixtures and benchmark bookkeeping for the Cascade
//! engine. Fixtures replace ad-hoc demo graphs: every generator takes an
//! explicit seed and returns the same structure on every run.

pub mod fixtures;

use std::time::Duration;

use cascade_core::config::SelectionAlgorithm;
use cascade_engine::SelectionResult;
use serde::{Deserialize, Serialize};

/// One selection run condensed for baseline comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionBenchResult {
    pub fixture: String,
    pub algorithm: SelectionAlgorithm,
    pub seeds: usize,
    pub total_spread: f64,
    pub evaluations: u64,
    pub duration_ms: f64,
}

impl SelectionBenchResult {
    pub fn from_result(fixture: impl Into<String>, result: &SelectionResult) -> Self {
        Self {
            fixture: fixture.into(),
            algorithm: result.algorithm,
            seeds: result.seeds.len(),
            total_spread: result.total_spread,
            evaluations: result.evaluations,
            duration_ms: duration_ms(result.total_elapsed()),
        }
    }

    /// Whether this run spent more than `tolerance` (a fraction) extra
    /// spread evaluations over `baseline`. Evaluation counts are
    /// deterministic, unlike wall-clock time.
    pub fn regresses_vs(&self, baseline: &SelectionBenchResult, tolerance: f64) -> bool {
        if baseline.evaluations == 0 {
            return false;
        }
        let ratio = self.evaluations as f64 / baseline.evaluations as f64;
        ratio > 1.0 + tolerance
    }
}

fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}
