//! Seed selection configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Greedy seed-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SelectionAlgorithm {
    /// Full rescan of every candidate each round.
    Greedy,
    /// Lazy evaluation with generation stamps.
    #[default]
    Celf,
    /// CELF plus a cached companion gain.
    #[serde(rename = "celf_pp")]
    CelfPlusPlus,
}

impl SelectionAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Celf => "celf",
            Self::CelfPlusPlus => "celf_pp",
        }
    }
}

impl std::fmt::Display for SelectionAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SelectionAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "celf" => Ok(Self::Celf),
            "celf_pp" | "celfpp" | "celf++" => Ok(Self::CelfPlusPlus),
            other => Err(format!("unknown selection algorithm '{other}'")),
        }
    }
}

/// Configuration for the seed selection subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Seed budget. Default: 4.
    pub k: Option<usize>,
    /// Selection strategy. Default: `celf`.
    pub algorithm: Option<SelectionAlgorithm>,
}

impl SelectionConfig {
    pub fn effective_k(&self) -> usize {
        self.k.unwrap_or(constants::DEFAULT_SEED_BUDGET)
    }

    pub fn effective_algorithm(&self) -> SelectionAlgorithm {
        self.algorithm.unwrap_or_default()
    }
}
