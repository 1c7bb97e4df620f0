//! Diffusion configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Which stochastic propagation rule a spread estimate uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffusionModelKind {
    /// Independent Cascade.
    #[default]
    Ic,
    /// Linear Threshold.
    Lt,
}

impl DiffusionModelKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ic => "ic",
            Self::Lt => "lt",
        }
    }
}

impl FromStr for DiffusionModelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ic" | "independent_cascade" => Ok(Self::Ic),
            "lt" | "linear_threshold" => Ok(Self::Lt),
            other => Err(format!("unknown diffusion model '{other}'")),
        }
    }
}

/// How per-trial random streams are derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StreamPolicy {
    /// Trial `i` uses the same stream for every seed set evaluated.
    #[default]
    CommonRandomNumbers,
    /// Trial `i` uses a stream derived from the seed set as well.
    Independent,
}

impl StreamPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CommonRandomNumbers => "common_random_numbers",
            Self::Independent => "independent",
        }
    }
}

impl FromStr for StreamPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common_random_numbers" | "crn" => Ok(Self::CommonRandomNumbers),
            "independent" | "independent_streams" => Ok(Self::Independent),
            other => Err(format!("unknown stream policy '{other}'")),
        }
    }
}

/// Configuration for the diffusion subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiffusionConfig {
    /// Propagation rule. Default: `ic`.
    pub model: Option<DiffusionModelKind>,
    /// IC activation probability. Default: 0.1.
    pub p: Option<f64>,
    /// Polarity-diffusion threshold. Default: 0.5.
    pub theta: Option<f64>,
    /// Monte-Carlo trials per estimate. Default: 1000.
    pub mc: Option<u32>,
    /// LT threshold range lower bound. Default: 0.0.
    pub th_low: Option<f64>,
    /// LT threshold range upper bound. Default: 0.1.
    pub th_high: Option<f64>,
    /// Base seed for per-trial streams. Default: 0.
    pub base_seed: Option<u64>,
    /// Stream derivation policy. Default: common random numbers.
    pub streams: Option<StreamPolicy>,
    /// Run trials on the rayon pool. Default: false.
    pub parallel: Option<bool>,
}

impl DiffusionConfig {
    pub fn effective_model(&self) -> DiffusionModelKind {
        self.model.unwrap_or_default()
    }

    pub fn effective_p(&self) -> f64 {
        self.p.unwrap_or(constants::DEFAULT_ACTIVATION_PROBABILITY)
    }

    pub fn effective_theta(&self) -> f64 {
        self.theta.unwrap_or(constants::DEFAULT_THETA)
    }

    pub fn effective_mc(&self) -> u32 {
        self.mc.unwrap_or(constants::DEFAULT_MC_TRIALS)
    }

    pub fn effective_th_low(&self) -> f64 {
        self.th_low.unwrap_or(constants::DEFAULT_THRESHOLD_LOW)
    }

    pub fn effective_th_high(&self) -> f64 {
        self.th_high.unwrap_or(constants::DEFAULT_THRESHOLD_HIGH)
    }

    pub fn effective_base_seed(&self) -> u64 {
        self.base_seed.unwrap_or(constants::DEFAULT_BASE_SEED)
    }

    pub fn effective_streams(&self) -> StreamPolicy {
        self.streams.unwrap_or_default()
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }
}
