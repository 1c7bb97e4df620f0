//! Diffusion parameters and result statistics.

use cascade_core::config::{DiffusionConfig, DiffusionModelKind};
use cascade_core::constants;
use cascade_core::errors::DiffusionError;
use serde::{Deserialize, Serialize};

use super::streams::RandomStreams;

/// Propagation rule with its model-specific parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum DiffusionModel {
    /// One Bernoulli(`p`) attempt per active node and target.
    IndependentCascade { p: f64 },
    /// Per-trial threshold drawn from `[low, high)`, scaled by node count.
    LinearThreshold { low: f64, high: f64 },
}

impl DiffusionModel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::IndependentCascade { .. } => "ic",
            Self::LinearThreshold { .. } => "lt",
        }
    }

    pub fn validate(&self) -> Result<(), DiffusionError> {
        match *self {
            Self::IndependentCascade { p } => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(DiffusionError::InvalidProbability { p });
                }
            }
            Self::LinearThreshold { low, high } => {
                if !(low.is_finite() && high.is_finite() && low >= 0.0 && low <= high) {
                    return Err(DiffusionError::InvalidThresholdRange { low, high });
                }
            }
        }
        Ok(())
    }
}

/// Everything a [`DiffusionEngine`](super::DiffusionEngine) needs besides
/// the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffusionParams {
    pub model: DiffusionModel,
    /// Monte-Carlo trial count, at least 1.
    pub mc: u32,
    pub streams: RandomStreams,
    /// Run trials on the rayon pool.
    pub parallel: bool,
}

impl DiffusionParams {
    /// Independent Cascade with activation probability `p`.
    pub fn ic(p: f64) -> Self {
        Self::with_model(DiffusionModel::IndependentCascade { p })
    }

    /// Linear Threshold with threshold range `[low, high)`.
    pub fn lt(low: f64, high: f64) -> Self {
        Self::with_model(DiffusionModel::LinearThreshold { low, high })
    }

    fn with_model(model: DiffusionModel) -> Self {
        Self {
            model,
            mc: constants::DEFAULT_MC_TRIALS,
            streams: RandomStreams::default(),
            parallel: false,
        }
    }

    pub fn with_trials(mut self, mc: u32) -> Self {
        self.mc = mc;
        self
    }

    pub fn with_streams(mut self, streams: RandomStreams) -> Self {
        self.streams = streams;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), DiffusionError> {
        if self.mc == 0 {
            return Err(DiffusionError::ZeroTrials);
        }
        self.model.validate()
    }

    /// Resolve parameters from the diffusion section of a config.
    pub fn from_config(config: &DiffusionConfig) -> Result<Self, DiffusionError> {
        let model = match config.effective_model() {
            DiffusionModelKind::Ic => DiffusionModel::IndependentCascade {
                p: config.effective_p(),
            },
            DiffusionModelKind::Lt => DiffusionModel::LinearThreshold {
                low: config.effective_th_low(),
                high: config.effective_th_high(),
            },
        };
        let params = Self {
            model,
            mc: config.effective_mc(),
            streams: RandomStreams::from_policy(
                config.effective_streams(),
                config.effective_base_seed(),
            ),
            parallel: config.effective_parallel(),
        };
        params.validate()?;
        Ok(params)
    }
}

/// Summary of the per-trial active-set sizes behind one estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpreadStats {
    pub mean: f64,
    pub min: usize,
    pub max: usize,
    /// Population standard deviation.
    pub std_dev: f64,
    pub trials: u32,
}

impl SpreadStats {
    /// Every trial ended with exactly `size` active nodes.
    pub fn constant(size: usize, trials: u32) -> Self {
        Self {
            mean: size as f64,
            min: size,
            max: size,
            std_dev: 0.0,
            trials,
        }
    }

    /// Aggregate trial outcomes in trial order.
    pub fn from_outcomes(outcomes: &[usize]) -> Self {
        if outcomes.is_empty() {
            return Self::constant(0, 0);
        }
        let n = outcomes.len() as f64;
        let total: u64 = outcomes.iter().map(|&x| x as u64).sum();
        let mean = total as f64 / n;
        let variance = outcomes
            .iter()
            .map(|&x| {
                let d = x as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        Self {
            mean,
            min: outcomes.iter().copied().min().unwrap_or(0),
            max: outcomes.iter().copied().max().unwrap_or(0),
            std_dev: variance.sqrt(),
            trials: outcomes.len() as u32,
        }
    }
}
