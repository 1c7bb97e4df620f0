//! Shared constants for the Cascade engine.

/// Cascade version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Diffusion defaults ----

/// Default Independent Cascade activation probability.
pub const DEFAULT_ACTIVATION_PROBABILITY: f64 = 0.1;

/// Default polarity-diffusion threshold. Cross-polarity activation
/// succeeds with probability `1 - theta`.
pub const DEFAULT_THETA: f64 = 0.5;

/// Default number of Monte-Carlo trials per spread estimate.
pub const DEFAULT_MC_TRIALS: u32 = 1000;

/// Default lower bound of the Linear Threshold draw.
pub const DEFAULT_THRESHOLD_LOW: f64 = 0.0;

/// Default upper bound of the Linear Threshold draw.
pub const DEFAULT_THRESHOLD_HIGH: f64 = 0.1;

/// Default base seed for per-trial random streams.
pub const DEFAULT_BASE_SEED: u64 = 0;

// ---- Selection defaults ----

/// Default seed budget.
pub const DEFAULT_SEED_BUDGET: usize = 4;

// ---- Config ----

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "cascade.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "CASCADE_LOG";

/// Filter used when `CASCADE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "cascade=info";
