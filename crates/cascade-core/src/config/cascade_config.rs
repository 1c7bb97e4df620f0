//! Top-level Cascade configuration with 4-layer resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{DiffusionConfig, DiffusionModelKind, SelectionAlgorithm, SelectionConfig, StreamPolicy};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CASCADE_*`)
/// 3. Project config (`cascade.toml` in project root)
/// 4. User config (`~/.cascade/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CascadeConfig {
    pub diffusion: DiffusionConfig,
    pub selection: SelectionConfig,
}

/// Override arguments supplied by a calling front end.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub model: Option<DiffusionModelKind>,
    pub p: Option<f64>,
    pub mc: Option<u32>,
    pub k: Option<usize>,
    pub algorithm: Option<SelectionAlgorithm>,
    pub base_seed: Option<u64>,
}

impl CascadeConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CascadeConfig) -> Result<(), ConfigError> {
        let d = &config.diffusion;
        if let Some(p) = d.p {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ValidationFailed {
                    field: "diffusion.p".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(theta) = d.theta {
            if !(0.0..=1.0).contains(&theta) {
                return Err(ConfigError::ValidationFailed {
                    field: "diffusion.theta".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if d.mc == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "diffusion.mc".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        let (low, high) = (d.effective_th_low(), d.effective_th_high());
        if !(low.is_finite() && high.is_finite() && low >= 0.0 && low <= high) {
            return Err(ConfigError::ValidationFailed {
                field: "diffusion.th_low".to_string(),
                message: format!("need 0 <= th_low <= th_high, got [{low}, {high})"),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.cascade/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut CascadeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CascadeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut CascadeConfig, other: &CascadeConfig) {
        let (b, o) = (&mut base.diffusion, &other.diffusion);
        if o.model.is_some() {
            b.model = o.model;
        }
        if o.p.is_some() {
            b.p = o.p;
        }
        if o.theta.is_some() {
            b.theta = o.theta;
        }
        if o.mc.is_some() {
            b.mc = o.mc;
        }
        if o.th_low.is_some() {
            b.th_low = o.th_low;
        }
        if o.th_high.is_some() {
            b.th_high = o.th_high;
        }
        if o.base_seed.is_some() {
            b.base_seed = o.base_seed;
        }
        if o.streams.is_some() {
            b.streams = o.streams;
        }
        if o.parallel.is_some() {
            b.parallel = o.parallel;
        }

        if other.selection.k.is_some() {
            base.selection.k = other.selection.k;
        }
        if other.selection.algorithm.is_some() {
            base.selection.algorithm = other.selection.algorithm;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CASCADE_DIFFUSION_P`, `CASCADE_SELECTION_K`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut CascadeConfig) {
        let d = &mut config.diffusion;
        if let Some(v) = env_parse("CASCADE_DIFFUSION_MODEL") {
            d.model = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_DIFFUSION_P") {
            d.p = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_DIFFUSION_THETA") {
            d.theta = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_DIFFUSION_MC") {
            d.mc = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_DIFFUSION_TH_LOW") {
            d.th_low = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_DIFFUSION_TH_HIGH") {
            d.th_high = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_DIFFUSION_BASE_SEED") {
            d.base_seed = Some(v);
        }
        if let Some(v) = env_parse::<StreamPolicy>("CASCADE_DIFFUSION_STREAMS") {
            d.streams = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_DIFFUSION_PARALLEL") {
            d.parallel = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_SELECTION_K") {
            config.selection.k = Some(v);
        }
        if let Some(v) = env_parse("CASCADE_SELECTION_ALGORITHM") {
            config.selection.algorithm = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CascadeConfig, cli: &CliOverrides) {
        if let Some(v) = cli.model {
            config.diffusion.model = Some(v);
        }
        if let Some(v) = cli.p {
            config.diffusion.p = Some(v);
        }
        if let Some(v) = cli.mc {
            config.diffusion.mc = Some(v);
        }
        if let Some(v) = cli.base_seed {
            config.diffusion.base_seed = Some(v);
        }
        if let Some(v) = cli.k {
            config.selection.k = Some(v);
        }
        if let Some(v) = cli.algorithm {
            config.selection.algorithm = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.parse::<T>().ok())
}

/// Returns the user-level config directory: `~/.cascade/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".cascade"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
