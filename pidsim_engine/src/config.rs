//! TOML configuration loader with validation.
//!
//! Loads a [`PidSimConfig`] from a file (or the built-in defaults when no
//! file is given), applies command-line gain overrides and validates the
//! result before any simulation runs.

use std::path::Path;

use pidsim_common::config::{ConfigError, ConfigLoader, PidSimConfig};
use pidsim_common::params::ControllerParams;
use tracing::debug;

/// Per-gain overrides; `None` keeps the configured value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GainOverrides {
    pub kp: Option<f64>,
    pub ki: Option<f64>,
    pub kd: Option<f64>,
}

impl GainOverrides {
    pub fn apply(&self, gains: ControllerParams) -> ControllerParams {
        ControllerParams {
            kp: self.kp.unwrap_or(gains.kp),
            ki: self.ki.unwrap_or(gains.ki),
            kd: self.kd.unwrap_or(gains.kd),
        }
    }
}

/// Load and validate the configuration.
///
/// 1. Parse `path` → `PidSimConfig`, or use defaults when `path` is `None`
/// 2. Apply `overrides` to the gains
/// 3. Run all validation rules
pub fn load_config(
    path: Option<&Path>,
    overrides: &GainOverrides,
) -> Result<PidSimConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            debug!("loading config from {}", path.display());
            PidSimConfig::load(path)?
        }
        None => PidSimConfig::default(),
    };
    config.gains = overrides.apply(config.gains);
    config.validate()?;
    Ok(config)
}

/// Load config from a TOML string (for testing).
pub fn load_config_from_str(
    content: &str,
    overrides: &GainOverrides,
) -> Result<PidSimConfig, ConfigError> {
    let mut config = PidSimConfig::from_toml(content)?;
    config.gains = overrides.apply(config.gains);
    config.validate()?;
    Ok(config)
}
