//! Configuration loading traits and types.
//!
//! All config types use `serde::Deserialize` for TOML loading. Every field
//! has a default backed by [`crate::consts`], so an empty file (or no file at
//! all) yields the reference configuration.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pidsim_common::config::{ConfigError, ConfigLoader, PidSimConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let config = PidSimConfig::load(Path::new("pidsim.toml"))?;
//!     config.validate()?;
//!     println!("{} steps", config.simulation.num_steps());
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::consts::{
    DAMPING_DEFAULT, DEFAULT_SERVICE_NAME, DELAY_STEPS_DEFAULT, DELAY_STEPS_MAX, DT_DEFAULT,
    MAX_STEPS, MAX_TIME_DEFAULT, SPRING_DEFAULT,
};
use crate::params::ControllerParams;

/// Error type for configuration loading and validation.
///
/// A configuration error aborts a run before any trace is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Configuration file not found at specified path.
    #[error("Configuration file not found")]
    FileNotFound,

    /// TOML parsing failed (includes negative or non-integer `delay_steps`).
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Semantic validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

/// Log level for application logging.
///
/// Uses lowercase serde values for TOML compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, detailed tracing information.
    Trace,
    /// Debug information useful during development.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Common fields shared by every front end.
///
/// # TOML Example
///
/// ```toml
/// [shared]
/// log_level = "debug"
/// service_name = "pidsim-lab-01"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharedConfig {
    /// Logging verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Instance identifier shown in log output.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            service_name: default_service_name(),
        }
    }
}

impl SharedConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if `service_name` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "service_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ─── Simulation Config ──────────────────────────────────────────────

/// Fixed-step simulation parameters. Immutable for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    /// Integration step [s] (default: 0.1).
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Simulation horizon [s] (default: 300.0).
    #[serde(default = "default_max_time")]
    pub max_time: f64,

    /// Actuation delay [ticks] (default: 10). Zero disables the delay.
    #[serde(default = "default_delay_steps")]
    pub delay_steps: usize,

    /// Plant restoring-force coefficient (default: 0.1).
    #[serde(default = "default_spring")]
    pub spring: f64,

    /// Plant velocity damping coefficient (default: 0.5).
    #[serde(default = "default_damping")]
    pub damping: f64,
}

fn default_dt() -> f64 {
    DT_DEFAULT
}
fn default_max_time() -> f64 {
    MAX_TIME_DEFAULT
}
fn default_delay_steps() -> usize {
    DELAY_STEPS_DEFAULT
}
fn default_spring() -> f64 {
    SPRING_DEFAULT
}
fn default_damping() -> f64 {
    DAMPING_DEFAULT
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dt: DT_DEFAULT,
            max_time: MAX_TIME_DEFAULT,
            delay_steps: DELAY_STEPS_DEFAULT,
            spring: SPRING_DEFAULT,
            damping: DAMPING_DEFAULT,
        }
    }
}

impl SimulationConfig {
    /// Number of ticks in one run: `floor(max_time / dt)`.
    ///
    /// Only meaningful after [`SimulationConfig::validate`] succeeded.
    #[inline]
    pub fn num_steps(&self) -> usize {
        (self.max_time / self.dt).floor() as usize
    }

    /// Validate parameter bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `dt` or `max_time` is not strictly positive and finite
    /// - `spring` or `damping` is not finite
    /// - `delay_steps` exceeds [`DELAY_STEPS_MAX`]
    /// - the horizon would exceed [`MAX_STEPS`] ticks
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "dt {} must be finite and > 0",
                self.dt
            )));
        }
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "max_time {} must be finite and > 0",
                self.max_time
            )));
        }
        if !self.spring.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "spring {} must be finite",
                self.spring
            )));
        }
        if !self.damping.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "damping {} must be finite",
                self.damping
            )));
        }
        if self.delay_steps > DELAY_STEPS_MAX {
            return Err(ConfigError::ValidationError(format!(
                "delay_steps {} out of range [0, {}]",
                self.delay_steps, DELAY_STEPS_MAX
            )));
        }
        let steps = (self.max_time / self.dt).floor();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(ConfigError::ValidationError(format!(
                "max_time / dt = {steps} exceeds {MAX_STEPS} steps"
            )));
        }
        Ok(())
    }
}

// ─── Top-Level File ─────────────────────────────────────────────────

/// Complete configuration file.
///
/// # TOML Example
///
/// ```toml
/// [simulation]
/// dt = 0.1
/// max_time = 300.0
/// delay_steps = 10
///
/// [gains]
/// kp = 0.8
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PidSimConfig {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Initial gains (default: all zero).
    #[serde(default)]
    pub gains: ControllerParams,
}

impl PidSimConfig {
    /// Parse a configuration from a TOML string (no validation).
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.simulation.validate()?;
        self.gains.validate()
    }
}

/// Trait for loading configuration from TOML files.
///
/// # Contract
///
/// - Returns `ConfigError::FileNotFound` if the file does not exist
/// - Returns `ConfigError::ParseError` if TOML syntax is invalid
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    /// Load configuration from a TOML file.
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

// Blanket implementation: any serde-deserializable struct can be loaded.
impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
