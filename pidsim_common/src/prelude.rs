//! Prelude module for common re-exports.
//!
//! ```rust
//! use pidsim_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, PidSimConfig, SharedConfig, SimulationConfig};

// ─── Gains ──────────────────────────────────────────────────────────
pub use crate::params::ControllerParams;

// ─── System Constants ───────────────────────────────────────────────
pub use crate::consts::{DISPLAY_MAX, DISPLAY_MIN, MAX_STEPS, SETPOINT_STEP};
