//! Controller gains supplied by the front end.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// PID gains. Set externally between runs, read-only during a run.
///
/// Sign and range are unconstrained; only finiteness is required.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerParams {
    /// Proportional gain.
    #[serde(default)]
    pub kp: f64,
    /// Integral gain.
    #[serde(default)]
    pub ki: f64,
    /// Derivative gain.
    #[serde(default)]
    pub kd: f64,
}

impl ControllerParams {
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    /// Reject NaN / infinite gains.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("kp", self.kp), ("ki", self.ki), ("kd", self.kd)] {
            if !value.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "{name} {value} must be finite"
                )));
            }
        }
        Ok(())
    }
}
