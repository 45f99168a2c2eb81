//! PID controller with rectangular (Euler) integration and a
//! backward-difference derivative.
//!
//! No anti-windup and no output clamping: the integral accumulates for the
//! whole run and the output is returned as computed, so peaking and
//! overshoot stay visible in the trace.

use pidsim_common::params::ControllerParams;

/// Internal state of the PID controller.
///
/// Must be reset (via [`PidState::reset`]) at the start of every run,
/// otherwise a trajectory inherits the error history of the previous gains.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PidState {
    /// Accumulated `error * dt`.
    integral: f64,
    /// Error of the previous tick (zero before the first tick).
    prev_error: f64,
}

impl PidState {
    /// Reset all internal state to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn integral(&self) -> f64 {
        self.integral
    }

    #[inline]
    pub fn prev_error(&self) -> f64 {
        self.prev_error
    }
}

/// Compute one PID tick.
///
/// # Arguments
/// - `state`: Mutable PID internal state.
/// - `gains`: Gains for this run.
/// - `setpoint`: Desired value.
/// - `measured`: Process value observed before this tick's plant update.
/// - `dt`: Step size [s]; strictly positive, enforced by config validation.
///
/// # Returns
/// Unclamped controller output.
#[inline]
pub fn pid_compute(
    state: &mut PidState,
    gains: &ControllerParams,
    setpoint: f64,
    measured: f64,
    dt: f64,
) -> f64 {
    debug_assert!(dt > 0.0, "dt must be validated before stepping");

    let error = setpoint - measured;

    // ── I term (rectangular) ────────────────────────────────
    state.integral += error * dt;

    // ── D term (backward difference) ────────────────────────
    let derivative = (error - state.prev_error) / dt;

    let output = gains.kp * error + gains.ki * state.integral + gains.kd * derivative;

    state.prev_error = error;

    output
}

// ─── Tests ──────────────────────────────────────────────────────────
