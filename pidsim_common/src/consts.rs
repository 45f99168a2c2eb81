//! System-wide constants for the simulator workspace.
//!
//! Single source of truth for default parameters and numeric limits.
//! Imported by all crates; no duplication permitted.

/// Default integration step [s].
pub const DT_DEFAULT: f64 = 0.1;

/// Default simulation horizon [s] (3000 steps at the default `dt`).
pub const MAX_TIME_DEFAULT: f64 = 300.0;

/// Default actuation delay [ticks] (~1 s at the default `dt`).
pub const DELAY_STEPS_DEFAULT: usize = 10;

/// Default plant restoring-force coefficient.
pub const SPRING_DEFAULT: f64 = 0.1;

/// Default plant velocity damping coefficient.
pub const DAMPING_DEFAULT: f64 = 0.5;

/// Upper bound on the number of ticks in a single run.
pub const MAX_STEPS: usize = 10_000_000;

/// Upper bound on the delay queue length [ticks].
pub const DELAY_STEPS_MAX: usize = 1_000_000;

/// Amplitude of the unit step applied after t = 0.
pub const SETPOINT_STEP: f64 = 1.0;

/// Lower edge of the reference chart's output axis.
pub const DISPLAY_MIN: f64 = -1.0;

/// Upper edge of the reference chart's output axis.
pub const DISPLAY_MAX: f64 = 3.0;

/// Default service name used in log output.
pub const DEFAULT_SERVICE_NAME: &str = "pidsim";
