//! # PID Simulation Engine
//!
//! Fixed-step simulation of a PID controller driving a unit-mass
//! spring-damper plant through an actuation delay. Each run integrates the
//! full horizon from a zero initial state and yields four aligned series:
//! time, setpoint, pose and controller output.
//!
//! ## Per-Tick Pipeline
//!
//! 1. **Setpoint**: unit step strictly after t = 0
//! 2. **PID**: rectangular integral, backward-difference derivative
//! 3. **Delay line**: output of tick `t` reaches the plant at `t + N`
//! 4. **Plant**: semi-implicit Euler, velocity before position
//!
//! The recorded output is the undelayed controller command.
//!
//! ## Inputs
//!
//! Gains are assumed to be parsed, finite `f64` values; parsing raw user
//! text belongs to the front end.

pub mod config;
pub mod control;
pub mod error;
pub mod output;
pub mod plant;
pub mod simulation;

pub use simulation::driver::run;
pub use simulation::session::{SimulationSession, TraceSink};
pub use simulation::trace::SimulationTrace;
