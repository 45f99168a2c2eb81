//! Simulation root.
//!
//! Driver (fixed-step loop), session (gain changes → full rerun), trace
//! (aligned output series) and analysis (step-response metrics).

pub mod analysis;
pub mod driver;
pub mod session;
pub mod trace;
