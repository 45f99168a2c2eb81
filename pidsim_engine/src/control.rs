//! Control engine root.
//!
//! PID controller plus the actuation delay line that sits between the
//! controller output and the plant input.

pub mod delay;
pub mod pid;
