//! PID Simulator Common Library
//!
//! Shared constants, controller gains and configuration loading for the
//! simulator workspace crates.
//!
//! # Module Structure
//!
//! - [`consts`] - Default parameters and numeric limits
//! - [`config`] - Configuration types, validation and the TOML loader
//! - [`params`] - Controller gains
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use pidsim_common::prelude::*;
//!
//! let cfg = SimulationConfig::default();
//! assert!(cfg.validate().is_ok());
//! assert_eq!(cfg.num_steps(), 3000);
//! ```

pub mod config;
pub mod consts;
pub mod params;
pub mod prelude;
