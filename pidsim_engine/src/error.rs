//! Engine error type.
//!
//! Configuration problems abort before any trace exists; output errors come
//! from writing a finished trace.

use pidsim_common::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write trace: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to encode trace: {0}")]
    Encode(#[from] serde_json::Error),
}
