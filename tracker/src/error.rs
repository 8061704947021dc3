//! Tracker error handling

use sleepfast_engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Store error: {0}")]
    Store(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
