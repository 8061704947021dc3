//! Error types for the streak and achievement engine

use thiserror::Error;

/// Engine error types
///
/// Most irregularities in a record history (empty input, two starts in a
/// row, a fast that never ended) are absorbed by the algorithms. Only
/// numeric input that can never be meaningful is reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fast end rejected: {0}")]
    FastEndRejected(#[from] FastEndRejection),
}

/// Reasons a fast-end toggle is refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastEndRejection {
    #[error("You are not currently fasting.")]
    NotFasting,

    #[error("You've already ended a fast today. For a multi-day fast, simply wait until you finish.")]
    AlreadyEndedToday,
}

pub type EngineResult<T> = Result<T, EngineError>;
