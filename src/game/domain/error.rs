//! Error types for game domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain game values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameDomainError {
    /// The task identifier is invalid.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(u32),

    /// The progress target is invalid.
    #[error("invalid progress target {0}, expected a positive integer")]
    InvalidTarget(u32),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,
}

/// Error returned while parsing gesture kinds from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown gesture kind: {0}")]
pub struct ParseGestureKindError(pub String);
