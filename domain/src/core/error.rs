//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Problem prompt cannot be empty")]
    EmptyPrompt,

    #[error("Problem answer cannot be empty")]
    EmptyAnswer,

    #[error("Invalid problem at row {row}: {reason}")]
    InvalidProblem { row: usize, reason: String },
}
