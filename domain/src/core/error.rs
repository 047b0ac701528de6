//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid role: {0} (expected planner, coder, or reviewer)")]
    InvalidRole(String),

    #[error("Invalid model: {0}")]
    InvalidModel(String),
}
