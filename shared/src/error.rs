use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Failures of the poll operations themselves. Each variant carries the id
/// that caused it so callers can log it; the display text is what clients see.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PollError {
    #[error("Poll already exists")] Conflict(String),
    #[error("Poll not found")] NotFound(String),
    #[error("Poll closed")] PollClosed(String),
    #[error("Invalid option")] InvalidOption(String),
}

impl PollError {
    pub fn subject(&self) -> &str {
        match self {
            PollError::Conflict(id)
            | PollError::NotFound(id)
            | PollError::PollClosed(id)
            | PollError::InvalidOption(id) => id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

pub type Result<T> = std::result::Result<T, PollError>;
