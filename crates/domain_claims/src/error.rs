//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Invalid claim: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("Unknown claim status: {0}")]
    UnknownStatus(String),

    #[error("Claim ids are exhausted")]
    IdsExhausted,
}

impl ClaimError {
    /// Returns the individual validation messages, if any
    pub fn messages(&self) -> Vec<String> {
        match self {
            ClaimError::ValidationFailed(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}
