//! Policyholder domain errors

use thiserror::Error;

/// Errors that can occur in the policyholder domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyholderError {
    /// One or more fields failed validation
    #[error("Invalid policyholder: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// Policy type string is not one of the declared values
    #[error("Unknown policy type: {0}")]
    UnknownPolicyType(String),

    /// Every policyholder id in the sequence has been handed out
    #[error("Policyholder ids are exhausted")]
    IdsExhausted,
}

impl PolicyholderError {
    /// Creates a ValidationFailed error from validation messages
    pub fn validation_failed(errors: Vec<String>) -> Self {
        PolicyholderError::ValidationFailed(errors)
    }

    /// Returns the individual validation messages, if any
    pub fn messages(&self) -> Vec<String> {
        match self {
            PolicyholderError::ValidationFailed(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}
