//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced to callers.
///
/// Malformed availability ranges are never an error here: the evaluator
/// degrades them to absent. Only payloads that are not a worker list at
/// all, or records rejected by explicit validation, are reported.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The body is not valid JSON of the expected shape.
    #[error("invalid worker payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// Validation found one or more record problems.
    #[error("{} invalid worker record(s)", .0.len())]
    Invalid(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for RosterError {
    fn from(errors: Vec<ValidationError>) -> Self {
        RosterError::Invalid(errors)
    }
}
