//! Record validation for worker lists.
//!
//! Checks the integrity of worker records as served by the worker store.
//! Detects:
//! - Duplicate worker IDs
//! - Blank names
//! - Role tags outside a known catalogue
//! - Ranges with an unreadable bound
//! - Ranges that end before they start
//!
//! Validation is advisory. The evaluator tolerates every problem listed
//! here; callers use these results to flag records for correction.

use crate::error::RosterError;
use crate::models::{TimeRange, Worker, WorkerId};
use std::collections::HashSet;

/// Role tags offered by the worker entry form.
pub const DEFAULT_ROLES: [&str; 4] = ["KITUP", "AATT", "MT", "ICA"];

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending worker.
    pub worker_id: WorkerId,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two workers share the same ID.
    DuplicateId,
    /// A worker has an empty or whitespace-only name.
    BlankName,
    /// A role tag is not in the catalogue.
    UnknownRole,
    /// A range has an unreadable start or end.
    MalformedRange,
    /// A range's start is after its end.
    InvertedRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, worker_id: WorkerId, message: impl Into<String>) -> Self {
        Self {
            kind,
            worker_id,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "worker {}: {}", self.worker_id, self.message)
    }
}

/// Validates a worker list.
///
/// Checks:
/// 1. No duplicate worker IDs
/// 2. Every worker has a non-blank name
/// 3. Every role tag is in `catalogue` (skipped when `catalogue` is empty)
/// 4. Every range has a readable start and end
/// 5. No range ends before it starts
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_workers(workers: &[Worker], catalogue: &[&str]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for w in workers {
        if !seen.insert(w.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                w.id,
                format!("Duplicate worker ID: {}", w.id),
            ));
        }

        if w.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankName,
                w.id,
                "Worker has no name",
            ));
        }

        if !catalogue.is_empty() {
            for role in w.roles.iter().filter(|r| !catalogue.contains(&r.as_str())) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRole,
                    w.id,
                    format!("Unknown role '{role}'"),
                ));
            }
        }

        for (i, range) in w.availability.iter().enumerate() {
            if let Some(err) = check_range(w.id, i, range) {
                errors.push(err);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Like [`validate_workers`], but as a crate error for `?` propagation.
pub fn ensure_valid(workers: &[Worker], catalogue: &[&str]) -> Result<(), RosterError> {
    validate_workers(workers, catalogue).map_err(RosterError::from)
}

fn check_range(worker_id: WorkerId, index: usize, range: &TimeRange) -> Option<ValidationError> {
    match (range.start, range.end) {
        (Some(start), Some(end)) if start > end => Some(ValidationError::new(
            ValidationErrorKind::InvertedRange,
            worker_id,
            format!("Range {index} ends ({end}) before it starts ({start})"),
        )),
        (Some(_), Some(_)) => None,
        (start, _) => Some(ValidationError::new(
            ValidationErrorKind::MalformedRange,
            worker_id,
            format!(
                "Range {index} has no readable {}",
                if start.is_none() { "start" } else { "end" }
            ),
        )),
    }
}
