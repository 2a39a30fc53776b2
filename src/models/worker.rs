//! Worker model.
//!
//! A worker is a person who can be placed on the daily schedule. Each
//! worker carries a set of role tags (e.g. `KITUP`, `MT`) and an
//! ordered list of availability windows.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::time_range::lenient_ranges;
use super::TimeRange;
use crate::evaluation::{self, AvailabilityStatus, EvaluationContext};

/// Worker identifier, as assigned by the worker store.
pub type WorkerId = u64;

/// A schedulable worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker identifier.
    pub id: WorkerId,
    /// Display name.
    pub name: String,
    /// Role tags.
    #[serde(default)]
    pub roles: BTreeSet<String>,
    /// Availability windows. Unsorted, may overlap, may be empty.
    #[serde(default, deserialize_with = "lenient_ranges")]
    pub availability: Vec<TimeRange>,
}

impl Worker {
    /// Creates a worker with no roles and no availability.
    pub fn new(id: WorkerId) -> Self {
        Self {
            id,
            name: String::new(),
            roles: BTreeSet::new(),
            availability: Vec::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a role tag.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    /// Appends an availability window.
    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.availability.push(range);
        self
    }

    /// Appends an availability window from two instants.
    pub fn with_window(self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        self.with_range(TimeRange::new(start, end))
    }

    /// Whether this worker carries a role tag.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Classifies this worker at the context's instant.
    pub fn status(&self, context: &EvaluationContext) -> AvailabilityStatus {
        evaluation::availability_status(&self.availability, context)
    }

    /// Today's matching window, if any.
    pub fn todays_active_range(&self, context: &EvaluationContext) -> Option<&TimeRange> {
        evaluation::todays_active_range(&self.availability, context)
    }

    /// Earliest window start at or after the context's instant.
    pub fn next_availability(&self, context: &EvaluationContext) -> Option<DateTime<FixedOffset>> {
        evaluation::next_availability(&self.availability, context)
    }
}
