//! Evaluation context for availability predicates.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// How "available today" is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentPolicy {
    /// The range overlaps the calendar day of `now` (00:00 to 23:59:59.999999999
    /// in `now`'s offset), compared inclusively.
    #[default]
    DayBoundary,
    /// The range contains `now` itself: `start <= now <= end`.
    Instant,
}

/// State shared by every predicate in one evaluation pass.
///
/// `now` is sampled once by the caller and reused for every range, so
/// all workers in a pass are judged against the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    /// The instant all ranges are judged against.
    pub now: DateTime<FixedOffset>,
    /// Containment rule for "today".
    pub policy: ContainmentPolicy,
}

impl EvaluationContext {
    /// Creates a context at `now` with the default day-boundary policy.
    pub fn at(now: impl Into<DateTime<FixedOffset>>) -> Self {
        Self {
            now: now.into(),
            policy: ContainmentPolicy::default(),
        }
    }

    /// Sets the containment policy.
    pub fn with_policy(mut self, policy: ContainmentPolicy) -> Self {
        self.policy = policy;
        self
    }
}
