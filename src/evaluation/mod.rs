//! Availability evaluation.
//!
//! Pure functions over a worker's availability windows. Each function
//! takes the ranges and an [`EvaluationContext`]; nothing here reads the
//! clock or mutates its inputs.
//!
//! # Usage
//!
//! ```
//! use chrono::DateTime;
//! use u_roster::evaluation::{availability_status, AvailabilityStatus, EvaluationContext};
//! use u_roster::models::TimeRange;
//!
//! let now = DateTime::parse_from_rfc3339("2026-10-16T10:00:00Z").unwrap();
//! let ctx = EvaluationContext::at(now);
//! let ranges = vec![TimeRange::parse("2026-10-17T09:00:00Z", "2026-10-17T17:00:00Z")];
//!
//! assert_eq!(availability_status(&ranges, &ctx), AvailabilityStatus::Upcoming);
//! ```
//!
//! # Malformed ranges
//! A range whose start or end is absent, or whose start is after its
//! end, never matches "today". For [`next_availability`] only a readable
//! start is required.

mod context;

pub use context::{ContainmentPolicy, EvaluationContext};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::models::TimeRange;

/// Availability classification of one worker at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    /// A window matches today.
    ActiveToday,
    /// Nothing today, but a window starts later.
    Upcoming,
    /// Neither.
    #[serde(rename = "NONE")]
    Unavailable,
}

impl AvailabilityStatus {
    /// Display rank: lower sorts first.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            AvailabilityStatus::ActiveToday => 0,
            AvailabilityStatus::Upcoming => 1,
            AvailabilityStatus::Unavailable => 2,
        }
    }
}

/// One worker's availability, computed once per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment<'a> {
    /// Derived status.
    pub status: AvailabilityStatus,
    /// First range matching today.
    pub active: Option<&'a TimeRange>,
    /// Earliest start at or after `now`.
    pub next: Option<DateTime<FixedOffset>>,
}

impl<'a> Assessment<'a> {
    /// Evaluates both primitives and derives the status.
    pub fn of(ranges: &'a [TimeRange], context: &EvaluationContext) -> Self {
        let active = todays_active_range(ranges, context);
        let next = next_availability(ranges, context);
        Self {
            status: classify(active.is_some(), next.is_some()),
            active,
            next,
        }
    }
}

fn classify(active: bool, upcoming: bool) -> AvailabilityStatus {
    if active {
        AvailabilityStatus::ActiveToday
    } else if upcoming {
        AvailabilityStatus::Upcoming
    } else {
        AvailabilityStatus::Unavailable
    }
}

fn matches_today(range: &TimeRange, context: &EvaluationContext) -> bool {
    match context.policy {
        ContainmentPolicy::DayBoundary => range.overlaps_day_of(context.now),
        ContainmentPolicy::Instant => range.contains(context.now),
    }
}

/// Whether at least one range matches today.
pub fn is_available_today(ranges: &[TimeRange], context: &EvaluationContext) -> bool {
    todays_active_range(ranges, context).is_some()
}

/// Today's window: the first range, in input order, that contains `now`.
///
/// Under `DayBoundary`, when no range contains `now`, falls back to the
/// first range that overlaps today (a shift later today, or one that
/// already ended). Ranges may overlap; the earlier index wins so the
/// result is deterministic for unsorted input.
pub fn todays_active_range<'a>(
    ranges: &'a [TimeRange],
    context: &EvaluationContext,
) -> Option<&'a TimeRange> {
    let mut first_today = None;
    for range in ranges {
        if !range.is_well_formed() {
            event!(
                Level::DEBUG,
                start = ?range.start,
                end = ?range.end,
                "ignoring malformed availability range"
            );
            continue;
        }
        if range.contains(context.now) {
            return Some(range);
        }
        if first_today.is_none() && matches_today(range, context) {
            first_today = Some(range);
        }
    }
    first_today
}

/// Earliest `start` among ranges starting at or after `now`.
///
/// Ranges with an unreadable start are skipped.
pub fn next_availability(
    ranges: &[TimeRange],
    context: &EvaluationContext,
) -> Option<DateTime<FixedOffset>> {
    ranges
        .iter()
        .filter_map(|r| r.start)
        .filter(|start| *start >= context.now)
        .min()
}

/// Classifies ranges as active today, upcoming, or unavailable.
pub fn availability_status(ranges: &[TimeRange], context: &EvaluationContext) -> AvailabilityStatus {
    Assessment::of(ranges, context).status
}
