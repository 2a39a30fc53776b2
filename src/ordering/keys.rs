//! Built-in ordering keys.
//!
//! All keys sort "more available" workers first.

use std::cmp::Ordering;

use super::{AssessedWorker, OrderingKey};
use crate::evaluation::AvailabilityStatus;

/// Status rank: active today, then upcoming, then unavailable.
#[derive(Debug, Clone, Copy)]
pub struct StatusRank;

impl OrderingKey for StatusRank {
    fn name(&self) -> &'static str {
        "STATUS"
    }

    fn compare(&self, a: &AssessedWorker<'_>, b: &AssessedWorker<'_>) -> Ordering {
        a.assessment
            .status
            .rank()
            .cmp(&b.assessment.status.rank())
    }

    fn description(&self) -> &'static str {
        "Active today, then upcoming, then unavailable"
    }
}

/// Earliest next start among upcoming workers.
///
/// Only upcoming workers carry a key; everyone else compares equal, so
/// workers active today keep their relative order even if they also
/// have future windows.
#[derive(Debug, Clone, Copy)]
pub struct EarliestUpcoming;

impl OrderingKey for EarliestUpcoming {
    fn name(&self) -> &'static str {
        "NEXT"
    }

    fn compare(&self, a: &AssessedWorker<'_>, b: &AssessedWorker<'_>) -> Ordering {
        match (upcoming_start(a), upcoming_start(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn description(&self) -> &'static str {
        "Earliest upcoming availability"
    }
}

fn upcoming_start(w: &AssessedWorker<'_>) -> Option<chrono::DateTime<chrono::FixedOffset>> {
    match w.assessment.status {
        AvailabilityStatus::Upcoming => w.assessment.next,
        _ => None,
    }
}

/// Longest window today first.
///
/// Useful as a secondary key when assigning active workers to long shifts.
#[derive(Debug, Clone, Copy)]
pub struct LongestWindow;

impl OrderingKey for LongestWindow {
    fn name(&self) -> &'static str {
        "LONGEST"
    }

    fn compare(&self, a: &AssessedWorker<'_>, b: &AssessedWorker<'_>) -> Ordering {
        let len = |w: &AssessedWorker<'_>| w.assessment.active.and_then(|r| r.duration());
        // Reversed: longer first, workers without a window last.
        match (len(a), len(b)) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    fn description(&self) -> &'static str {
        "Longest window today"
    }
}
