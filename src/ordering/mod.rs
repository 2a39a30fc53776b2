//! Display ordering for worker collections.
//!
//! Workers are compared through a chain of [`OrderingKey`]s. Each key
//! looks at one property of a precomputed [`AssessedWorker`]; the
//! [`WorkerOrdering`] engine applies them in sequence and falls back to
//! a final [`TieBreaker`] when all keys tie.
//!
//! # Usage
//!
//! ```
//! use chrono::DateTime;
//! use u_roster::evaluation::EvaluationContext;
//! use u_roster::models::{TimeRange, Worker};
//! use u_roster::ordering::{keys, WorkerOrdering};
//!
//! let now = DateTime::parse_from_rfc3339("2026-10-16T10:00:00Z").unwrap();
//! let ctx = EvaluationContext::at(now);
//! let workers = vec![
//!     Worker::new(1).with_name("later")
//!         .with_range(TimeRange::parse("2026-10-18T09:00:00Z", "2026-10-18T17:00:00Z")),
//!     Worker::new(2).with_name("today")
//!         .with_range(TimeRange::parse("2026-10-16T08:00:00Z", "2026-10-16T16:00:00Z")),
//! ];
//!
//! let ordering = WorkerOrdering::new()
//!     .with_key(keys::StatusRank)
//!     .with_key(keys::EarliestUpcoming);
//! let sorted = ordering.sort(&workers, &ctx);
//! assert_eq!(sorted[0].name, "today");
//! ```

mod engine;
pub mod keys;

pub use engine::{TieBreaker, WorkerOrdering};

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::evaluation::{Assessment, EvaluationContext};
use crate::models::Worker;

/// A worker paired with its availability assessment for one pass.
#[derive(Debug, Clone, Copy)]
pub struct AssessedWorker<'a> {
    /// The worker record.
    pub worker: &'a Worker,
    /// Status, active window and next start at the pass instant.
    pub assessment: Assessment<'a>,
}

impl<'a> AssessedWorker<'a> {
    /// Assesses one worker.
    pub fn new(worker: &'a Worker, context: &EvaluationContext) -> Self {
        Self {
            worker,
            assessment: Assessment::of(&worker.availability, context),
        }
    }
}

/// One component of a composed worker comparator.
///
/// Returning `Ordering::Equal` defers to the next key.
pub trait OrderingKey: Send + Sync + Debug {
    /// Key name (e.g. "STATUS").
    fn name(&self) -> &'static str;

    /// Compares two assessed workers on this key alone.
    fn compare(&self, a: &AssessedWorker<'_>, b: &AssessedWorker<'_>) -> Ordering;

    /// Key description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Orders workers for display: active today first, then upcoming by
/// next start, then unavailable. Ties keep input order.
pub fn order_workers<'a>(workers: &'a [Worker], context: &EvaluationContext) -> Vec<&'a Worker> {
    WorkerOrdering::standard().sort(workers, context)
}
