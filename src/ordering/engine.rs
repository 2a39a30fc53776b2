//! Composed comparator over ordering keys.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use super::keys::{EarliestUpcoming, StatusRank};
use super::{AssessedWorker, OrderingKey};
use crate::evaluation::EvaluationContext;
use crate::models::Worker;

/// How ties are broken after all keys are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    Stable,
    /// Ascending worker id.
    ById,
    /// Ascending display name.
    ByName,
}

/// A composable worker comparator.
///
/// Every worker is assessed once per call; keys then compare the
/// cached assessments. Sorting is stable, so `TieBreaker::Stable`
/// leaves equal workers in input order.
///
/// # Example
/// ```
/// use u_roster::ordering::{keys, TieBreaker, WorkerOrdering};
///
/// let ordering = WorkerOrdering::new()
///     .with_key(keys::StatusRank)
///     .with_key(keys::EarliestUpcoming)
///     .with_tie_breaker(TieBreaker::ByName);
/// ```
#[derive(Clone, Default)]
pub struct WorkerOrdering {
    keys: Vec<Arc<dyn OrderingKey>>,
    tie_breaker: TieBreaker,
}

impl WorkerOrdering {
    /// Creates an ordering with no keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Status rank, then earliest upcoming start, then input order.
    pub fn standard() -> Self {
        Self::new().with_key(StatusRank).with_key(EarliestUpcoming)
    }

    /// Appends a key.
    pub fn with_key<K: OrderingKey + 'static>(mut self, key: K) -> Self {
        self.keys.push(Arc::new(key));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Compares two assessed workers key by key.
    pub fn compare(&self, a: &AssessedWorker<'_>, b: &AssessedWorker<'_>) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| match self.tie_breaker {
                TieBreaker::Stable => Ordering::Equal,
                TieBreaker::ById => a.worker.id.cmp(&b.worker.id),
                TieBreaker::ByName => a.worker.name.cmp(&b.worker.name),
            })
    }

    /// Assesses every worker once against the context.
    pub fn assess<'a>(
        &self,
        workers: &'a [Worker],
        context: &EvaluationContext,
    ) -> Vec<AssessedWorker<'a>> {
        workers
            .iter()
            .map(|w| AssessedWorker::new(w, context))
            .collect()
    }

    /// Sorts workers, returning indices into the input slice.
    pub fn sort_indices(&self, workers: &[Worker], context: &EvaluationContext) -> Vec<usize> {
        let assessed = self.assess(workers, context);
        let mut indices: Vec<usize> = (0..workers.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&assessed[a], &assessed[b]));
        event!(
            Level::TRACE,
            workers = workers.len(),
            keys = self.keys.len(),
            "ordered workers"
        );
        indices
    }

    /// Sorts workers, returning references in display order.
    pub fn sort<'a>(&self, workers: &'a [Worker], context: &EvaluationContext) -> Vec<&'a Worker> {
        self.sort_indices(workers, context)
            .into_iter()
            .map(|i| &workers[i])
            .collect()
    }

    /// Sorts already-assessed workers in place.
    pub fn sort_assessed(&self, assessed: &mut [AssessedWorker<'_>]) {
        assessed.sort_by(|a, b| self.compare(a, b));
    }

    /// The first worker in display order.
    pub fn select_first<'a>(
        &self,
        workers: &'a [Worker],
        context: &EvaluationContext,
    ) -> Option<&'a Worker> {
        self.sort_indices(workers, context)
            .first()
            .map(|&i| &workers[i])
    }
}

impl std::fmt::Debug for WorkerOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerOrdering")
            .field(
                "keys",
                &self.keys.iter().map(|k| k.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::keys;
    use crate::evaluation::AvailabilityStatus;
    use crate::models::TimeRange;
    use chrono::{DateTime, Duration, FixedOffset};
    use proptest::prelude::*;

    fn now() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2026-10-16T10:00:00Z").unwrap()
    }

    fn make_worker(id: u64, name: &str, offset_hours: Option<i64>) -> Worker {
        let w = Worker::new(id).with_name(name);
        match offset_hours {
            Some(h) => {
                let start = now() + Duration::hours(h);
                w.with_window(start, start + Duration::hours(8))
            }
            None => w,
        }
    }

    #[test]
    fn test_standard_ordering() {
        let workers = vec![
            make_worker(1, "none", None),
            make_worker(2, "in_two_days", Some(48)),
            make_worker(3, "now", Some(-2)),
            make_worker(4, "tomorrow", Some(24)),
        ];
        let ctx = EvaluationContext::at(now());
        let sorted = WorkerOrdering::standard().sort(&workers, &ctx);
        let names: Vec<&str> = sorted.iter().map(|w| w.name.as_str()).collect();

        assert_eq!(names, ["now", "tomorrow", "in_two_days", "none"]);
    }

    #[test]
    fn test_stable_ties() {
        let workers = vec![
            make_worker(9, "z", None),
            make_worker(1, "a", None),
            make_worker(5, "m", None),
        ];
        let ctx = EvaluationContext::at(now());

        assert_eq!(
            WorkerOrdering::standard().sort_indices(&workers, &ctx),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let workers = vec![make_worker(9, "z", None), make_worker(1, "a", None)];
        let ctx = EvaluationContext::at(now());
        let ordering = WorkerOrdering::standard().with_tie_breaker(TieBreaker::ById);

        assert_eq!(ordering.sort(&workers, &ctx)[0].id, 1);
    }

    #[test]
    fn test_by_name_tie_breaker() {
        let workers = vec![make_worker(1, "zed", Some(24)), make_worker(2, "amy", Some(24))];
        let ctx = EvaluationContext::at(now());
        let ordering = WorkerOrdering::standard().with_tie_breaker(TieBreaker::ByName);

        assert_eq!(ordering.sort(&workers, &ctx)[0].name, "amy");
    }

    #[test]
    fn test_custom_key_chain() {
        // Both active today; the longer window wins when LongestWindow follows StatusRank.
        let workers = vec![make_worker(1, "short", Some(-1)), {
            let start = now() - Duration::hours(4);
            Worker::new(2)
                .with_name("long")
                .with_window(start, start + Duration::hours(12))
        }];
        let ctx = EvaluationContext::at(now());
        let ordering = WorkerOrdering::new()
            .with_key(keys::StatusRank)
            .with_key(keys::LongestWindow);

        assert_eq!(ordering.select_first(&workers, &ctx).unwrap().name, "long");
    }

    #[test]
    fn test_no_keys_keeps_input_order() {
        let workers = vec![make_worker(1, "b", None), make_worker(2, "a", Some(1))];
        let ctx = EvaluationContext::at(now());
        assert_eq!(WorkerOrdering::new().sort_indices(&workers, &ctx), vec![0, 1]);
    }

    #[test]
    fn test_empty_workers() {
        let ctx = EvaluationContext::at(now());
        assert!(WorkerOrdering::standard().sort_indices(&[], &ctx).is_empty());
        assert!(WorkerOrdering::standard().select_first(&[], &ctx).is_none());
    }

    #[test]
    fn test_debug_lists_keys() {
        let dbg = format!("{:?}", WorkerOrdering::standard());
        assert!(dbg.contains("STATUS"));
        assert!(dbg.contains("NEXT"));
    }

    #[test]
    fn test_sort_assessed_in_place() {
        let workers = vec![make_worker(1, "later", Some(30)), make_worker(2, "sooner", Some(20))];
        let ctx = EvaluationContext::at(now());
        let ordering = WorkerOrdering::standard();
        let mut assessed = ordering.assess(&workers, &ctx);
        ordering.sort_assessed(&mut assessed);

        assert_eq!(assessed[0].worker.name, "sooner");
    }

    fn arb_workers() -> impl Strategy<Value = Vec<Worker>> {
        // Offsets in hours around `now`; None = no availability, Some(-200) = past only.
        prop::collection::vec(prop::option::of(-200i64..200), 0..24).prop_map(|offsets| {
            offsets
                .into_iter()
                .enumerate()
                .map(|(i, h)| make_worker(i as u64, &format!("w{i}"), h))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_sort_is_idempotent(workers in arb_workers()) {
            let ctx = EvaluationContext::at(now());
            let ordering = WorkerOrdering::standard();
            prop_assert_eq!(
                ordering.sort_indices(&workers, &ctx),
                ordering.sort_indices(&workers, &ctx)
            );
        }

        #[test]
        fn prop_sort_is_stable(workers in arb_workers()) {
            let ctx = EvaluationContext::at(now());
            let ordering = WorkerOrdering::standard();
            let assessed = ordering.assess(&workers, &ctx);
            let indices = ordering.sort_indices(&workers, &ctx);

            for pair in indices.windows(2) {
                let (a, b) = (&assessed[pair[0]], &assessed[pair[1]]);
                prop_assert_ne!(ordering.compare(a, b), Ordering::Greater);
                if ordering.compare(a, b) == Ordering::Equal {
                    prop_assert!(pair[0] < pair[1]);
                }
            }
        }

        #[test]
        fn prop_malformed_workers_sort_last(
            workers in arb_workers(),
            garbage in prop::collection::vec(
                ("[a-z :-]{0,16}", prop::option::of("[a-z ]{0,8}")),
                1..6,
            ),
        ) {
            let ctx = EvaluationContext::at(now());
            let first_broken = workers.len() as u64;
            let mut all = workers;
            for (i, (start, end)) in garbage.iter().enumerate() {
                let end = end.clone().unwrap_or_else(|| now().to_rfc3339());
                all.push(
                    Worker::new(first_broken + i as u64)
                        .with_name(format!("broken{i}"))
                        .with_range(TimeRange::parse(start, &end)),
                );
            }

            let sorted = WorkerOrdering::standard().sort(&all, &ctx);
            prop_assert_eq!(sorted.len(), all.len());
            let first_broken_pos = sorted
                .iter()
                .position(|w| w.id >= first_broken)
                .unwrap();
            // Only other unavailable workers may follow a malformed one.
            for w in &sorted[first_broken_pos..] {
                prop_assert_eq!(w.status(&ctx), AvailabilityStatus::Unavailable);
            }
            // Malformed workers keep input order among themselves.
            let broken_ids: Vec<u64> = sorted
                .iter()
                .map(|w| w.id)
                .filter(|&id| id >= first_broken)
                .collect();
            prop_assert!(broken_ids.windows(2).all(|p| p[0] < p[1]));
        }

        #[test]
        fn prop_status_groups_are_contiguous(workers in arb_workers()) {
            let ctx = EvaluationContext::at(now());
            let ranks: Vec<u8> = WorkerOrdering::standard()
                .sort(&workers, &ctx)
                .iter()
                .map(|w| w.status(&ctx).rank())
                .collect();
            prop_assert!(ranks.windows(2).all(|p| p[0] <= p[1]));
        }
    }

    #[test]
    fn test_sorted_ranges_do_not_change_status() {
        let w = Worker::new(1)
            .with_range(TimeRange::parse("2026-10-20T08:00:00Z", "2026-10-20T16:00:00Z"))
            .with_range(TimeRange::parse("2026-10-16T08:00:00Z", "2026-10-16T16:00:00Z"));
        let ctx = EvaluationContext::at(now());
        let a = AssessedWorker::new(&w, &ctx);
        assert_eq!(a.assessment.active, Some(&w.availability[1]));
    }
}
