//! Daily roster view.
//!
//! Builds the printable schedule for the day of the evaluation instant:
//! workers in display order, today's window per worker, role coverage
//! and shortfall against a requested headcount.
//!
//! # Export columns
//!
//! | Column | Content |
//! |--------|---------|
//! | Name | Worker display name |
//! | Roles | Role tags joined by `", "` |
//! | Availability | Today's window, next start, or `unavailable` |

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{event, Level};

use crate::evaluation::{AvailabilityStatus, EvaluationContext};
use crate::models::{TimeRange, Worker, WorkerId};
use crate::ordering::WorkerOrdering;

/// Header row of the exported schedule.
pub const EXPORT_HEADER: [&str; 3] = ["Name", "Roles", "Availability"];

/// One line of the daily roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Worker identifier.
    pub worker_id: WorkerId,
    /// Display name.
    pub name: String,
    /// Role tags, sorted.
    pub roles: Vec<String>,
    /// Status at the roster instant.
    pub status: AvailabilityStatus,
    /// Today's window, if active.
    pub window: Option<TimeRange>,
    /// Next window start, if any.
    pub next_available: Option<DateTime<FixedOffset>>,
}

impl RosterEntry {
    /// Human-readable availability cell.
    pub fn availability_text(&self) -> String {
        match self.status {
            AvailabilityStatus::ActiveToday => self
                .window
                .as_ref()
                .and_then(|w| w.bounds())
                .map(|(start, end)| format_window(start, end))
                .unwrap_or_else(|| "today".to_string()),
            AvailabilityStatus::Upcoming => match self.next_available {
                Some(next) => format!("from {}", next.format("%Y-%m-%d %H:%M")),
                None => "upcoming".to_string(),
            },
            AvailabilityStatus::Unavailable => "unavailable".to_string(),
        }
    }
}

fn format_window(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> String {
    if start.date_naive() == end.date_naive() {
        format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
    } else {
        format!(
            "{} - {}",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// The schedule for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyRoster {
    /// Calendar day of the roster instant, in its offset.
    pub date: NaiveDate,
    /// Entries in display order.
    pub entries: Vec<RosterEntry>,
}

impl DailyRoster {
    /// Builds the roster with the standard display ordering.
    pub fn build(workers: &[Worker], context: &EvaluationContext) -> Self {
        Self::build_with(workers, context, &WorkerOrdering::standard())
    }

    /// Builds the roster with a custom ordering.
    pub fn build_with(
        workers: &[Worker],
        context: &EvaluationContext,
        ordering: &WorkerOrdering,
    ) -> Self {
        let mut assessed = ordering.assess(workers, context);
        ordering.sort_assessed(&mut assessed);

        let entries: Vec<RosterEntry> = assessed
            .into_iter()
            .map(|a| RosterEntry {
                worker_id: a.worker.id,
                name: a.worker.name.clone(),
                roles: a.worker.roles.iter().cloned().collect(),
                status: a.assessment.status,
                window: a.assessment.active.cloned(),
                next_available: a.assessment.next,
            })
            .collect();

        let roster = Self {
            date: context.now.date_naive(),
            entries,
        };
        event!(
            Level::INFO,
            date = %roster.date,
            workers = roster.entries.len(),
            active = roster.active().count(),
            "built daily roster"
        );
        roster
    }

    /// Entries active today, in display order.
    pub fn active(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == AvailabilityStatus::ActiveToday)
    }

    /// Number of entries per status.
    pub fn status_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for e in &self.entries {
            let key = match e.status {
                AvailabilityStatus::ActiveToday => "active_today",
                AvailabilityStatus::Upcoming => "upcoming",
                AvailabilityStatus::Unavailable => "none",
            };
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    /// Active workers per role tag.
    pub fn coverage(&self) -> BTreeMap<String, usize> {
        let mut coverage = BTreeMap::new();
        for e in self.active() {
            for role in &e.roles {
                *coverage.entry(role.clone()).or_insert(0) += 1;
            }
        }
        coverage
    }

    /// Missing active workers per requested role.
    ///
    /// Roles whose headcount is met are omitted.
    pub fn shortfall(&self, headcount: &BTreeMap<String, usize>) -> BTreeMap<String, usize> {
        let coverage = self.coverage();
        headcount
            .iter()
            .filter_map(|(role, &wanted)| {
                let have = coverage.get(role).copied().unwrap_or(0);
                (wanted > have).then(|| (role.clone(), wanted - have))
            })
            .collect()
    }

    /// Export rows, header first.
    pub fn rows(&self) -> Vec<[String; 3]> {
        std::iter::once(EXPORT_HEADER.map(String::from))
            .chain(self.entries.iter().map(|e| {
                [
                    e.name.clone(),
                    e.roles.join(", "),
                    e.availability_text(),
                ]
            }))
            .collect()
    }
}
