//! Worker availability evaluation for daily shift planning.
//!
//! Tracks workers, their role tags and availability windows, and derives
//! from them who is on today, who is available next, and the order in
//! which workers appear on the printed daily schedule.
//!
//! # Modules
//!
//! - **`models`**: `TimeRange`, `Worker`, `WorkerList` and the lenient
//!   `parse_instant` helper
//! - **`evaluation`**: availability predicates against an explicit
//!   `EvaluationContext` (status, today's window, next start)
//! - **`ordering`**: composed display comparator (`WorkerOrdering`)
//! - **`roster`**: the daily roster view, role coverage and export rows
//! - **`validation`**: record checks (duplicate IDs, malformed ranges)
//!
//! # Time
//!
//! Nothing in this crate reads the system clock. Callers sample `now`
//! once per pass and pass it in through `EvaluationContext`.

pub mod error;
pub mod evaluation;
pub mod models;
pub mod ordering;
pub mod roster;
pub mod validation;

pub use error::RosterError;
pub use evaluation::{
    availability_status, is_available_today, next_availability, todays_active_range,
    AvailabilityStatus, ContainmentPolicy, EvaluationContext,
};
pub use models::{parse_instant, TimeRange, Worker, WorkerList};
pub use ordering::{order_workers, WorkerOrdering};
pub use roster::DailyRoster;
