//! Roster domain models.
//!
//! Provides the data types the availability evaluator reads: workers,
//! their availability windows, and the list payload served by the
//! worker store.
//!
//! # Time Model
//! All instants are `chrono::DateTime<FixedOffset>`. Unreadable stored
//! values are kept as `None` and treated as absent by every predicate.

mod time_range;
mod worker;
mod worker_list;

pub use time_range::{day_bounds, parse_instant, parse_instant_str, parse_ranges, TimeRange};
pub use worker::{Worker, WorkerId};
pub use worker_list::WorkerList;
