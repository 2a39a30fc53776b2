//! Availability windows and instant parsing.
//!
//! A [`TimeRange`] is one contiguous window during which a worker can be
//! scheduled. Bounds are timezone-aware instants. Values that cannot be
//! read as an instant are held as `None` instead of failing, so a single
//! bad record never poisons a whole worker list.
//!
//! # Accepted instant forms
//! - RFC 3339 strings (`2026-10-16T08:00:00.000Z`)
//! - RFC 2822 strings (`Fri, 16 Oct 2026 08:00:00 GMT`)
//! - Integer epoch milliseconds
//!
//! Anything else (`null`, `""`, booleans, free text) is absent.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Reads an instant from a raw JSON value.
///
/// This is the only place where the malformed-input policy is defined.
/// Every range predicate goes through it (via deserialization or
/// [`TimeRange::parse`]).
pub fn parse_instant(value: &Value) -> Option<DateTime<FixedOffset>> {
    match value {
        Value::String(raw) => parse_instant_str(raw),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.fixed_offset()),
        _ => None,
    }
}

/// Reads an instant from a string. See [`parse_instant`].
pub fn parse_instant_str(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
}

/// Reads an availability list from a raw JSON value.
///
/// Anything that is not an array (including `null`) is an empty list;
/// each element goes through [`TimeRange::from_value`].
pub fn parse_ranges(value: &Value) -> Vec<TimeRange> {
    match value {
        Value::Array(items) => items.iter().map(TimeRange::from_value).collect(),
        _ => Vec::new(),
    }
}

pub(crate) fn lenient_ranges<'de, D>(deserializer: D) -> Result<Vec<TimeRange>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse_ranges(&value))
}

/// Calendar-day bounds of `instant`, in its own UTC offset.
///
/// Returns `[00:00:00, 23:59:59.999999999]`. `None` only when the day
/// lies at the edge of the representable range.
pub fn day_bounds(
    instant: DateTime<FixedOffset>,
) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
    let offset = *instant.offset();
    let midnight = instant.date_naive().and_hms_opt(0, 0, 0)?;
    let start = midnight.and_local_timezone(offset).single()?;
    let end = start
        .checked_add_signed(Duration::days(1))?
        .checked_sub_signed(Duration::nanoseconds(1))?;
    Some((start, end))
}

/// An availability window `[start, end]`, inclusive on both ends.
///
/// Deserializes from any JSON value: an object's `start`/`end` go
/// through [`parse_instant`], and any other value is a range with both
/// bounds absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    /// Window start. `None` if the stored value was not a date.
    pub start: Option<DateTime<FixedOffset>>,
    /// Window end. `None` if the stored value was not a date.
    pub end: Option<DateTime<FixedOffset>>,
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl TimeRange {
    /// Creates a range from two known instants.
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Creates a range from raw strings, degrading unreadable bounds to `None`.
    pub fn parse(start: &str, end: &str) -> Self {
        Self {
            start: parse_instant_str(start),
            end: parse_instant_str(end),
        }
    }

    /// Creates a range from a stored JSON entry, degrading anything
    /// unreadable to absent bounds.
    pub fn from_value(value: &Value) -> Self {
        let bound = |key: &str| value.get(key).and_then(parse_instant);
        match value {
            Value::Object(_) => Self {
                start: bound("start"),
                end: bound("end"),
            },
            _ => Self {
                start: None,
                end: None,
            },
        }
    }

    /// Both bounds, if both are present and `start <= end`.
    pub fn bounds(&self) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start <= end => Some((start, end)),
            _ => None,
        }
    }

    /// Whether both bounds are present and ordered.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.bounds().is_some()
    }

    /// Whether `instant` falls within `[start, end]`.
    pub fn contains(&self, instant: DateTime<FixedOffset>) -> bool {
        self.bounds()
            .is_some_and(|(start, end)| start <= instant && instant <= end)
    }

    /// Whether this range overlaps the calendar day of `instant`.
    ///
    /// Uses floor/ceiling day bounds and inclusive comparisons, so a
    /// window later in the same day counts as well as one that contains
    /// `instant` itself.
    pub fn overlaps_day_of(&self, instant: DateTime<FixedOffset>) -> bool {
        let Some((start, end)) = self.bounds() else {
            return false;
        };
        match day_bounds(instant) {
            Some((day_start, day_end)) => start <= day_end && end >= day_start,
            None => false,
        }
    }

    /// Window length, if well-formed.
    pub fn duration(&self) -> Option<Duration> {
        self.bounds().map(|(start, end)| end - start)
    }
}
