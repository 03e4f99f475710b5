//! Event and priority types, plus wire-format parsing.
//!
//! `TimedEvent` is the only entity the engine operates on. Instances are
//! built by the storage layer per request; the engine reads them and never
//! mutates them.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Priority level attached to an event: 1 (lowest) to 5 (highest).
///
/// Events may arrive without a stated level. `Unset` keeps that fact around
/// until a comparison actually needs a number, at which point
/// [`Priority::effective`] substitutes the medium default. Normalization
/// happens in exactly these two places; nothing else in the engine reads the
/// raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum Priority {
    /// An explicitly stated level in `[1, 5]`.
    Explicit(u8),
    /// No level stated; compares as [`Priority::DEFAULT_LEVEL`].
    #[default]
    Unset,
}

impl Priority {
    /// The level an unset priority compares as (medium).
    pub const DEFAULT_LEVEL: u8 = 3;
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 5;

    /// Normalize a raw wire value. Absent values and anything outside
    /// `[1, 5]` become `Unset` — malformed priorities are defaulted, never
    /// rejected.
    pub fn from_raw(raw: Option<i64>) -> Self {
        match raw {
            Some(level) if (Self::MIN_LEVEL as i64..=Self::MAX_LEVEL as i64).contains(&level) => {
                Priority::Explicit(level as u8)
            }
            _ => Priority::Unset,
        }
    }

    /// The level used in comparisons: the stated one, or the default.
    pub fn effective(self) -> u8 {
        match self {
            Priority::Explicit(level) => level,
            Priority::Unset => Self::DEFAULT_LEVEL,
        }
    }
}

impl From<Option<i64>> for Priority {
    fn from(raw: Option<i64>) -> Self {
        Priority::from_raw(raw)
    }
}

impl From<Priority> for Option<i64> {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Explicit(level) => Some(level as i64),
            Priority::Unset => None,
        }
    }
}

/// A time-boxed calendar event as seen by the engine.
///
/// The interval is half-open `[start, end)`. Callers guarantee
/// `end >= start`; the engine does not enforce it. `calendar_id` is carried
/// through untouched for the caller's visibility filtering and never affects
/// overlap or priority logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedEvent {
    /// Opaque identifier; two events are the same event iff their ids are
    /// equal as strings.
    pub id: String,
    /// Opaque grouping key — which calendar the event lives on.
    pub calendar_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
}

impl TimedEvent {
    /// Build an event from wire data.
    ///
    /// Datetimes may be RFC 3339 ("2026-03-01T09:00:00Z") or naive
    /// ("2026-03-01T09:00:00"), the latter interpreted as UTC. The raw
    /// priority goes through [`Priority::from_raw`] and never causes a
    /// failure.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidTimestamp` if either datetime string
    /// cannot be parsed.
    pub fn parse(
        id: impl Into<String>,
        calendar_id: impl Into<String>,
        start: &str,
        end: &str,
        raw_priority: Option<i64>,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            calendar_id: calendar_id.into(),
            start: parse_datetime(start)?,
            end: parse_datetime(end)?,
            priority: Priority::from_raw(raw_priority),
        })
    }

    /// The priority level this event compares at.
    pub fn effective_priority(&self) -> u8 {
        self.priority.effective()
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-01T09:00:00Z")
/// and naive datetime (e.g., "2026-03-01T09:00:00"), which is interpreted as
/// UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    // Try RFC 3339 first (has timezone info).
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Fall back to naive datetime interpreted as UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| ScheduleError::InvalidTimestamp {
            value: s.to_string(),
            detail: e.to_string(),
        })
}
