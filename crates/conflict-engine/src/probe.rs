//! Time-range probe — find events that would collide with a proposed slot
//! before the event itself exists.
//!
//! Backs the pre-save conflict check in event forms: the UI sends a start,
//! an end, and the calendars in view, and gets back the events already
//! occupying that range.

use chrono::{DateTime, Utc};

use crate::event::TimedEvent;

/// Events on any of `calendar_ids` overlapping the half-open window
/// `[window_start, window_end)`, in input order.
///
/// An empty `calendar_ids` slice matches every calendar. The window follows
/// the engine's one overlap definition: an event ending exactly at
/// `window_start` (or starting exactly at `window_end`) is not returned.
pub fn events_in_window<'a>(
    events: &'a [TimedEvent],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    calendar_ids: &[&str],
) -> Vec<&'a TimedEvent> {
    events
        .iter()
        .filter(|e| calendar_ids.is_empty() || calendar_ids.contains(&e.calendar_id.as_str()))
        .filter(|e| e.start < window_end && window_start < e.end)
        .collect()
}
