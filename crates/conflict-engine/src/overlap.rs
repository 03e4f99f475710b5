//! Interval overlap predicate — the leaf every other component builds on.
//!
//! Adjacent events (one ends exactly when the other starts) are NOT
//! overlapping.

use crate::event::TimedEvent;

/// Whether two events share at least one instant.
///
/// Two half-open intervals `[a.start, a.end)` and `[b.start, b.end)` overlap
/// iff `a.start < b.end && b.start < a.end`. Pure and symmetric:
/// `events_overlap(a, b) == events_overlap(b, a)`.
pub fn events_overlap(a: &TimedEvent, b: &TimedEvent) -> bool {
    a.start < b.end && b.start < a.end
}
