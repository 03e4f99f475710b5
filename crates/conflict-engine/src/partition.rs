//! Greedy priority partitioning of a rendered view's events.
//!
//! Splits a set of events into a foreground `resolved` layer and a
//! de-emphasized `suppressed` layer. A single "current winner" is carried
//! through one pass over the events in a fixed order; overlapping events
//! displace each other by effective priority. This is a display heuristic,
//! not weighted interval scheduling — each event is compared against the
//! current winner only, never against the whole overlap set.

use std::cmp::Ordering;

use serde::Serialize;

use crate::event::TimedEvent;
use crate::overlap::events_overlap;

/// The two display layers produced by [`partition`].
///
/// Every input event lands in exactly one of the two sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Partition<'a> {
    /// Events displayed normally (foreground).
    pub resolved: Vec<&'a TimedEvent>,
    /// Events displaced by a higher-priority overlap (dimmed, not hidden).
    pub suppressed: Vec<&'a TimedEvent>,
}

/// Partition `events` into resolved and suppressed display layers.
///
/// Events are scanned in a deterministic total order: ascending start, then
/// descending effective priority, then input position (the sort is stable).
/// A current winner is carried through the scan:
///
/// - an event that does not overlap the winner ends the winner's run — the
///   winner goes to `resolved` and the event takes its place;
/// - a lower-priority overlap goes to `suppressed`;
/// - a higher-priority overlap displaces the winner into `suppressed` and
///   becomes the new winner;
/// - an equal-priority overlap keeps both events resolved; the later-ending
///   of the two carries the run forward (on an exact end tie the current
///   winner is kept).
///
/// After the scan the final winner goes to `resolved`. Empty input yields
/// two empty sets. Output order is emission order, which is deterministic
/// for a given input but not guaranteed chronological.
pub fn partition(events: &[TimedEvent]) -> Partition<'_> {
    let mut ordered: Vec<&TimedEvent> = events.iter().collect();
    ordered.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.effective_priority().cmp(&a.effective_priority()))
    });

    let mut scan = ordered.into_iter();
    let Some(mut winner) = scan.next() else {
        return Partition::default();
    };

    let mut resolved: Vec<&TimedEvent> = Vec::new();
    let mut suppressed: Vec<&TimedEvent> = Vec::new();

    for event in scan {
        if !events_overlap(winner, event) {
            // Sorted by start, so nothing after `event` can reach back and
            // overlap the winner either.
            resolved.push(winner);
            winner = event;
            continue;
        }

        match event.effective_priority().cmp(&winner.effective_priority()) {
            Ordering::Less => suppressed.push(event),
            Ordering::Greater => {
                suppressed.push(winner);
                winner = event;
            }
            Ordering::Equal => {
                if event.end > winner.end {
                    resolved.push(winner);
                    winner = event;
                } else {
                    resolved.push(event);
                }
            }
        }
    }

    resolved.push(winner);

    Partition {
        resolved,
        suppressed,
    }
}
