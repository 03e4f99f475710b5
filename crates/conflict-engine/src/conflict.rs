//! Conflict discovery against a candidate event, plus the write-path policy
//! that classifies each conflict as blocking or advisory.

use serde::Serialize;

use crate::event::TimedEvent;
use crate::overlap::events_overlap;

/// Find every stored event that overlaps `candidate`.
///
/// Events whose id equals the candidate's are excluded first, so updating an
/// event never conflicts with its own stored state. Input order is
/// preserved; priorities are not consulted. Always returns (a possibly
/// empty) list.
pub fn find_conflicts<'a>(
    candidate: &TimedEvent,
    existing: &'a [TimedEvent],
) -> Vec<&'a TimedEvent> {
    existing
        .iter()
        .filter(|event| event.id != candidate.id)
        .filter(|event| events_overlap(candidate, event))
        .collect()
}

/// Outcome of the write-path conflict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteVerdict {
    /// No conflicts at all.
    Ok,
    /// Only equal- or lower-priority conflicts; the write proceeds and the
    /// conflicts are reported alongside it.
    Warning,
    /// At least one strictly higher-priority conflict; the write is rejected.
    Conflict,
}

/// Conflicts split by the priority policy: a conflict blocks iff its
/// effective priority is strictly greater than the candidate's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteAssessment<'a> {
    pub blocking: Vec<&'a TimedEvent>,
    pub warnings: Vec<&'a TimedEvent>,
}

impl WriteAssessment<'_> {
    pub fn verdict(&self) -> WriteVerdict {
        if !self.blocking.is_empty() {
            WriteVerdict::Conflict
        } else if !self.warnings.is_empty() {
            WriteVerdict::Warning
        } else {
            WriteVerdict::Ok
        }
    }
}

/// Run [`find_conflicts`] and classify the result against the candidate.
///
/// Both sides compare at their effective priority (unset is medium). Order
/// within each bucket follows the input order of `existing`.
pub fn assess_write<'a>(
    candidate: &TimedEvent,
    existing: &'a [TimedEvent],
) -> WriteAssessment<'a> {
    let candidate_level = candidate.effective_priority();
    let (blocking, warnings) = find_conflicts(candidate, existing)
        .into_iter()
        .partition(|conflict| conflict.effective_priority() > candidate_level);

    WriteAssessment { blocking, warnings }
}
