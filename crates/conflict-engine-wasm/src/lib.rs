//! WASM bindings for conflict-engine.
//!
//! Exposes conflict discovery, write-path assessment, priority partitioning,
//! and the time-range probe to JavaScript via `wasm-bindgen`. All complex
//! types are passed as JSON strings; event objects use the web app's field
//! names (`_id`/`id`, `calendarId`, `startTime`, `endTime`, `priority`).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p conflict-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/conflict-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/conflict_engine_wasm.wasm
//! ```

use conflict_engine::event::TimedEvent;
use conflict_engine::{WriteAssessment, WriteVerdict};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript.
///
/// `_id` (the storage layer's name) is accepted as an alias for `id`; a
/// brand-new event may omit the id entirely, in which case self-exclusion
/// simply never matches a stored event.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventInput {
    #[serde(default, alias = "_id")]
    id: String,
    #[serde(default)]
    calendar_id: String,
    start_time: String,
    end_time: String,
    #[serde(default)]
    priority: Option<i64>,
}

impl EventInput {
    fn into_event(self) -> Result<TimedEvent, String> {
        TimedEvent::parse(
            self.id,
            self.calendar_id,
            &self.start_time,
            &self.end_time,
            self.priority,
        )
        .map_err(|e| e.to_string())
    }
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDto {
    id: String,
    calendar_id: String,
    start_time: String,
    end_time: String,
    priority: Option<i64>,
}

impl From<&TimedEvent> for EventDto {
    fn from(e: &TimedEvent) -> Self {
        Self {
            id: e.id.clone(),
            calendar_id: e.calendar_id.clone(),
            start_time: e.start.to_rfc3339(),
            end_time: e.end.to_rfc3339(),
            priority: e.priority.into(),
        }
    }
}

/// Response shape for `checkWrite`: `error` when the write is rejected,
/// `warning` when it proceeds with conflicts, neither when the slot is
/// clean. `conflicts` carries the events the verdict is based on.
#[derive(Debug, PartialEq, Serialize)]
struct CheckWriteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
    conflicts: Vec<EventDto>,
}

#[derive(Debug, PartialEq, Serialize)]
struct PartitionResponse {
    resolved: Vec<EventDto>,
    suppressed: Vec<EventDto>,
}

// ---------------------------------------------------------------------------
// Fallible helpers — kept off JsValue so they stay natively testable
// ---------------------------------------------------------------------------

fn parse_event_json(json: &str) -> Result<TimedEvent, String> {
    let input: EventInput =
        serde_json::from_str(json).map_err(|e| format!("Invalid event JSON: {}", e))?;
    input.into_event()
}

fn parse_events_json(json: &str) -> Result<Vec<TimedEvent>, String> {
    let inputs: Vec<EventInput> =
        serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))?;
    inputs.into_iter().map(EventInput::into_event).collect()
}

fn dtos(events: &[&TimedEvent]) -> Vec<EventDto> {
    events.iter().map(|e| EventDto::from(*e)).collect()
}

fn check_write_response(assessment: &WriteAssessment<'_>) -> CheckWriteResponse {
    match assessment.verdict() {
        WriteVerdict::Conflict => CheckWriteResponse {
            error: Some("Schedule conflict with a higher-priority event".to_string()),
            warning: None,
            conflicts: dtos(&assessment.blocking),
        },
        WriteVerdict::Warning => CheckWriteResponse {
            error: None,
            warning: Some("Overlaps existing events".to_string()),
            conflicts: dtos(&assessment.warnings),
        },
        WriteVerdict::Ok => CheckWriteResponse {
            error: None,
            warning: None,
            conflicts: Vec::new(),
        },
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every stored event overlapping the candidate, excluding the
/// candidate's own id.
///
/// `candidate_json` is a single event object, `existing_json` an array of
/// them. Returns a JSON array of the conflicting events in input order.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(candidate_json: &str, existing_json: &str) -> Result<String, JsValue> {
    let candidate = parse_event_json(candidate_json).map_err(|e| JsValue::from_str(&e))?;
    let existing = parse_events_json(existing_json).map_err(|e| JsValue::from_str(&e))?;

    let conflicts = conflict_engine::find_conflicts(&candidate, &existing);

    to_json(&dtos(&conflicts))
}

/// Assess a proposed create/update against the stored events.
///
/// Returns `{"error": ..., "conflicts": [...]}` when a strictly
/// higher-priority conflict blocks the write, `{"warning": ...,
/// "conflicts": [...]}` when only equal/lower-priority conflicts exist, and
/// `{"conflicts": []}` when the slot is clean.
#[wasm_bindgen(js_name = "checkWrite")]
pub fn check_write(candidate_json: &str, existing_json: &str) -> Result<String, JsValue> {
    let candidate = parse_event_json(candidate_json).map_err(|e| JsValue::from_str(&e))?;
    let existing = parse_events_json(existing_json).map_err(|e| JsValue::from_str(&e))?;

    let assessment = conflict_engine::assess_write(&candidate, &existing);

    to_json(&check_write_response(&assessment))
}

/// Partition a view's events into `resolved` (foreground) and `suppressed`
/// (de-emphasized) display layers.
#[wasm_bindgen(js_name = "partitionEvents")]
pub fn partition_events(events_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json).map_err(|e| JsValue::from_str(&e))?;

    let partition = conflict_engine::partition(&events);

    to_json(&PartitionResponse {
        resolved: dtos(&partition.resolved),
        suppressed: dtos(&partition.suppressed),
    })
}

/// Events on the given calendars overlapping the half-open window
/// `[window_start, window_end)`.
///
/// `calendar_ids_json` is a JSON array of calendar id strings; an empty
/// array matches every calendar. Datetimes are ISO 8601 (naive is read as
/// UTC).
#[wasm_bindgen(js_name = "eventsInWindow")]
pub fn events_in_window(
    events_json: &str,
    window_start: &str,
    window_end: &str,
    calendar_ids_json: &str,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json).map_err(|e| JsValue::from_str(&e))?;
    let ws = conflict_engine::parse_datetime(window_start)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let we = conflict_engine::parse_datetime(window_end)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let calendar_ids: Vec<String> = serde_json::from_str(calendar_ids_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid calendar ids JSON: {}", e)))?;

    let refs: Vec<&str> = calendar_ids.iter().map(String::as_str).collect();
    let hits = conflict_engine::events_in_window(&events, ws, we, &refs);

    to_json(&dtos(&hits))
}

// ---------------------------------------------------------------------------
// Native tests for the DTO/parse layer (the exports are thin wrappers)
// ---------------------------------------------------------------------------
