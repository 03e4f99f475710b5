//! Tests for the time-range probe across calendars.

use chrono::{TimeZone, Utc};
use conflict_engine::event::{Priority, TimedEvent};
use conflict_engine::events_in_window;

fn event(id: &str, calendar_id: &str, start: &str, end: &str) -> TimedEvent {
    TimedEvent {
        id: id.to_string(),
        calendar_id: calendar_id.to_string(),
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        priority: Priority::Unset,
    }
}

#[test]
fn events_inside_the_window_are_returned() {
    let events = vec![
        event("a", "work", "2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z"),
        event("b", "work", "2026-03-01T14:00:00Z", "2026-03-01T15:00:00Z"),
    ];
    let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let hits = events_in_window(&events, window_start, window_end, &[]);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "a");
}

#[test]
fn window_edges_are_exclusive() {
    // One event ends exactly at window start, another starts exactly at
    // window end — neither occupies the window.
    let events = vec![
        event("before", "work", "2026-03-01T08:00:00Z", "2026-03-01T09:00:00Z"),
        event("after", "work", "2026-03-01T12:00:00Z", "2026-03-01T13:00:00Z"),
    ];
    let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let hits = events_in_window(&events, window_start, window_end, &[]);

    assert!(hits.is_empty(), "adjacency to the window is not occupancy");
}

#[test]
fn event_straddling_the_window_is_returned() {
    let events = vec![event(
        "long",
        "work",
        "2026-03-01T07:00:00Z",
        "2026-03-01T19:00:00Z",
    )];
    let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 10, 0, 0).unwrap();

    let hits = events_in_window(&events, window_start, window_end, &[]);

    assert_eq!(hits.len(), 1);
}

#[test]
fn calendar_filter_restricts_the_result() {
    let events = vec![
        event("a", "work", "2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z"),
        event("b", "personal", "2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z"),
        event("c", "shared", "2026-03-01T09:30:00Z", "2026-03-01T10:30:00Z"),
    ];
    let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let hits = events_in_window(&events, window_start, window_end, &["work", "shared"]);

    let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn empty_calendar_filter_matches_all_calendars() {
    let events = vec![
        event("a", "work", "2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z"),
        event("b", "personal", "2026-03-01T09:00:00Z", "2026-03-01T10:00:00Z"),
    ];
    let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let hits = events_in_window(&events, window_start, window_end, &[]);

    assert_eq!(hits.len(), 2);
}

#[test]
fn input_order_is_preserved() {
    let events = vec![
        event("late", "work", "2026-03-01T11:00:00Z", "2026-03-01T11:30:00Z"),
        event("early", "work", "2026-03-01T09:00:00Z", "2026-03-01T09:30:00Z"),
    ];
    let window_start = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
    let window_end = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();

    let hits = events_in_window(&events, window_start, window_end, &[]);

    let ids: Vec<&str> = hits.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["late", "early"], "no re-sorting of the input");
}
