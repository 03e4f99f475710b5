//! # conflict-engine
//!
//! Priority-based conflict detection and scheduling resolution for shared
//! calendars.
//!
//! Given time-boxed events annotated with a priority level (1 lowest to 5
//! highest, medium when unset), the engine decides which events overlap in
//! time, which stored events collide with a proposed write, and how the
//! overlapping events of a rendered view split into a foreground layer and a
//! de-emphasized background layer.
//!
//! Everything here is pure and synchronous: no state, no I/O, results
//! recomputed from scratch on every call. Persistence, auth, routing, and
//! rendering belong to the collaborating application.
//!
//! ## Modules
//!
//! - [`event`] — `TimedEvent`, `Priority`, wire-format parsing
//! - [`overlap`] — half-open interval overlap predicate
//! - [`conflict`] — conflicts against a candidate event + write-path policy
//! - [`partition`] — greedy resolved/suppressed display partitioning
//! - [`probe`] — time-range probe across calendars
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod overlap;
pub mod partition;
pub mod probe;

pub use conflict::{assess_write, find_conflicts, WriteAssessment, WriteVerdict};
pub use error::ScheduleError;
pub use event::{parse_datetime, Priority, TimedEvent};
pub use overlap::events_overlap;
pub use partition::{partition, Partition};
pub use probe::events_in_window;
