//! Error types for conflict-engine operations.
//!
//! The three algorithms (overlap, conflict finding, partitioning) are total
//! over well-typed input and never fail; only the wire boundary can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid timestamp '{value}': {detail}")]
    InvalidTimestamp { value: String, detail: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
