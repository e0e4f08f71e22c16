//! Error types for slot-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(u32),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Malformed time: {0}")]
    MalformedTime(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
