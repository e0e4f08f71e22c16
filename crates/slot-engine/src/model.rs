//! Input and output value types for the slot calculator.
//!
//! Everything here is a plain, immutable value object. Callers shape raw
//! storage rows into these types once, at the boundary; the calculator never
//! sees loosely-typed data. Wall-clock times (`"HH:MM"` strings) are always
//! interpreted in the schedule's IANA timezone; booking instants are UTC.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One recurring availability window on one weekday.
///
/// `day_of_week` uses 0=Sunday through 6=Saturday. A weekday may carry zero,
/// one, or several (even overlapping) slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlot {
    pub day_of_week: u8,
    /// Wall-clock start ("HH:MM") in the schedule's timezone.
    pub start_time: String,
    /// Wall-clock end ("HH:MM") in the schedule's timezone.
    pub end_time: String,
    /// Disabled slots are kept in storage but never produce windows.
    pub enabled: bool,
}

/// A wall-clock time range, as carried by date overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_time: String,
    pub end_time: String,
}

/// A per-date exception that fully replaces the weekly pattern.
///
/// When `is_unavailable` is true the date has zero windows. Otherwise the
/// override's `slots` replace the weekly slots for that date; an empty
/// list means "available but nothing configured", which is zero windows,
/// NOT a fallback to the weekly pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOverride {
    pub date: NaiveDate,
    pub is_unavailable: bool,
    #[serde(default)]
    pub slots: Vec<TimeRange>,
}

/// An inclusive calendar-date range during which the professional is
/// unavailable regardless of schedule or overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfOfficePeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl OutOfOfficePeriod {
    /// Whether `date` falls on or between the period's bounds.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    /// Only pending and confirmed bookings occupy time.
    pub fn blocks_slot(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

/// An existing booking, as precise UTC instants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
}

/// A single bookable window produced by the calculator, exactly the
/// requested duration long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
