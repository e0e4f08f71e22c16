//! # slot-engine
//!
//! Deterministic booking-slot computation for scheduling systems.
//!
//! Given a weekly recurring schedule, date-specific overrides, out-of-office
//! ranges and existing bookings, the engine computes the ordered set of
//! bookable windows for a date range and session duration, converting the
//! schedule's wall-clock times through its IANA timezone. It is a pure
//! library: no I/O, no shared state, safe to call concurrently.
//!
//! ## Modules
//!
//! - [`timeslots`] — schedule rules → list of concrete bookable slots
//! - [`schedule`] — named schedules and default-schedule selection
//! - [`conflict`] — detect bookings that block a proposed slot
//! - [`timezone`] — wall-clock parsing and DST-safe local→UTC resolution
//! - [`model`] — input/output value types
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod model;
pub mod schedule;
pub mod timeslots;
pub mod timezone;

pub use conflict::{find_blocking_bookings, BlockingBooking};
pub use error::SlotError;
pub use model::{
    Booking, BookingStatus, ComputedSlot, DateOverride, OutOfOfficePeriod, TimeRange, WeeklySlot,
};
pub use schedule::{calculate_for_schedule, select_schedule, Schedule, ScheduleAvailability};
pub use timeslots::{calculate_slots_for_date_range, SlotWalk};
