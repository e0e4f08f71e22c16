//! Named schedules and default-schedule selection.
//!
//! A professional may keep several named schedules (e.g. "Weekdays",
//! "Weekend clinic") and link one to a specific offering type. When no
//! schedule is linked, the default-flagged schedule is used; a professional
//! with no default at all falls back to their first schedule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Booking, ComputedSlot, DateOverride, OutOfOfficePeriod, WeeklySlot};
use crate::timeslots::calculate_slots_for_date_range;

/// A named weekly schedule with its own timezone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: u64,
    pub name: String,
    /// IANA timezone in which the weekly slots are expressed.
    pub timezone: String,
    pub is_default: bool,
    pub weekly_slots: Vec<WeeklySlot>,
}

/// Pick the schedule to use for an offering.
///
/// Precedence: the linked schedule when `linked_id` matches one, else the
/// default-flagged schedule, else the first schedule. Returns `None` only
/// when `schedules` is empty.
pub fn select_schedule(schedules: &[Schedule], linked_id: Option<u64>) -> Option<&Schedule> {
    if let Some(id) = linked_id {
        if let Some(schedule) = schedules.iter().find(|s| s.id == id) {
            return Some(schedule);
        }
    }
    schedules
        .iter()
        .find(|s| s.is_default)
        .or_else(|| schedules.first())
}

/// Computed availability together with which schedule produced it.
///
/// The presentation layer reports the resolved timezone and schedule for
/// display and debugging; carrying them alongside the slots saves the
/// caller a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAvailability {
    pub schedule_id: u64,
    pub schedule_name: String,
    pub timezone: String,
    pub slots: Vec<ComputedSlot>,
}

/// Compute availability for a resolved schedule.
///
/// Thin wrapper over [`calculate_slots_for_date_range`] that takes the
/// weekly slots and timezone from `schedule` and echoes the schedule
/// identity back in the result.
pub fn calculate_for_schedule(
    schedule: &Schedule,
    start_date: NaiveDate,
    end_date: NaiveDate,
    bookings: &[Booking],
    duration_minutes: u32,
    ooo_periods: &[OutOfOfficePeriod],
    date_overrides: &[DateOverride],
) -> Result<ScheduleAvailability> {
    let slots: Vec<ComputedSlot> = calculate_slots_for_date_range(
        start_date,
        end_date,
        &schedule.weekly_slots,
        bookings,
        duration_minutes,
        &schedule.timezone,
        ooo_periods,
        date_overrides,
    )?;

    Ok(ScheduleAvailability {
        schedule_id: schedule.id,
        schedule_name: schedule.name.clone(),
        timezone: schedule.timezone.clone(),
        slots,
    })
}
