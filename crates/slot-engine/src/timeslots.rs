//! The slot calculator -- converts schedule rules into concrete bookable windows.
//!
//! For every calendar date in the requested range, the date's availability
//! windows are resolved by precedence (out-of-office > date override > weekly
//! pattern), converted to UTC instants in the schedule's timezone, and walked
//! in fixed-duration steps. Candidates overlapping a pending/confirmed
//! booking are dropped; the survivors come back sorted by start.
//!
//! The calculator performs no I/O, holds no state between calls, and is safe
//! to invoke concurrently. Identical inputs always produce identical output.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::conflict::is_blocked;
use crate::error::{Result, SlotError};
use crate::model::{Booking, ComputedSlot, DateOverride, OutOfOfficePeriod, WeeklySlot};
use crate::timezone::{parse_timezone, parse_wall_clock_range, resolve_local};

/// A lazy, finite walk of fixed-duration candidate slots within one window.
///
/// Steps forward from the window start in `duration_minutes` increments and
/// stops once a candidate would extend past the window end; a partial final
/// slot is never produced. The walk is a plain value: clone it before
/// consuming to keep a restartable copy.
#[derive(Debug, Clone)]
pub struct SlotWalk {
    cursor: DateTime<Utc>,
    window_end: DateTime<Utc>,
    step: Duration,
}

impl SlotWalk {
    pub fn new(window_start: DateTime<Utc>, window_end: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            cursor: window_start,
            window_end,
            step: Duration::minutes(i64::from(duration_minutes)),
        }
    }
}

impl Iterator for SlotWalk {
    type Item = ComputedSlot;

    fn next(&mut self) -> Option<ComputedSlot> {
        let end = self.cursor + self.step;
        if end > self.window_end {
            return None;
        }
        let slot = ComputedSlot {
            start: self.cursor,
            end,
        };
        self.cursor = end;
        Some(slot)
    }
}

/// An enabled weekly slot with its wall-clock bounds parsed.
struct ParsedWeekly {
    day_of_week: u8,
    start: NaiveTime,
    end: NaiveTime,
}

/// A date override with its wall-clock bounds parsed. `None` ranges means
/// the date is fully unavailable.
enum ParsedOverride {
    Unavailable,
    Ranges(Vec<(NaiveTime, NaiveTime)>),
}

/// Compute every bookable slot in `[start_date, end_date]` (inclusive).
///
/// Wall-clock times in `weekly_slots` and `date_overrides` are interpreted
/// in `timezone` (an IANA zone name). Bookings are UTC instants; only
/// pending and confirmed bookings block; other statuses are ignored, so
/// callers may pass unfiltered rows.
///
/// Per-date precedence: a covering out-of-office period yields zero windows;
/// otherwise a date override applies exactly (its unavailable flag, or its
/// own slot list, where an empty list yields zero windows, never the weekly
/// pattern); otherwise the enabled weekly slots for that weekday apply.
///
/// Overlapping schedule windows are each walked independently; the output
/// is sorted by start but deliberately not deduplicated across windows.
///
/// # Errors
/// Returns `SlotError::InvalidRange` if `start_date` is after `end_date`,
/// `SlotError::InvalidDuration` if `duration_minutes` is zero,
/// `SlotError::InvalidTimezone` if `timezone` is not a valid IANA name, and
/// `SlotError::MalformedTime` if any enabled weekly slot or override slot
/// has an unparseable or inverted time range. Validation covers the whole
/// input up front; the call fails as a unit, never partially computes.
#[allow(clippy::too_many_arguments)]
pub fn calculate_slots_for_date_range(
    start_date: NaiveDate,
    end_date: NaiveDate,
    weekly_slots: &[WeeklySlot],
    bookings: &[Booking],
    duration_minutes: u32,
    timezone: &str,
    ooo_periods: &[OutOfOfficePeriod],
    date_overrides: &[DateOverride],
) -> Result<Vec<ComputedSlot>> {
    if start_date > end_date {
        return Err(SlotError::InvalidRange {
            start: start_date,
            end: end_date,
        });
    }
    if duration_minutes == 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }
    let tz = parse_timezone(timezone)?;

    let weekly = parse_weekly(weekly_slots)?;
    let overrides = parse_overrides(date_overrides)?;

    let mut slots: Vec<ComputedSlot> = Vec::new();

    for date in start_date.iter_days().take_while(|d| *d <= end_date) {
        for (window_start, window_end) in day_windows(date, &weekly, &overrides, ooo_periods, tz) {
            for candidate in SlotWalk::new(window_start, window_end, duration_minutes) {
                if !is_blocked(candidate.start, candidate.end, bookings) {
                    slots.push(candidate);
                }
            }
        }
    }

    // Overlapping windows can interleave; a stable sort restores the global
    // ordering without collapsing duplicates.
    slots.sort_by_key(|s| (s.start, s.end));

    Ok(slots)
}

/// Validate and parse the enabled weekly slots. Disabled slots never produce
/// windows and are skipped without inspection.
fn parse_weekly(weekly_slots: &[WeeklySlot]) -> Result<Vec<ParsedWeekly>> {
    weekly_slots
        .iter()
        .filter(|s| s.enabled)
        .map(|s| {
            if s.day_of_week > 6 {
                return Err(SlotError::MalformedTime(format!(
                    "day_of_week out of range (0-6): {}",
                    s.day_of_week
                )));
            }
            let (start, end) = parse_wall_clock_range(&s.start_time, &s.end_time)?;
            Ok(ParsedWeekly {
                day_of_week: s.day_of_week,
                start,
                end,
            })
        })
        .collect()
}

/// Validate and parse the date overrides into a per-date lookup. A later
/// override for the same date replaces an earlier one.
fn parse_overrides(date_overrides: &[DateOverride]) -> Result<HashMap<NaiveDate, ParsedOverride>> {
    let mut parsed = HashMap::with_capacity(date_overrides.len());
    for o in date_overrides {
        let entry = if o.is_unavailable {
            ParsedOverride::Unavailable
        } else {
            let ranges = o
                .slots
                .iter()
                .map(|r| parse_wall_clock_range(&r.start_time, &r.end_time))
                .collect::<Result<Vec<_>>>()?;
            ParsedOverride::Ranges(ranges)
        };
        parsed.insert(o.date, entry);
    }
    Ok(parsed)
}

/// Resolve one date's availability windows as UTC instants, applying the
/// precedence rule: out-of-office > date override > weekly pattern.
fn day_windows(
    date: NaiveDate,
    weekly: &[ParsedWeekly],
    overrides: &HashMap<NaiveDate, ParsedOverride>,
    ooo_periods: &[OutOfOfficePeriod],
    tz: Tz,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    if ooo_periods.iter().any(|p| p.covers(date)) {
        return Vec::new();
    }

    if let Some(entry) = overrides.get(&date) {
        return match entry {
            ParsedOverride::Unavailable => Vec::new(),
            // An empty range list is a real state: available, nothing
            // configured. It maps to zero windows, not the weekly pattern.
            ParsedOverride::Ranges(ranges) => ranges
                .iter()
                .map(|&(start, end)| (resolve_local(tz, date, start), resolve_local(tz, date, end)))
                .collect(),
        };
    }

    let weekday = date.weekday().num_days_from_sunday() as u8;
    weekly
        .iter()
        .filter(|s| s.day_of_week == weekday)
        .map(|s| (resolve_local(tz, date, s.start), resolve_local(tz, date, s.end)))
        .collect()
}
