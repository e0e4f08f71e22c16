//! Timezone and wall-clock helpers.
//!
//! Schedules store wall-clock times ("HH:MM") that only become instants once
//! combined with a calendar date and the schedule's IANA timezone. The
//! resolution here is deterministic across DST transitions: an ambiguous
//! local time (fall-back repeat) resolves to the earlier instant, and a
//! nonexistent local time (spring-forward gap) shifts forward to the first
//! valid instant.

use chrono::{Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Result, SlotError};

/// Validate an IANA timezone name.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| SlotError::InvalidTimezone(timezone.to_string()))
}

/// Parse a wall-clock "HH:MM" string.
pub fn parse_wall_clock(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| SlotError::MalformedTime(format!("not a valid HH:MM time: '{}'", time)))
}

/// Parse a `{start_time, end_time}` wall-clock pair, rejecting empty or
/// inverted ranges.
pub fn parse_wall_clock_range(start_time: &str, end_time: &str) -> Result<(NaiveTime, NaiveTime)> {
    let start = parse_wall_clock(start_time)?;
    let end = parse_wall_clock(end_time)?;
    if end <= start {
        return Err(SlotError::MalformedTime(format!(
            "end time '{}' is not after start time '{}'",
            end_time, start_time
        )));
    }
    Ok((start, end))
}

/// Resolve a local wall-clock datetime to a UTC instant.
///
/// Ambiguous local times (the repeated hour at fall-back) resolve to the
/// earlier of the two instants. Nonexistent local times (the skipped hour at
/// spring-forward) shift forward in 15-minute steps to the first valid
/// instant.
pub fn resolve_local(tz: Tz, date: NaiveDate, time: NaiveTime) -> chrono::DateTime<Utc> {
    let naive = date.and_time(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // DST gaps are at most a few hours; 24h is a hard ceiling.
            let mut probe = naive;
            for _ in 0..(24 * 4) {
                probe += Duration::minutes(15);
                if let LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) =
                    tz.from_local_datetime(&probe)
                {
                    return dt.with_timezone(&Utc);
                }
            }
            naive.and_utc()
        }
    }
}
