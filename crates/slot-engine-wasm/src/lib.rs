//! WASM bindings for slot-engine.
//!
//! Exposes bookable-slot computation and blocking-booking lookup to
//! JavaScript via `wasm-bindgen`. All complex types cross the boundary as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use slot_engine::model::{Booking, ComputedSlot, DateOverride, OutOfOfficePeriod, WeeklySlot};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ComputedSlotDto {
    start: String,
    end: String,
}

impl From<&ComputedSlot> for ComputedSlotDto {
    fn from(s: &ComputedSlot) -> Self {
        Self {
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct BlockingBookingDto {
    start: String,
    end: String,
    status: slot_engine::BookingStatus,
    overlap_minutes: i64,
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON/date inputs with JS-friendly error messages
// ---------------------------------------------------------------------------

/// Parse a "YYYY-MM-DD" calendar date.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    s.parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

/// Parse an RFC 3339 datetime string into `DateTime<Utc>`.
fn parse_instant(s: &str) -> Result<DateTime<Utc>, JsValue> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid {} JSON: {}", what, e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute every bookable slot in an inclusive date range.
///
/// Returns a JSON string containing an array of `{start, end}` objects with
/// RFC 3339 datetime strings, sorted by start.
///
/// # Arguments
/// - `start_date` / `end_date` -- "YYYY-MM-DD" calendar dates (inclusive)
/// - `weekly_slots_json` -- JSON array of `{day_of_week, start_time, end_time, enabled}`
/// - `bookings_json` -- JSON array of `{start, end, status}` with RFC 3339 instants
/// - `duration_minutes` -- Length of each bookable slot in minutes
/// - `timezone` -- IANA timezone the wall-clock times are expressed in
/// - `ooo_periods_json` -- JSON array of `{start_date, end_date}` calendar ranges
/// - `date_overrides_json` -- JSON array of `{date, is_unavailable, slots}`
#[wasm_bindgen(js_name = "calculateSlots")]
#[allow(clippy::too_many_arguments)]
pub fn calculate_slots(
    start_date: &str,
    end_date: &str,
    weekly_slots_json: &str,
    bookings_json: &str,
    duration_minutes: u32,
    timezone: &str,
    ooo_periods_json: &str,
    date_overrides_json: &str,
) -> Result<String, JsValue> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    let weekly_slots: Vec<WeeklySlot> = parse_json(weekly_slots_json, "weekly slots")?;
    let bookings: Vec<Booking> = parse_json(bookings_json, "bookings")?;
    let ooo_periods: Vec<OutOfOfficePeriod> = parse_json(ooo_periods_json, "out-of-office periods")?;
    let date_overrides: Vec<DateOverride> = parse_json(date_overrides_json, "date overrides")?;

    let slots = slot_engine::calculate_slots_for_date_range(
        start,
        end,
        &weekly_slots,
        &bookings,
        duration_minutes,
        timezone,
        &ooo_periods,
        &date_overrides,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<ComputedSlotDto> = slots.iter().map(ComputedSlotDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find every pending/confirmed booking that overlaps a proposed slot.
///
/// `slot_start` and `slot_end` are RFC 3339 instants; `bookings_json` is a
/// JSON array of `{start, end, status}` objects. Returns a JSON string
/// containing an array of `{start, end, status, overlap_minutes}` objects.
#[wasm_bindgen(js_name = "findBlockingBookings")]
pub fn find_blocking_bookings(
    slot_start: &str,
    slot_end: &str,
    bookings_json: &str,
) -> Result<String, JsValue> {
    let slot = ComputedSlot {
        start: parse_instant(slot_start)?,
        end: parse_instant(slot_end)?,
    };
    let bookings: Vec<Booking> = parse_json(bookings_json, "bookings")?;

    let blocking = slot_engine::find_blocking_bookings(&slot, &bookings);

    let dtos: Vec<BlockingBookingDto> = blocking
        .iter()
        .map(|b| BlockingBookingDto {
            start: b.booking.start.to_rfc3339(),
            end: b.booking.end.to_rfc3339(),
            status: b.booking.status,
            overlap_minutes: b.overlap_minutes,
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
