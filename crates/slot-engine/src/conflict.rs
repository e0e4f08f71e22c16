//! Detect bookings that block a proposed slot.
//!
//! Overlap uses half-open `[start, end)` semantics: a slot ending exactly
//! when a booking starts does NOT conflict. Cancelled and completed bookings
//! never block.

use chrono::{DateTime, Utc};

use crate::model::{Booking, ComputedSlot};

/// A booking found to overlap a proposed slot.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockingBooking {
    pub booking: Booking,
    pub overlap_minutes: i64,
}

/// Whether two half-open intervals intersect.
///
/// True iff `a_start < b_end && b_start < a_end`; adjacency is not overlap.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Whether any pending/confirmed booking overlaps the candidate interval.
pub(crate) fn is_blocked(start: DateTime<Utc>, end: DateTime<Utc>, bookings: &[Booking]) -> bool {
    bookings
        .iter()
        .any(|b| b.status.blocks_slot() && intervals_overlap(start, end, b.start, b.end))
}

/// Find every pending/confirmed booking that overlaps `slot`, with the
/// overlap duration in minutes.
///
/// Useful for callers that need to explain why a requested window is not
/// bookable rather than just omitting it.
pub fn find_blocking_bookings(slot: &ComputedSlot, bookings: &[Booking]) -> Vec<BlockingBooking> {
    let mut blocking = Vec::new();

    for b in bookings {
        if !b.status.blocks_slot() {
            continue;
        }
        if intervals_overlap(slot.start, slot.end, b.start, b.end) {
            let overlap_start = slot.start.max(b.start);
            let overlap_end = slot.end.min(b.end);
            let overlap_minutes = (overlap_end - overlap_start).num_minutes();

            blocking.push(BlockingBooking {
                booking: b.clone(),
                overlap_minutes,
            });
        }
    }

    blocking
}
