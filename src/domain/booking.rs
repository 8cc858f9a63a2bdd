use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::id::{BookingId, RoomId};

/// A confirmed reservation of one room for one half-open time interval
/// `[start_time, end_time)`.
///
/// A booking is constructed only by the service after all validations have
/// passed and is immutable from then on; cancellation removes it from the
/// store instead of flagging it.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: RoomId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Booking {
    pub fn new(id: BookingId, room_id: RoomId, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Booking { id, room_id, start_time, end_time }
    }

    /// Whether this booking's interval intersects `[start, end)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        intervals_overlap(self.start_time, self.end_time, start, end)
    }
}

/// Half-open interval intersection: `[s1, e1)` and `[s2, e2)` overlap iff
/// `s1 < e2 && e1 > s2`. Touching endpoints do not count as overlap, so a
/// booking ending at 11:00 coexists with one starting at 11:00.
///
/// The comparisons are strict on purpose; do not loosen them to `<=`/`>=`.
pub fn intervals_overlap(s1: DateTime<Utc>, e1: DateTime<Utc>, s2: DateTime<Utc>, e2: DateTime<Utc>) -> bool {
    s1 < e2 && e1 > s2
}
