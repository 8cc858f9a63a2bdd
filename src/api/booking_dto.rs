use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::booking::Booking;
use crate::domain::id::RoomId;
use crate::error::{Error, Result};

/// Request body of `POST /api/bookings`.
///
/// Timestamps are carried as raw RFC 3339 strings instead of letting serde
/// deserialize them, so that a timestamp without a timezone designator maps
/// to an `InvalidInput` with a readable reason rather than a decode error.
#[derive(Deserialize, Debug, Clone)]
pub struct BookingCreateDto {
    pub room_id: String,
    pub start_time: String,
    pub end_time: String,
}

impl BookingCreateDto {
    /// Converts the raw request into domain inputs, normalizing both
    /// timestamps to UTC. A naive timestamp is rejected, never defaulted.
    pub fn into_domain(self) -> Result<(RoomId, DateTime<Utc>, DateTime<Utc>)> {
        let start_time = parse_rfc3339(&self.start_time, "start_time")?;
        let end_time = parse_rfc3339(&self.end_time, "end_time")?;

        Ok((RoomId::new(self.room_id), start_time, end_time))
    }
}

fn parse_rfc3339(raw: &str, field: &str) -> Result<DateTime<Utc>> {
    let parsed: DateTime<FixedOffset> = raw
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{} must be an RFC 3339 timestamp with a timezone (got '{}')", field, raw)))?;

    Ok(parsed.with_timezone(&Utc))
}

/// Response body for a booking, used by create and list.
#[derive(Serialize, Debug, Clone)]
pub struct BookingDto {
    pub booking_id: String,
    pub room_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        BookingDto {
            booking_id: booking.id.to_string(),
            room_id: booking.room_id.to_string(),
            start_time: booking.start_time,
            end_time: booking.end_time,
        }
    }
}
