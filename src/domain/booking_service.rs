use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::booking::Booking;
use crate::domain::booking_store::BookingStore;
use crate::domain::clock::Clock;
use crate::domain::id::{BookingId, RoomId};
use crate::domain::room_gate::RoomGateRegistry;
use crate::error::{Error, Result};

/// Enforces all booking invariants before mutating the store.
///
/// The service owns no bookings itself; every operation re-reads the
/// store, so a failed validation leaves storage untouched. Constructed
/// once at process start and shared across request handlers.
#[derive(Debug)]
pub struct BookingService {
    store: BookingStore,
    clock: Arc<dyn Clock>,
    gates: RoomGateRegistry,
}

impl BookingService {
    pub fn new(store: BookingStore, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock, gates: RoomGateRegistry::new() }
    }

    /// Creates a booking for `room_id` over `[start_time, end_time)`.
    ///
    /// Validation order matches the error a caller should see first:
    /// non-empty room, start before end, start not in the past, then the
    /// overlap scan against the room's current bookings. The scan and the
    /// insert happen under the room's gate so concurrent creates cannot
    /// both validate against a stale snapshot.
    ///
    /// # Returns
    /// The stored booking with its freshly assigned id.
    pub fn create(&self, room_id: RoomId, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<Booking> {
        if room_id.is_empty() {
            return Err(Error::InvalidInput("room_id must not be empty".to_string()));
        }

        if start_time >= end_time {
            return Err(Error::InvalidInput("start time must be before end time".to_string()));
        }

        // One clock read per call; every comparison below sees the same "now".
        let now = self.clock.now();
        if start_time < now {
            return Err(Error::InvalidInput("bookings cannot be created in the past".to_string()));
        }

        let gate = self.gates.gate_for(&room_id);
        let _room_guard = gate.lock().expect("Mutex poisoned");

        for existing in self.store.get_for_room(&room_id) {
            if existing.overlaps(start_time, end_time) {
                log::debug!("Rejecting booking for {:?}: overlaps {:?}", room_id, existing.id);
                return Err(Error::Conflict("booking time overlaps with an existing booking".to_string()));
            }
        }

        let booking = Booking::new(BookingId::new(Uuid::new_v4().to_string()), room_id, start_time, end_time);

        self.store.add(booking.clone());
        log::info!("Created booking {} for {:?} [{} - {})", booking.id, booking.room_id, booking.start_time, booking.end_time);

        Ok(booking)
    }

    /// Cancels the booking with the given id.
    ///
    /// Cancellation is deletion; a cancelled booking is gone, so cancelling
    /// the same id twice fails with `NotFound` on the second call.
    pub fn cancel(&self, id: &BookingId) -> Result<()> {
        if self.store.remove_by_id(id) {
            log::info!("Cancelled booking {}", id);
            Ok(())
        } else {
            Err(Error::NotFound("booking not found".to_string()))
        }
    }

    /// Lists the bookings for `room_id`, ascending by start time.
    ///
    /// The sort is stable, so bookings with equal start times keep their
    /// insertion order. An unknown room lists as empty, never as an error.
    pub fn list(&self, room_id: &RoomId) -> Vec<Booking> {
        let mut bookings = self.store.get_for_room(room_id);
        bookings.sort_by_key(|b| b.start_time);
        bookings
    }
}
