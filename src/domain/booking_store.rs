use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::booking::Booking;
use crate::domain::id::{BookingId, RoomId};

#[derive(Debug, Default)]
struct StoreInner {
    /// Bookings grouped by room, insertion order preserved within a room.
    rooms: HashMap<RoomId, Vec<Booking>>,
}

/// In-memory booking storage, keyed by room.
///
/// The store is a pure keyed container: it performs no validation and no
/// conflict checking, so booking policy stays centralized in the service.
/// Cloning yields another handle to the same underlying map.
#[derive(Debug, Clone)]
pub struct BookingStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(StoreInner::default())) }
    }

    /// Get a snapshot of the bookings currently held for `room_id`.
    ///
    /// # Returns
    /// A clone of the room's bookings in insertion order, or an empty vec
    /// if the room has none. Never fails.
    pub fn get_for_room(&self, room_id: &RoomId) -> Vec<Booking> {
        let guard = self.inner.read().expect("RwLock poisoned");
        guard.rooms.get(room_id).cloned().unwrap_or_default()
    }

    /// Appends `booking` to its room's collection, creating the collection
    /// if the room is not yet known. The caller is responsible for having
    /// checked for conflicts beforehand.
    pub fn add(&self, booking: Booking) {
        let mut guard = self.inner.write().expect("RwLock poisoned");
        guard.rooms.entry(booking.room_id.clone()).or_default().push(booking);
    }

    /// Removes the booking with the given id, scanning all rooms.
    ///
    /// # Returns
    /// `true` if a booking was removed, `false` if the id was unknown.
    pub fn remove_by_id(&self, id: &BookingId) -> bool {
        let mut guard = self.inner.write().expect("RwLock poisoned");

        for bookings in guard.rooms.values_mut() {
            if let Some(pos) = bookings.iter().position(|b| &b.id == id) {
                bookings.remove(pos);
                return true;
            }
        }

        false
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn booking(id: &str, room: &str, start_hour: u32) -> Booking {
        Booking::new(
            BookingId::new(id),
            RoomId::new(room),
            Utc.with_ymd_and_hms(2026, 3, 1, start_hour, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 1, start_hour + 1, 0, 0).unwrap(),
        )
    }

    #[test]
    fn unknown_room_yields_empty_vec() {
        let store = BookingStore::new();
        assert!(store.get_for_room(&RoomId::new("nowhere")).is_empty());
    }

    #[test]
    fn add_preserves_insertion_order_per_room() {
        let store = BookingStore::new();
        store.add(booking("b1", "room-a", 12));
        store.add(booking("b2", "room-a", 9));
        store.add(booking("b3", "room-b", 10));

        let room_a = store.get_for_room(&RoomId::new("room-a"));
        assert_eq!(room_a.len(), 2);
        assert_eq!(room_a[0].id, BookingId::new("b1"));
        assert_eq!(room_a[1].id, BookingId::new("b2"));

        assert_eq!(store.get_for_room(&RoomId::new("room-b")).len(), 1);
    }

    #[test]
    fn remove_by_id_scans_all_rooms() {
        let store = BookingStore::new();
        store.add(booking("b1", "room-a", 9));
        store.add(booking("b2", "room-b", 9));

        assert!(store.remove_by_id(&BookingId::new("b2")));
        assert!(store.get_for_room(&RoomId::new("room-b")).is_empty());
        assert_eq!(store.get_for_room(&RoomId::new("room-a")).len(), 1);
    }

    #[test]
    fn remove_of_unknown_id_is_a_noop() {
        let store = BookingStore::new();
        store.add(booking("b1", "room-a", 9));

        assert!(!store.remove_by_id(&BookingId::new("ghost")));
        assert_eq!(store.get_for_room(&RoomId::new("room-a")).len(), 1);
    }

    #[test]
    fn handles_share_the_same_map() {
        let store = BookingStore::new();
        let handle = store.clone();
        handle.add(booking("b1", "room-a", 9));

        assert_eq!(store.get_for_room(&RoomId::new("room-a")).len(), 1);
    }
}
