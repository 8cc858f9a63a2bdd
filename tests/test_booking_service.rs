use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use room_booking::domain::booking_service::BookingService;
use room_booking::domain::booking_store::BookingStore;
use room_booking::domain::clock::Clock;
use room_booking::domain::id::RoomId;
use room_booking::error::Error;

#[derive(Debug, Clone)]
pub struct MockClock {
    now: DateTime<Utc>,
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Clock pinned to 2026-03-01 00:00:00 UTC; "tomorrow" below is 2026-03-02.
fn pinned_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
}

fn tomorrow_at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, hour, min, 0).unwrap()
}

fn service() -> BookingService {
    BookingService::new(BookingStore::new(), Arc::new(MockClock { now: pinned_now() }))
}

/// Walks the full booking lifecycle of one room: create, conflicting
/// create, adjacent create, cancel, list, double cancel.
#[test]
fn test_room_booking_lifecycle() {
    let service = service();
    let room = RoomId::new("room-101");

    // [10:00, 11:00) tomorrow books fine.
    let first = service.create(room.clone(), tomorrow_at(10, 0), tomorrow_at(11, 0)).expect("first booking should succeed");

    // [10:30, 11:30) overlaps the first booking.
    let conflict = service.create(room.clone(), tomorrow_at(10, 30), tomorrow_at(11, 30));
    assert!(matches!(conflict, Err(Error::Conflict(_))), "expected Conflict, got {:?}", conflict);

    // [11:00, 12:00) only touches the first booking's end; adjacency is allowed.
    let second = service.create(room.clone(), tomorrow_at(11, 0), tomorrow_at(12, 0)).expect("adjacent booking should succeed");

    service.cancel(&first.id).expect("cancel of a live booking should succeed");

    let remaining = service.list(&room);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
    assert_eq!(remaining[0].start_time, tomorrow_at(11, 0));

    // The first booking is gone, not flagged; cancelling again is NotFound.
    let again = service.cancel(&first.id);
    assert!(matches!(again, Err(Error::NotFound(_))), "expected NotFound, got {:?}", again);
}

#[test]
fn test_past_booking_rejected_regardless_of_room_state() {
    let service = service();
    let yesterday = pinned_now() - Duration::days(1);

    let result = service.create(RoomId::new("room-101"), yesterday, yesterday + Duration::hours(1));

    assert!(matches!(result, Err(Error::InvalidInput(_))), "expected InvalidInput, got {:?}", result);
    assert!(service.list(&RoomId::new("room-101")).is_empty(), "rejected create must not mutate storage");
}

#[test]
fn test_list_is_non_decreasing_by_start_time() {
    let service = service();
    let room = RoomId::new("room-7");

    for hour in [15, 9, 12, 18, 10].iter() {
        service.create(room.clone(), tomorrow_at(*hour, 0), tomorrow_at(*hour, 45)).expect("non-overlapping create should succeed");
    }

    let listed = service.list(&room);
    assert_eq!(listed.len(), 5);
    for pair in listed.windows(2) {
        assert!(pair[0].start_time <= pair[1].start_time, "list must be sorted by start_time");
    }
}

#[test]
fn test_rooms_do_not_share_conflicts() {
    let service = service();

    service.create(RoomId::new("room-a"), tomorrow_at(10, 0), tomorrow_at(11, 0)).unwrap();
    let other_room = service.create(RoomId::new("room-b"), tomorrow_at(10, 0), tomorrow_at(11, 0));

    assert!(other_room.is_ok(), "the same interval in a different room must be accepted");
}
