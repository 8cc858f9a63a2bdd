pub mod booking;
pub mod booking_service;
pub mod booking_store;
pub mod clock;
pub mod id;
pub mod room_gate;
