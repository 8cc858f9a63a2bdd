//! Meeting-room booking service: create, cancel, and list time-bounded
//! reservations for named rooms, rejecting bookings that are temporally
//! invalid or overlap an existing booking for the same room.

pub mod api;
pub mod domain;
pub mod error;
pub mod logger;
