pub mod booking_dto;
pub mod routes;
