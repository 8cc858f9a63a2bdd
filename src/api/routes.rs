use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::api::booking_dto::{BookingCreateDto, BookingDto};
use crate::domain::booking_service::BookingService;
use crate::domain::id::{BookingId, RoomId};
use crate::error::Error;

/// Builds the HTTP router over a shared service handle.
///
/// The router is the only transport-aware layer; status-code decisions
/// live in the `IntoResponse` impl below, never in the domain.
pub fn router(service: Arc<BookingService>) -> Router {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/:booking_id", axum::routing::delete(cancel_booking))
        .route("/api/rooms/:room_id/bookings", get(list_bookings))
        .with_state(service)
}

async fn create_booking(State(service): State<Arc<BookingService>>, Json(body): Json<BookingCreateDto>) -> Result<Response, Error> {
    let (room_id, start_time, end_time) = body.into_domain()?;
    let booking = service.create(room_id, start_time, end_time)?;

    Ok((StatusCode::CREATED, Json(BookingDto::from(&booking))).into_response())
}

async fn cancel_booking(State(service): State<Arc<BookingService>>, Path(booking_id): Path<String>) -> Result<Response, Error> {
    service.cancel(&BookingId::new(booking_id))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn list_bookings(State(service): State<Arc<BookingService>>, Path(room_id): Path<String>) -> Json<Vec<BookingDto>> {
    let bookings = service.list(&RoomId::new(room_id));

    Json(bookings.iter().map(BookingDto::from).collect())
}

/// Maps each error kind to its HTTP status, with the reason string in a
/// `{"detail": ...}` body.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Error::InvalidInput(reason) => (StatusCode::BAD_REQUEST, reason.clone()),
            Error::Conflict(reason) => (StatusCode::CONFLICT, reason.clone()),
            Error::NotFound(reason) => (StatusCode::NOT_FOUND, reason.clone()),
        };

        log::debug!("Request failed with {}: {}", status, detail);

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
