use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{Booking, BookingRequest, CreatedResponse};
use crate::state::AppState;
use crate::store::MISSING_FIELDS_MESSAGE;

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "rejected booking body");
        AppError::Validation(MISSING_FIELDS_MESSAGE.to_string())
    })?;

    let booking = state.store().create(request)?;

    Ok(Json(CreatedResponse { ok: true, booking }))
}

// GET /api/bookings
pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    Json(state.store().list().to_vec())
}
