//! Booking handlers
//!
//! Endpoints for booking a slot and cancelling a booking.

use axum::extract::State;
use axum::Json;
use court_service::dto::{BookSlotRequest, BookingResponse};
use court_service::BookingService;

use crate::extractors::{IdPath, SlotIdPath, UserSlotPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Book a slot for the credential holder
///
/// POST /slots/:slot_id/bookings
pub async fn book_slot(
    State(state): State<AppState>,
    IdPath(path): IdPath<SlotIdPath>,
    ValidatedJson(request): ValidatedJson<BookSlotRequest>,
) -> ApiResult<Created<Json<BookingResponse>>> {
    let service = BookingService::new(state.service_context());
    let response = service.book(path.slot_id, request).await?;
    Ok(Created(Json(response)))
}

/// Cancel the user's active booking for a slot
///
/// DELETE /users/:user_id/bookings/:slot_id
pub async fn cancel_booking(
    State(state): State<AppState>,
    IdPath(path): IdPath<UserSlotPath>,
) -> ApiResult<NoContent> {
    let service = BookingService::new(state.service_context());
    service.release(path.user_id, path.slot_id).await?;
    Ok(NoContent)
}
