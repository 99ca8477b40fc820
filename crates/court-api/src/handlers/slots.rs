//! Slot handlers
//!
//! Endpoints for browsing available court slots.

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use court_service::dto::SlotResponse;
use court_service::SlotService;

use crate::extractors::{IdPath, SlotIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for the slot listing
#[derive(Debug, serde::Deserialize)]
pub struct SlotsQuery {
    /// Optional exact-date filter, `YYYY-MM-DD`
    pub date: Option<NaiveDate>,
}

/// List available slots, optionally filtered by date
///
/// GET /slots?date=YYYY-MM-DD
pub async fn list_slots(
    State(state): State<AppState>,
    Query(query): Query<SlotsQuery>,
) -> ApiResult<Json<Vec<SlotResponse>>> {
    let service = SlotService::new(state.service_context());
    let slots = service.list_available(query.date).await?;
    Ok(Json(slots))
}

/// Get one slot by id, regardless of availability
///
/// GET /slots/:slot_id
pub async fn get_slot(
    State(state): State<AppState>,
    IdPath(path): IdPath<SlotIdPath>,
) -> ApiResult<Json<SlotResponse>> {
    let service = SlotService::new(state.service_context());
    let slot = service.get(path.slot_id).await?;
    Ok(Json(slot))
}
