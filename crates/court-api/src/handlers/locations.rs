//! Location handlers
//!
//! Endpoints for browsing court locations.

use axum::extract::State;
use axum::Json;
use court_service::dto::{LocationResponse, SlotResponse};
use court_service::SlotService;

use crate::extractors::{IdPath, LocationPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List distinct court locations with images
///
/// GET /locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<LocationResponse>>> {
    let service = SlotService::new(state.service_context());
    let locations = service.list_locations().await?;
    Ok(Json(locations))
}

/// List available slots at one location
///
/// GET /locations/:name/slots
pub async fn location_slots(
    State(state): State<AppState>,
    IdPath(path): IdPath<LocationPath>,
) -> ApiResult<Json<Vec<SlotResponse>>> {
    let service = SlotService::new(state.service_context());
    let slots = service.list_by_location(&path.name).await?;
    Ok(Json(slots))
}
