//! User handlers
//!
//! Endpoints for the user dashboard and profile editing.

use axum::extract::State;
use axum::Json;
use court_service::dto::{DashboardResponse, UpdateProfileRequest, UserResponse};
use court_service::UserService;

use crate::extractors::{IdPath, UserIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// User dashboard: profile plus booking history
///
/// GET /users/:user_id
pub async fn dashboard(
    State(state): State<AppState>,
    IdPath(path): IdPath<UserIdPath>,
) -> ApiResult<Json<DashboardResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.dashboard(path.user_id).await?;
    Ok(Json(response))
}

/// Edit profile fields and optionally the password
///
/// PATCH /users/:user_id
pub async fn update_profile(
    State(state): State<AppState>,
    IdPath(path): IdPath<UserIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(path.user_id, request).await?;
    Ok(Json(response))
}
