//! Feedback handlers

use axum::extract::State;
use axum::Json;
use court_service::dto::{FeedbackRequest, FeedbackResponse};
use court_service::FeedbackService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit feedback
///
/// POST /feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<FeedbackRequest>,
) -> ApiResult<Created<Json<FeedbackResponse>>> {
    let service = FeedbackService::new(state.service_context());
    let response = service.submit(request).await?;
    Ok(Created(Json(response)))
}
