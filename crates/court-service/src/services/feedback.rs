//! Feedback service
//!
//! Append-only visitor feedback.

use tracing::{info, instrument};

use crate::dto::{FeedbackRequest, FeedbackResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Append a feedback entry
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: FeedbackRequest) -> ServiceResult<FeedbackResponse> {
        let feedback_id = self.ctx.feedback_repo().create(&request.feedback).await?;

        info!(feedback_id, "Feedback recorded");

        Ok(FeedbackResponse { feedback_id })
    }
}
