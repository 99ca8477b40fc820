//! PostgreSQL implementation of FeedbackRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use court_core::traits::{FeedbackRepository, RepoResult};

use super::error::map_db_error;

/// PostgreSQL implementation of FeedbackRepository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    /// Create a new PgFeedbackRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self, feedback))]
    async fn create(&self, feedback: &str) -> RepoResult<i64> {
        let feedback_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO feedback (feedback)
            VALUES ($1)
            RETURNING feedback_id
            ",
        )
        .bind(feedback)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(feedback_id)
    }
}
