//! PostgreSQL implementation of SlotRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgExecutor, PgPool};
use tracing::instrument;

use court_core::entities::{Location, SlotView};
use court_core::traits::{RepoResult, SlotRepository};

use crate::models::{LocationModel, SlotWithCourtModel};

use super::error::map_db_error;

/// Reserve a slot: compare-and-set the availability flag.
///
/// This and [`release_slot`] are the only statements besides the sweep that
/// flip `available`; the booking repository runs them inside its
/// transactions. Returns the number of rows flipped (0 means the slot is
/// missing or already taken).
pub(crate) async fn reserve_slot<'e, E>(executor: E, slot_id: i64) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r"
        UPDATE court_slots
        SET available = FALSE
        WHERE slot_id = $1 AND available = TRUE
        ",
    )
    .bind(slot_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Release a slot back to available.
pub(crate) async fn release_slot<'e, E>(executor: E, slot_id: i64) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r"
        UPDATE court_slots
        SET available = TRUE
        WHERE slot_id = $1
        ",
    )
    .bind(slot_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// PostgreSQL implementation of SlotRepository
#[derive(Clone)]
pub struct PgSlotRepository {
    pool: PgPool,
}

impl PgSlotRepository {
    /// Create a new PgSlotRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotRepository for PgSlotRepository {
    #[instrument(skip(self))]
    async fn list_available(&self, date: Option<NaiveDate>) -> RepoResult<Vec<SlotView>> {
        let models = if let Some(date) = date {
            sqlx::query_as::<_, SlotWithCourtModel>(
                r"
                SELECT s.slot_id, s.court_id, s.date, s.start_time, s.end_time, s.available,
                       c.location, c.image
                FROM court_slots s
                JOIN court c ON c.court_id = s.court_id
                WHERE s.available = TRUE AND s.date = $1
                ORDER BY s.date, s.start_time
                ",
            )
            .bind(date)
            .fetch_all(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, SlotWithCourtModel>(
                r"
                SELECT s.slot_id, s.court_id, s.date, s.start_time, s.end_time, s.available,
                       c.location, c.image
                FROM court_slots s
                JOIN court c ON c.court_id = s.court_id
                WHERE s.available = TRUE
                ORDER BY s.date, s.start_time
                ",
            )
            .fetch_all(&self.pool)
            .await
        }
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(SlotView::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_by_location(&self, location: &str) -> RepoResult<Vec<SlotView>> {
        let models = sqlx::query_as::<_, SlotWithCourtModel>(
            r"
            SELECT s.slot_id, s.court_id, s.date, s.start_time, s.end_time, s.available,
                   c.location, c.image
            FROM court_slots s
            JOIN court c ON c.court_id = s.court_id
            WHERE s.available = TRUE AND c.location = $1
            ORDER BY s.date, s.start_time
            ",
        )
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(SlotView::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_locations(&self) -> RepoResult<Vec<Location>> {
        let models = sqlx::query_as::<_, LocationModel>(
            r"
            SELECT DISTINCT location, image
            FROM court
            ORDER BY location
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Location::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, slot_id: i64) -> RepoResult<Option<SlotView>> {
        let model = sqlx::query_as::<_, SlotWithCourtModel>(
            r"
            SELECT s.slot_id, s.court_id, s.date, s.start_time, s.end_time, s.available,
                   c.location, c.image
            FROM court_slots s
            JOIN court c ON c.court_id = s.court_id
            WHERE s.slot_id = $1
            ",
        )
        .bind(slot_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.map(SlotView::from))
    }

    #[instrument(skip(self))]
    async fn expire_past(&self) -> RepoResult<u64> {
        // Same threshold as the original sweep: a slot expires on its own
        // date, which also hides never-booked past slots.
        let result = sqlx::query(
            r"
            UPDATE court_slots
            SET available = FALSE
            WHERE date <= CURRENT_DATE AND available = TRUE
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
