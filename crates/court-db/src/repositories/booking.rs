//! PostgreSQL implementation of BookingRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use court_core::entities::{Booking, BookingView};
use court_core::error::DomainError;
use court_core::traits::{BookingRepository, RepoResult};

use crate::models::{BookingModel, BookingViewModel};

use super::error::map_db_error;
use super::slot::{release_slot, reserve_slot};

/// PostgreSQL implementation of BookingRepository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new PgBookingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    /// Book a slot for a user.
    ///
    /// The availability flip and the booking insert run in one transaction.
    /// The flip is a compare-and-set on `available = TRUE`, so two
    /// concurrent requests for the same slot cannot both succeed.
    #[instrument(skip(self))]
    async fn book(&self, user_id: i64, slot_id: i64) -> RepoResult<Booking> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let reserved = reserve_slot(&mut *tx, slot_id).await.map_err(map_db_error)?;

        if reserved == 0 {
            // Distinguish a missing slot from one that is already taken.
            let exists = sqlx::query_scalar::<_, bool>(
                r"SELECT EXISTS(SELECT 1 FROM court_slots WHERE slot_id = $1)",
            )
            .bind(slot_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            tx.rollback().await.map_err(map_db_error)?;

            return if exists {
                Err(DomainError::SlotUnavailable(slot_id))
            } else {
                Err(DomainError::SlotNotFound(slot_id))
            };
        }

        let model = sqlx::query_as::<_, BookingModel>(
            r"
            INSERT INTO bookings (user_id, slot_id, booking_status)
            VALUES ($1, $2, 'booked')
            RETURNING booking_id, user_id, slot_id, booking_status, created_at
            ",
        )
        .bind(user_id)
        .bind(slot_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Booking::try_from(model)
    }

    /// Cancel the user's active booking for a slot and release the slot.
    #[instrument(skip(self))]
    async fn cancel(&self, user_id: i64, slot_id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let cancelled = sqlx::query(
            r"
            UPDATE bookings
            SET booking_status = 'cancelled'
            WHERE user_id = $1 AND slot_id = $2 AND booking_status = 'booked'
            ",
        )
        .bind(user_id)
        .bind(slot_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if cancelled.rows_affected() == 0 {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(DomainError::BookingNotFound);
        }

        release_slot(&mut *tx, slot_id).await.map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: i64) -> RepoResult<Vec<BookingView>> {
        let models = sqlx::query_as::<_, BookingViewModel>(
            r"
            SELECT s.slot_id, c.location, s.date, s.start_time, s.end_time, b.booking_status
            FROM bookings b
            JOIN court_slots s ON s.slot_id = b.slot_id
            JOIN court c ON c.court_id = s.court_id
            WHERE b.user_id = $1
            ORDER BY s.date DESC, s.start_time DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(BookingView::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn complete_past(&self) -> RepoResult<u64> {
        // Strict inequality: a booking on today's date is still upcoming.
        let result = sqlx::query(
            r"
            UPDATE bookings b
            SET booking_status = 'completed'
            FROM court_slots s
            WHERE s.slot_id = b.slot_id
              AND s.date < CURRENT_DATE
              AND b.booking_status = 'booked'
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
