//! Booking database models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for the `bookings` table
#[derive(Debug, Clone, FromRow)]
pub struct BookingModel {
    pub booking_id: i64,
    pub user_id: i64,
    pub slot_id: i64,
    pub booking_status: String,
    pub created_at: DateTime<Utc>,
}

/// Row shape for the user-dashboard query:
/// `bookings` joined with `court_slots` and `court`
#[derive(Debug, Clone, FromRow)]
pub struct BookingViewModel {
    pub slot_id: i64,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub booking_status: String,
}
