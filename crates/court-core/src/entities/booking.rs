//! Booking entity - a user's claim on a slot

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::value_objects::BookingStatus;

/// A user's claim on a slot, with a lifecycle status.
///
/// Intended invariant: at most one `Booked` booking per slot at a time,
/// enforced by flipping the slot's availability flag in the same
/// transaction as the booking insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: i64,
    pub user_id: i64,
    pub slot_id: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// A booking joined with its slot and court, as shown on the user dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingView {
    pub slot_id: i64,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
}
