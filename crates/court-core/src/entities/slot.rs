//! Slot entity - a bookable time interval at a court

use chrono::{NaiveDate, NaiveTime};

/// A bookable time interval at a specific court on a specific date.
///
/// Slots are created out-of-band as inventory. The `available` flag is the
/// proxy lock for booking: it must reflect "not actively booked AND date in
/// the future". The sweeper enforces the date half lazily; the booking
/// transaction enforces the rest atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub slot_id: i64,
    pub court_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available: bool,
}

impl Slot {
    /// Whether the slot's date has passed relative to `today`.
    ///
    /// Matches the sweep threshold: a slot expires on its own date,
    /// not the day after.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.date <= today
    }
}

/// A slot joined with its court, as returned by the listing queries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub slot: Slot,
    pub location: String,
    pub image: String,
}
