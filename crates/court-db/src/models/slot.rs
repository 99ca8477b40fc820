//! Slot database model

use chrono::{NaiveDate, NaiveTime};
use sqlx::FromRow;

/// Row shape for the slot listing queries: `court_slots` joined with `court`
#[derive(Debug, Clone, FromRow)]
pub struct SlotWithCourtModel {
    pub slot_id: i64,
    pub court_id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available: bool,
    pub location: String,
    pub image: String,
}
