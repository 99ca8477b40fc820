//! Booking model <-> entity mapper

use court_core::entities::{Booking, BookingView};
use court_core::error::DomainError;
use court_core::value_objects::BookingStatus;

use crate::models::{BookingModel, BookingViewModel};

fn parse_status(raw: &str) -> Result<BookingStatus, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::InternalError(format!("Corrupt booking status: {raw}")))
}

impl TryFrom<BookingModel> for Booking {
    type Error = DomainError;

    fn try_from(model: BookingModel) -> Result<Self, Self::Error> {
        Ok(Booking {
            booking_id: model.booking_id,
            user_id: model.user_id,
            slot_id: model.slot_id,
            status: parse_status(&model.booking_status)?,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<BookingViewModel> for BookingView {
    type Error = DomainError;

    fn try_from(model: BookingViewModel) -> Result<Self, Self::Error> {
        Ok(BookingView {
            slot_id: model.slot_id,
            location: model.location,
            date: model.date,
            start_time: model.start_time,
            end_time: model.end_time,
            status: parse_status(&model.booking_status)?,
        })
    }
}
