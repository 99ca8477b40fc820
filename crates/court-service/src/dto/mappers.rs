//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use court_core::entities::{Booking, BookingView, Location, SlotView, User};

use super::responses::{
    BookingHistoryItem, BookingResponse, LocationResponse, SlotResponse, UserResponse,
};

// ============================================================================
// Slot Mappers
// ============================================================================

impl From<&SlotView> for SlotResponse {
    fn from(view: &SlotView) -> Self {
        Self {
            slot_id: view.slot.slot_id,
            court_id: view.slot.court_id,
            location: view.location.clone(),
            image: view.image.clone(),
            date: view.slot.date,
            start_time: view.slot.start_time,
            end_time: view.slot.end_time,
            available: view.slot.available,
        }
    }
}

impl From<SlotView> for SlotResponse {
    fn from(view: SlotView) -> Self {
        Self::from(&view)
    }
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            location: location.location,
            image: location.image,
        }
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            contact: user.contact.to_string(),
            birthday: user.birthday,
            gender: user.gender.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Booking Mappers
// ============================================================================

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            booking_id: booking.booking_id,
            user_id: booking.user_id,
            slot_id: booking.slot_id,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

impl From<BookingView> for BookingHistoryItem {
    fn from(view: BookingView) -> Self {
        Self {
            slot_id: view.slot_id,
            location: view.location,
            date: view.date,
            start_time: view.start_time,
            end_time: view.end_time,
            status: view.status,
        }
    }
}
