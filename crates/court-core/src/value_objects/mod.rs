//! Value objects - immutable domain primitives

mod booking_status;
mod contact;

pub use booking_status::BookingStatus;
pub use contact::{Contact, ContactParseError};
