//! Domain entities

mod booking;
mod location;
mod slot;
mod user;

pub use booking::{Booking, BookingView};
pub use location::Location;
pub use slot::{Slot, SlotView};
pub use user::{ProfileUpdate, User};
