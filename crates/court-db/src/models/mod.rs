//! Database models with SQLx `FromRow` derives

mod booking;
mod court;
mod slot;
mod user;

pub use booking::{BookingModel, BookingViewModel};
pub use court::LocationModel;
pub use slot::SlotWithCourtModel;
pub use user::UserModel;
