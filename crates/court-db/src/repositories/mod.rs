//! PostgreSQL repository implementations

mod booking;
mod error;
mod feedback;
mod slot;
mod user;

pub use booking::PgBookingRepository;
pub use feedback::PgFeedbackRepository;
pub use slot::PgSlotRepository;
pub use user::PgUserRepository;
