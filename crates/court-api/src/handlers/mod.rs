//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod bookings;
pub mod feedback;
pub mod health;
pub mod locations;
pub mod slots;
pub mod users;
