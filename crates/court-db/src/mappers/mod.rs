//! Model -> entity mappers
//!
//! Conversions are fallible where a stored value (status string, contact)
//! must re-pass domain validation on the way out of the database.

mod booking;
mod slot;
mod user;
