//! Axum extractors for request handling
//!
//! Custom extractors for validation and typed path parameters.

mod path;
mod validated;

pub use path::{IdPath, LocationPath, SlotIdPath, UserIdPath, UserSlotPath};
pub use validated::ValidatedJson;
