//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod booking;
pub mod context;
pub mod error;
pub mod feedback;
pub mod slot;
pub mod sweeper;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use booking::BookingService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
pub use slot::SlotService;
pub use sweeper::{SweepReport, SweeperService};
pub use user::UserService;
