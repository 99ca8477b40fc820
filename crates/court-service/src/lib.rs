//! # court-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, BookingService, FeedbackService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SlotService, SweepReport, SweeperService, UserService,
};
