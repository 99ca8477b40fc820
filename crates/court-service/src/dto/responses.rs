//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use court_core::value_objects::BookingStatus;

// ============================================================================
// Slot Responses
// ============================================================================

/// A slot joined with its court
#[derive(Debug, Clone, Serialize)]
pub struct SlotResponse {
    pub slot_id: i64,
    pub court_id: i64,
    pub location: String,
    pub image: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub available: bool,
}

/// A court location with its image reference
#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub location: String,
    pub image: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// A user profile. The password hash never appears here.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub birthday: NaiveDate,
    pub gender: String,
    pub created_at: DateTime<Utc>,
}

/// Registration result
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

/// Dashboard: profile plus booking history
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserResponse,
    pub bookings: Vec<BookingHistoryItem>,
}

// ============================================================================
// Booking Responses
// ============================================================================

/// A freshly created booking
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: i64,
    pub user_id: i64,
    pub slot_id: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// One row of a user's booking history, newest slot date first
#[derive(Debug, Clone, Serialize)]
pub struct BookingHistoryItem {
    pub slot_id: i64,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
}

// ============================================================================
// Feedback Responses
// ============================================================================

/// Feedback submission result
#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub feedback_id: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Readiness response with per-dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub checks: HealthChecks,
}

/// Individual dependency checks
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: String,
}
