//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Generate a unique 8-digit contact number
pub fn unique_contact() -> String {
    let suffix = unique_suffix();
    let millis = chrono::Utc::now().timestamp_millis() as u64;
    format!("{:08}", (millis * 1000 + suffix) % 100_000_000)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub birthday: String,
    pub gender: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            first_name: "Test".to_string(),
            last_name: format!("User{}", unique_suffix()),
            contact: unique_contact(),
            birthday: "1995-06-01".to_string(),
            gender: "female".to_string(),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub contact: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            contact: reg.contact.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Book slot request
#[derive(Debug, Serialize)]
pub struct BookSlotRequest {
    pub contact: String,
    pub password: String,
}

impl BookSlotRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            contact: reg.contact.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

/// User profile response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub gender: String,
}

/// Slot response
#[derive(Debug, Deserialize)]
pub struct SlotResponse {
    pub slot_id: i64,
    pub location: String,
    pub available: bool,
}

/// Location response
#[derive(Debug, Deserialize)]
pub struct LocationResponse {
    pub location: String,
    pub image: String,
}

/// Booking response
#[derive(Debug, Deserialize)]
pub struct BookingResponse {
    pub booking_id: i64,
    pub user_id: i64,
    pub slot_id: i64,
    pub status: String,
}

/// One dashboard booking entry
#[derive(Debug, Deserialize)]
pub struct BookingHistoryItem {
    pub slot_id: i64,
    pub location: String,
    pub status: String,
}

/// Dashboard response
#[derive(Debug, Deserialize)]
pub struct DashboardResponse {
    pub user: UserResponse,
    pub bookings: Vec<BookingHistoryItem>,
}

/// Error body shape
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail shape
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
