//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Contact numbers are exactly 8 ASCII digits
fn validate_contact(contact: &str) -> Result<(), ValidationError> {
    if contact.len() == 8 && contact.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("contact")
            .with_message("Contact must be exactly 8 digits".into()))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: String,

    #[validate(custom(function = "validate_contact"))]
    pub contact: String,

    pub birthday: NaiveDate,

    #[validate(length(min = 1, max = 32, message = "Gender must be 1-32 characters"))]
    pub gender: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Login request; the contact number is the login identifier
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom(function = "validate_contact"))]
    pub contact: String,

    pub password: String,
}

// ============================================================================
// Booking Requests
// ============================================================================

/// Book a slot request. Booking re-authenticates with the same credentials
/// as login; there is no token scheme.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookSlotRequest {
    #[validate(custom(function = "validate_contact"))]
    pub contact: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Edit profile request. Unset fields keep their current value; changing
/// anything requires the current password.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 64, message = "First name must be 1-64 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 64, message = "Last name must be 1-64 characters"))]
    pub last_name: Option<String>,

    #[validate(custom(function = "validate_contact"))]
    pub contact: Option<String>,

    pub birthday: Option<NaiveDate>,

    #[validate(length(min = 1, max = 32, message = "Gender must be 1-32 characters"))]
    pub gender: Option<String>,

    pub old_password: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub new_password: Option<String>,
}

// ============================================================================
// Feedback Requests
// ============================================================================

/// Submit feedback request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[validate(length(min = 1, max = 2000, message = "Feedback must be 1-2000 characters"))]
    pub feedback: String,
}
