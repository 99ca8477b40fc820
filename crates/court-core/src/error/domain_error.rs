//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Slot not found: {0}")]
    SlotNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("No active booking for this slot")]
    BookingNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Contact must be an 8-digit number")]
    InvalidContact,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Credential Errors
    // =========================================================================
    #[error("Invalid contact or password")]
    InvalidCredentials,

    #[error("Incorrect old password")]
    WrongOldPassword,

    // =========================================================================
    // Booking Rule Violations
    // =========================================================================
    #[error("Slot is no longer available: {0}")]
    SlotUnavailable(i64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Contact already registered")]
    ContactAlreadyRegistered,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::SlotNotFound(_) => "UNKNOWN_SLOT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BookingNotFound => "UNKNOWN_BOOKING",

            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidContact => "INVALID_CONTACT",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::WrongOldPassword => "WRONG_OLD_PASSWORD",

            Self::SlotUnavailable(_) => "SLOT_UNAVAILABLE",

            Self::ContactAlreadyRegistered => "CONTACT_ALREADY_REGISTERED",

            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SlotNotFound(_) | Self::UserNotFound(_) | Self::BookingNotFound
        )
    }

    /// Check if this maps to a 400 Bad Request.
    ///
    /// Credential failures are deliberately grouped here: there is no token
    /// scheme, so they surface as a structured 400 rather than a 401.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidContact
                | Self::WeakPassword(_)
                | Self::InvalidCredentials
                | Self::WrongOldPassword
                | Self::SlotUnavailable(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ContactAlreadyRegistered)
    }
}

impl From<crate::value_objects::ContactParseError> for DomainError {
    fn from(_: crate::value_objects::ContactParseError) -> Self {
        Self::InvalidContact
    }
}
