//! Password hashing and verification utilities
//!
//! Uses Argon2id for secure password hashing (OWASP recommended).

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use court_core::DomainError;

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a stored hash.
///
/// Stored values that are not valid PHC strings (e.g. legacy plaintext rows
/// predating the hashing migration) never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against a hash
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        verify_password(password, hash)
    }
}

/// Validate password strength
///
/// Returns `Ok(())` if the password meets requirements:
/// - At least 8 characters
/// - Contains at least one letter
/// - Contains at least one digit
///
/// # Errors
/// Returns [`DomainError::WeakPassword`] if the password doesn't meet
/// requirements
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    let weak = |reason: &str| AppError::Domain(DomainError::WeakPassword(reason.to_string()));

    if password.len() < 8 {
        return Err(weak("must be at least 8 characters long"));
    }

    if !password.chars().any(char::is_alphabetic) {
        return Err(weak("must contain at least one letter"));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(weak("must contain at least one digit"));
    }

    Ok(())
}
