//! sqlx-to-domain error mapping shared by the repositories

use court_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Fallback mapping for any sqlx failure.
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique-constraint violation to a caller-supplied error,
/// falling back to `DatabaseError` for anything else.
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => on_unique(),
        _ => DomainError::DatabaseError(e.to_string()),
    }
}
