//! User database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for the `users` table.
///
/// The password hash is deliberately not part of this model; it is fetched
/// separately so it cannot leak through entity mapping.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub birthday: NaiveDate,
    pub gender: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
