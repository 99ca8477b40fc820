//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use court_core::entities::{ProfileUpdate, User};
use court_core::error::DomainError;
use court_core::traits::{NewUser, RepoResult, UserRepository};
use court_core::value_objects::Contact;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: i64) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT user_id, first_name, last_name, contact, birthday, gender,
                   created_at, updated_at
            FROM users
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_contact(&self, contact: &Contact) -> RepoResult<Option<User>> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            SELECT user_id, first_name, last_name, contact, birthday, gender,
                   created_at, updated_at
            FROM users
            WHERE contact = $1
            ",
        )
        .bind(contact.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(User::try_from).transpose()
    }

    #[instrument(skip(self, user), fields(contact = %user.contact))]
    async fn create(&self, user: &NewUser) -> RepoResult<i64> {
        let user_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (first_name, last_name, contact, birthday, gender, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING user_id
            ",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.contact.as_str())
        .bind(user.birthday)
        .bind(&user.gender)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ContactAlreadyRegistered))?;

        Ok(user_id)
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, user_id: i64) -> RepoResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, String>(
            r"SELECT password_hash FROM users WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(hash)
    }

    /// Apply a partial profile update. Unset fields keep their current value
    /// via COALESCE; the optional hash swaps the password in the same
    /// statement. A contact change that collides with another account
    /// surfaces as `ContactAlreadyRegistered`.
    #[instrument(skip(self, update, new_password_hash))]
    async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
        new_password_hash: Option<&str>,
    ) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                contact = COALESCE($4, contact),
                birthday = COALESCE($5, birthday),
                gender = COALESCE($6, gender),
                password_hash = COALESCE($7, password_hash),
                updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .bind(update.first_name.as_deref())
        .bind(update.last_name.as_deref())
        .bind(update.contact.as_ref().map(Contact::as_str))
        .bind(update.birthday)
        .bind(update.gender.as_deref())
        .bind(new_password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::ContactAlreadyRegistered))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user_id));
        }

        Ok(())
    }
}
