//! Authentication service
//!
//! Handles user registration and credential verification. There is no token
//! scheme; operations that act on behalf of a user re-check credentials.

use tracing::{info, instrument, warn};

use court_common::{validate_password_strength, AppError};
use court_core::entities::User;
use court_core::DomainError;
use court_core::traits::NewUser;
use court_core::value_objects::Contact;

use crate::dto::{LoginRequest, RegisterRequest, RegisterResponse, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(contact = %request.contact))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        // Validate password strength before proceeding
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let contact = Contact::new(request.contact).map_err(DomainError::from)?;

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(ServiceError::from)?;

        let new_user = NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            contact,
            birthday: request.birthday,
            gender: request.gender,
            password_hash,
        };

        // Duplicate contact surfaces as ContactAlreadyRegistered (409)
        let user_id = self.ctx.user_repo().create(&new_user).await?;

        info!(user_id, "User registered successfully");

        Ok(RegisterResponse { user_id })
    }

    /// Login with contact and password, returning the profile
    #[instrument(skip(self, request), fields(contact = %request.contact))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<UserResponse> {
        let user = self.authenticate(&request.contact, &request.password).await?;

        info!(user_id = user.user_id, "User logged in successfully");

        Ok(UserResponse::from(user))
    }

    /// Verify a contact/password pair and return the matching user.
    ///
    /// Every failure mode (unknown contact, missing hash, wrong password,
    /// unparsable legacy hash) collapses into the same `InvalidCredentials`
    /// so the response does not reveal which part was wrong.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, contact: &str, password: &str) -> ServiceResult<User> {
        let contact = Contact::new(contact)
            .map_err(|_| ServiceError::App(AppError::InvalidCredentials))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_contact(&contact)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown contact");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.user_id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !self.ctx.password_service().verify(password, &password_hash) {
            warn!(user_id = user.user_id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        Ok(user)
    }
}
