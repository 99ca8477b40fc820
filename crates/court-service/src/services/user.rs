//! User service
//!
//! Dashboard (profile plus booking history) and profile editing.

use tracing::{info, instrument, warn};

use court_common::{validate_password_strength, AppError};
use court_core::entities::ProfileUpdate;
use court_core::value_objects::Contact;
use court_core::DomainError;

use crate::dto::{BookingHistoryItem, DashboardResponse, UpdateProfileRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::sweeper::SweeperService;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Dashboard: the user's profile and booking history, newest slot date
    /// first. Sweeps expired slots and finished bookings first so the
    /// history statuses are current.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, user_id: i64) -> ServiceResult<DashboardResponse> {
        SweeperService::new(self.ctx).sweep_expired().await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let bookings = self.ctx.booking_repo().list_for_user(user_id).await?;

        Ok(DashboardResponse {
            user: UserResponse::from(user),
            bookings: bookings.into_iter().map(BookingHistoryItem::from).collect(),
        })
    }

    /// Edit profile fields and optionally the password.
    ///
    /// Any change requires the current password; a mismatch is
    /// `WrongOldPassword` (400), not a generic credential failure.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: i64,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let stored_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if !self
            .ctx
            .password_service()
            .verify(&request.old_password, &stored_hash)
        {
            warn!(user_id, "Profile update rejected: wrong old password");
            return Err(ServiceError::App(AppError::WrongOldPassword));
        }

        let new_password_hash = match &request.new_password {
            Some(new_password) => {
                validate_password_strength(new_password).map_err(ServiceError::from)?;
                Some(
                    self.ctx
                        .password_service()
                        .hash(new_password)
                        .map_err(ServiceError::from)?,
                )
            }
            None => None,
        };

        let contact = match request.contact {
            Some(raw) => Some(Contact::new(raw).map_err(DomainError::from)?),
            None => None,
        };

        let update = ProfileUpdate {
            first_name: request.first_name,
            last_name: request.last_name,
            contact,
            birthday: request.birthday,
            gender: request.gender,
        };

        self.ctx
            .user_repo()
            .update_profile(user_id, &update, new_password_hash.as_deref())
            .await?;

        info!(user_id, "Profile updated");

        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(user))
    }
}
