//! Service context - dependency container for services
//!
//! Holds all repositories and shared helpers needed by services.

use std::sync::Arc;

use court_common::PasswordService;
use court_core::traits::{
    BookingRepository, FeedbackRepository, SlotRepository, UserRepository,
};
use court_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Password hashing service
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    slot_repo: Arc<dyn SlotRepository>,
    booking_repo: Arc<dyn BookingRepository>,
    user_repo: Arc<dyn UserRepository>,
    feedback_repo: Arc<dyn FeedbackRepository>,

    // Services
    password_service: Arc<PasswordService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        slot_repo: Arc<dyn SlotRepository>,
        booking_repo: Arc<dyn BookingRepository>,
        user_repo: Arc<dyn UserRepository>,
        feedback_repo: Arc<dyn FeedbackRepository>,
        password_service: Arc<PasswordService>,
    ) -> Self {
        Self {
            pool,
            slot_repo,
            booking_repo,
            user_repo,
            feedback_repo,
            password_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the slot repository
    pub fn slot_repo(&self) -> &dyn SlotRepository {
        self.slot_repo.as_ref()
    }

    /// Get the booking repository
    pub fn booking_repo(&self) -> &dyn BookingRepository {
        self.booking_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the feedback repository
    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }

    // === Services ===

    /// Get the password hashing service
    pub fn password_service(&self) -> &PasswordService {
        self.password_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    slot_repo: Option<Arc<dyn SlotRepository>>,
    booking_repo: Option<Arc<dyn BookingRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
    password_service: Option<Arc<PasswordService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            slot_repo: None,
            booking_repo: None,
            user_repo: None,
            feedback_repo: None,
            password_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn slot_repo(mut self, repo: Arc<dyn SlotRepository>) -> Self {
        self.slot_repo = Some(repo);
        self
    }

    pub fn booking_repo(mut self, repo: Arc<dyn BookingRepository>) -> Self {
        self.booking_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    pub fn password_service(mut self, service: Arc<PasswordService>) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.slot_repo
                .ok_or_else(|| super::error::ServiceError::validation("slot_repo is required"))?,
            self.booking_repo
                .ok_or_else(|| super::error::ServiceError::validation("booking_repo is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.feedback_repo
                .ok_or_else(|| super::error::ServiceError::validation("feedback_repo is required"))?,
            self.password_service
                .unwrap_or_else(|| std::sync::Arc::new(PasswordService::new())),
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
