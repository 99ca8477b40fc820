//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Booking, BookingView, Location, ProfileUpdate, SlotView, User};
use crate::error::DomainError;
use crate::value_objects::Contact;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Slot Repository
// ============================================================================

#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// List available slots joined with their court, optionally filtered to
    /// an exact date, ordered by (date, start_time) ascending
    async fn list_available(&self, date: Option<NaiveDate>) -> RepoResult<Vec<SlotView>>;

    /// List available slots at one location, ordered by (date, start_time)
    async fn list_by_location(&self, location: &str) -> RepoResult<Vec<SlotView>>;

    /// List distinct locations with their images
    async fn list_locations(&self) -> RepoResult<Vec<Location>>;

    /// Find a slot by id regardless of availability
    async fn find_by_id(&self, slot_id: i64) -> RepoResult<Option<SlotView>>;

    /// Mark every slot dated today or earlier unavailable.
    /// Returns the number of slots flipped. Idempotent.
    async fn expire_past(&self) -> RepoResult<u64>;
}

// ============================================================================
// Booking Repository
// ============================================================================

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically reserve the slot and insert a `booked` booking row.
    ///
    /// The reservation is a compare-and-set on the slot's availability flag
    /// inside the same transaction as the insert, so two concurrent calls
    /// for one slot yield exactly one success. Fails with `SlotNotFound` if
    /// the slot does not exist and `SlotUnavailable` if it is already taken.
    async fn book(&self, user_id: i64, slot_id: i64) -> RepoResult<Booking>;

    /// Atomically cancel the user's active booking for the slot and release
    /// the slot back to available.
    ///
    /// Fails with `BookingNotFound` if the user holds no `booked` booking
    /// for that slot (already cancelled, completed, or never existed).
    async fn cancel(&self, user_id: i64, slot_id: i64) -> RepoResult<()>;

    /// List the user's bookings joined with slot and court,
    /// ordered by slot date descending
    async fn list_for_user(&self, user_id: i64) -> RepoResult<Vec<BookingView>>;

    /// Mark every `booked` booking whose slot date has passed as `completed`.
    /// Returns the number of bookings flipped. Idempotent.
    async fn complete_past(&self) -> RepoResult<u64>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by id
    async fn find_by_id(&self, user_id: i64) -> RepoResult<Option<User>>;

    /// Find user by contact (login identifier)
    async fn find_by_contact(&self, contact: &Contact) -> RepoResult<Option<User>>;

    /// Create a new user, returning the assigned id.
    /// Duplicate contact maps to `ContactAlreadyRegistered`.
    async fn create(&self, user: &NewUser) -> RepoResult<i64>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, user_id: i64) -> RepoResult<Option<String>>;

    /// Apply profile field updates and optionally a new password hash,
    /// as one statement
    async fn update_profile(
        &self,
        user_id: i64,
        update: &ProfileUpdate,
        new_password_hash: Option<&str>,
    ) -> RepoResult<()>;
}

/// Fields required to create a user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub contact: Contact,
    pub birthday: NaiveDate,
    pub gender: String,
    pub password_hash: String,
}

// ============================================================================
// Feedback Repository
// ============================================================================

#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// Append a feedback row, returning the assigned id
    async fn create(&self, feedback: &str) -> RepoResult<i64>;
}
