//! Booking service
//!
//! Booking a slot re-authenticates with contact and password, then defers
//! to the repository's transactional reserve-and-insert.

use tracing::{info, instrument};

use crate::dto::{BookSlotRequest, BookingResponse};

use super::auth::AuthService;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Booking service
pub struct BookingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookingService<'a> {
    /// Create a new BookingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Book a slot on behalf of the credential holder.
    ///
    /// Authentication failures come back as `InvalidCredentials` before the
    /// slot is touched. The reservation itself is atomic; a lost race
    /// surfaces as `SlotUnavailable`.
    #[instrument(skip(self, request), fields(contact = %request.contact))]
    pub async fn book(&self, slot_id: i64, request: BookSlotRequest) -> ServiceResult<BookingResponse> {
        let user = AuthService::new(self.ctx)
            .authenticate(&request.contact, &request.password)
            .await?;

        let booking = self.ctx.booking_repo().book(user.user_id, slot_id).await?;

        info!(
            user_id = user.user_id,
            slot_id,
            booking_id = booking.booking_id,
            "Slot booked"
        );

        Ok(BookingResponse::from(booking))
    }

    /// Cancel the user's active booking for a slot, releasing the slot.
    #[instrument(skip(self))]
    pub async fn release(&self, user_id: i64, slot_id: i64) -> ServiceResult<()> {
        self.ctx.booking_repo().cancel(user_id, slot_id).await?;

        info!(user_id, slot_id, "Booking cancelled");

        Ok(())
    }
}
