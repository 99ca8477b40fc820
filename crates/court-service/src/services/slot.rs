//! Slot service
//!
//! Slot and location listings. The availability listing sweeps first so
//! expired slots never show up.

use chrono::NaiveDate;
use tracing::instrument;

use crate::dto::{LocationResponse, SlotResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::sweeper::SweeperService;

/// Slot service
pub struct SlotService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SlotService<'a> {
    /// Create a new SlotService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List available slots, optionally filtered to an exact date
    #[instrument(skip(self))]
    pub async fn list_available(&self, date: Option<NaiveDate>) -> ServiceResult<Vec<SlotResponse>> {
        SweeperService::new(self.ctx).sweep_expired().await?;

        let slots = self.ctx.slot_repo().list_available(date).await?;
        Ok(slots.into_iter().map(SlotResponse::from).collect())
    }

    /// List available slots at one location
    #[instrument(skip(self))]
    pub async fn list_by_location(&self, location: &str) -> ServiceResult<Vec<SlotResponse>> {
        let slots = self.ctx.slot_repo().list_by_location(location).await?;
        Ok(slots.into_iter().map(SlotResponse::from).collect())
    }

    /// List distinct court locations with their images
    #[instrument(skip(self))]
    pub async fn list_locations(&self) -> ServiceResult<Vec<LocationResponse>> {
        let locations = self.ctx.slot_repo().list_locations().await?;
        Ok(locations.into_iter().map(LocationResponse::from).collect())
    }

    /// Fetch one slot regardless of availability
    #[instrument(skip(self))]
    pub async fn get(&self, slot_id: i64) -> ServiceResult<SlotResponse> {
        let slot = self
            .ctx
            .slot_repo()
            .find_by_id(slot_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Slot", slot_id.to_string()))?;

        Ok(SlotResponse::from(slot))
    }
}
