//! Sweeper service
//!
//! Lazily retires stale state: slots dated today or earlier become
//! unavailable, and booked slots whose date has passed become completed.
//! Runs at the start of the freshness-dependent read paths instead of as a
//! background job.

use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Counts from one sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    pub expired_slots: u64,
    pub completed_bookings: u64,
}

impl SweepReport {
    /// Whether the sweep changed anything
    pub fn is_noop(&self) -> bool {
        self.expired_slots == 0 && self.completed_bookings == 0
    }
}

/// Sweeper service
pub struct SweeperService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SweeperService<'a> {
    /// Create a new SweeperService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Expire past slots and complete past bookings. Idempotent; both
    /// updates only touch rows still in their active state.
    #[instrument(skip(self))]
    pub async fn sweep_expired(&self) -> ServiceResult<SweepReport> {
        let expired_slots = self.ctx.slot_repo().expire_past().await?;
        let completed_bookings = self.ctx.booking_repo().complete_past().await?;

        let report = SweepReport {
            expired_slots,
            completed_bookings,
        };

        if !report.is_noop() {
            debug!(
                expired_slots = report.expired_slots,
                completed_bookings = report.completed_bookings,
                "Swept stale slots and bookings"
            );
        }

        Ok(report)
    }
}
