use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::ServiceError;

/// Spacing between candidate appointment start times.
pub const SLOT_GRANULARITY_MINUTES: u16 = 30;

/// An ephemeral query projection: one bookable start time for one staff
/// member on the queried date. Recomputed on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlot {
    pub time: time::Time,
    pub staff_id: Uuid,
    pub staff_name: Arc<str>,
}

#[automock]
#[async_trait]
pub trait AvailabilityService {
    /// All open slots for the given offering on the given date, ascending by
    /// time. Staff members sharing a start time stay distinct; an unknown
    /// offering yields an empty list, not an error.
    async fn get_available_slots(
        &self,
        service_id: Uuid,
        date: time::Date,
    ) -> Result<Arc<[AvailableSlot]>, ServiceError>;
}
