use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sparkclean_utils::derive_from_reference;
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}
impl From<&dao::booking::BookingStatusEntity> for BookingStatus {
    fn from(status: &dao::booking::BookingStatusEntity) -> Self {
        match status {
            dao::booking::BookingStatusEntity::Pending => Self::Pending,
            dao::booking::BookingStatusEntity::Confirmed => Self::Confirmed,
            dao::booking::BookingStatusEntity::Completed => Self::Completed,
            dao::booking::BookingStatusEntity::Cancelled => Self::Cancelled,
        }
    }
}
impl From<&BookingStatus> for dao::booking::BookingStatusEntity {
    fn from(status: &BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Confirmed => Self::Confirmed,
            BookingStatus::Completed => Self::Completed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}
derive_from_reference!(dao::booking::BookingStatusEntity, BookingStatus);
derive_from_reference!(BookingStatus, dao::booking::BookingStatusEntity);

impl BookingStatus {
    /// Lifecycle: pending -> confirmed -> completed, any active state may be
    /// cancelled. Cancelled and completed are terminal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        match (self, next) {
            (status, next) if *status == next => true,
            (Self::Pending, Self::Confirmed) => true,
            (Self::Pending, Self::Cancelled) => true,
            (Self::Confirmed, Self::Completed) => true,
            (Self::Confirmed, Self::Cancelled) => true,
            _ => false,
        }
    }
}

/// A customer booking. Bookings are never deleted; cancellation only changes
/// the status so history stays intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub staff_id: Uuid,
    pub customer_name: Arc<str>,
    pub customer_email: Arc<str>,
    pub customer_phone: Arc<str>,
    pub date: time::Date,
    pub time: time::Time,
    pub status: BookingStatus,
    pub total_price_cents: u32,
    pub notes: Arc<str>,
    pub address: Arc<str>,
    pub created: Option<PrimitiveDateTime>,
}
impl From<&dao::booking::BookingEntity> for Booking {
    fn from(booking: &dao::booking::BookingEntity) -> Self {
        Self {
            id: booking.id,
            service_id: booking.service_id,
            staff_id: booking.staff_id,
            customer_name: booking.customer_name.clone(),
            customer_email: booking.customer_email.clone(),
            customer_phone: booking.customer_phone.clone(),
            date: booking.date,
            time: booking.time,
            status: booking.status.into(),
            total_price_cents: booking.total_price_cents,
            notes: booking.notes.clone(),
            address: booking.address.clone(),
            created: Some(booking.created),
        }
    }
}
impl TryFrom<&Booking> for dao::booking::BookingEntity {
    type Error = ServiceError;
    fn try_from(booking: &Booking) -> Result<Self, Self::Error> {
        Ok(Self {
            id: booking.id,
            service_id: booking.service_id,
            staff_id: booking.staff_id,
            customer_name: booking.customer_name.clone(),
            customer_email: booking.customer_email.clone(),
            customer_phone: booking.customer_phone.clone(),
            date: booking.date,
            time: booking.time,
            status: booking.status.into(),
            total_price_cents: booking.total_price_cents,
            notes: booking.notes.clone(),
            address: booking.address.clone(),
            created: booking.created.ok_or(ServiceError::InternalError)?,
        })
    }
}

/// Partial update for a booking; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub date: Option<time::Date>,
    pub time: Option<time::Time>,
    pub status: Option<BookingStatus>,
    pub total_price_cents: Option<u32>,
    pub notes: Option<Arc<str>>,
    pub address: Option<Arc<str>>,
}


#[automock]
#[async_trait]
pub trait BookingService {
    async fn get_all(&self) -> Result<Arc<[Booking]>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Booking>, ServiceError>;
    async fn create(&self, booking: &Booking) -> Result<Booking, ServiceError>;
    async fn update(&self, id: Uuid, patch: &BookingPatch) -> Result<(), ServiceError>;
    async fn cancel(&self, id: Uuid) -> Result<(), ServiceError>;
}
