use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use service::{
    booking::{Booking, BookingPatch, BookingService, BookingStatus},
    ServiceError, ValidationFailureItem,
};
use sparkclean_utils::minutes_since_midnight;
use tracing::instrument;
use uuid::Uuid;

use crate::availability::{intervals_overlap, occupied_intervals};

const BOOKING_SERVICE_PROCESS: &str = "booking-service";

pub struct BookingServiceImpl<BookingDao, ServiceOfferingDao, StaffDao, ClockService, UuidService>
where
    BookingDao: dao::booking::BookingDao + Send + Sync,
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    StaffDao: dao::staff::StaffDao + Send + Sync,
    ClockService: service::clock::ClockService + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    pub booking_dao: Arc<BookingDao>,
    pub service_offering_dao: Arc<ServiceOfferingDao>,
    pub staff_dao: Arc<StaffDao>,
    pub clock_service: Arc<ClockService>,
    pub uuid_service: Arc<UuidService>,
    // Serializes booking mutations so the commit-time conflict re-check and
    // the insert happen atomically with respect to other writers.
    write_lock: tokio::sync::Mutex<()>,
}
impl<BookingDao, ServiceOfferingDao, StaffDao, ClockService, UuidService>
    BookingServiceImpl<BookingDao, ServiceOfferingDao, StaffDao, ClockService, UuidService>
where
    BookingDao: dao::booking::BookingDao + Send + Sync,
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    StaffDao: dao::staff::StaffDao + Send + Sync,
    ClockService: service::clock::ClockService + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    pub fn new(
        booking_dao: Arc<BookingDao>,
        service_offering_dao: Arc<ServiceOfferingDao>,
        staff_dao: Arc<StaffDao>,
        clock_service: Arc<ClockService>,
        uuid_service: Arc<UuidService>,
    ) -> Self {
        Self {
            booking_dao,
            service_offering_dao,
            staff_dao,
            clock_service,
            uuid_service,
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Commit-time re-validation: between the availability query and the
    /// booking commit another caller may have taken the slot, so the
    /// interval is checked again against the staff member's current
    /// bookings before the insert.
    async fn check_slot_still_free(
        &self,
        booking: &Booking,
        requested_duration: u32,
    ) -> Result<(), ServiceError> {
        let duration_by_offering: HashMap<Uuid, u32> = self
            .service_offering_dao
            .all()
            .await?
            .iter()
            .map(|offering| (offering.id, offering.duration_minutes))
            .collect();
        let existing: Vec<Booking> = self
            .booking_dao
            .find_by_staff_and_date(booking.staff_id, booking.date)
            .await?
            .iter()
            .map(Booking::from)
            .collect();
        let occupied = occupied_intervals(&existing, &duration_by_offering);

        let slot_start = minutes_since_midnight(booking.time) as u32;
        let slot_end = slot_start + requested_duration;
        if occupied
            .iter()
            .any(|&(start, end)| intervals_overlap(slot_start, slot_end, start, end))
        {
            return Err(ServiceError::SlotNoLongerAvailable(
                booking.staff_id,
                booking.date,
                booking.time,
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl<BookingDao, ServiceOfferingDao, StaffDao, ClockService, UuidService> BookingService
    for BookingServiceImpl<BookingDao, ServiceOfferingDao, StaffDao, ClockService, UuidService>
where
    BookingDao: dao::booking::BookingDao + Send + Sync,
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    StaffDao: dao::staff::StaffDao + Send + Sync,
    ClockService: service::clock::ClockService + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    async fn get_all(&self) -> Result<Arc<[Booking]>, ServiceError> {
        Ok(self
            .booking_dao
            .all()
            .await?
            .iter()
            .map(Booking::from)
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Booking>, ServiceError> {
        Ok(self
            .booking_dao
            .find_by_id(id)
            .await?
            .as_ref()
            .map(Booking::from))
    }

    #[instrument(skip(self, booking))]
    async fn create(&self, booking: &Booking) -> Result<Booking, ServiceError> {
        if booking.id != Uuid::nil() {
            return Err(ServiceError::IdSetOnCreate);
        }

        let mut validation = Vec::with_capacity(8);
        if booking.created.is_some() {
            validation.push(ValidationFailureItem::InvalidValue("created".into()));
        }
        if booking.service_id == Uuid::nil() {
            validation.push(ValidationFailureItem::InvalidValue("service_id".into()));
        }
        if booking.staff_id == Uuid::nil() {
            validation.push(ValidationFailureItem::InvalidValue("staff_id".into()));
        }
        if !matches!(
            booking.status,
            BookingStatus::Pending | BookingStatus::Confirmed
        ) {
            validation.push(ValidationFailureItem::InvalidValue("status".into()));
        }
        if !validation.is_empty() {
            return Err(ServiceError::ValidationError(validation.into()));
        }

        let offering = self
            .service_offering_dao
            .find_by_id(booking.service_id)
            .await?
            .ok_or(ServiceError::EntityNotFound(booking.service_id))?;
        let staff = self
            .staff_dao
            .find_by_id(booking.staff_id)
            .await?
            .ok_or(ServiceError::EntityNotFound(booking.staff_id))?;
        if !staff.capable_services.contains(&booking.service_id) {
            return Err(ServiceError::ValidationError(
                [ValidationFailureItem::InvalidValue("staff_id".into())].into(),
            ));
        }

        let _guard = self.write_lock.lock().await;
        self.check_slot_still_free(booking, offering.duration_minutes)
            .await?;

        let new_booking = Booking {
            id: self.uuid_service.new_uuid("booking-id"),
            created: Some(self.clock_service.date_time_now()),
            ..booking.clone()
        };
        self.booking_dao
            .create(&(&new_booking).try_into()?, BOOKING_SERVICE_PROCESS)
            .await?;
        Ok(new_booking)
    }

    async fn update(&self, id: Uuid, patch: &BookingPatch) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut booking = self
            .booking_dao
            .find_by_id(id)
            .await?
            .as_ref()
            .map(Booking::from)
            .ok_or(ServiceError::EntityNotFound(id))?;

        if let Some(status) = patch.status {
            if !booking.status.can_transition_to(status) {
                return Err(ServiceError::ValidationError(
                    [ValidationFailureItem::ModificationNotAllowed("status".into())].into(),
                ));
            }
            booking.status = status;
        }
        if let Some(date) = patch.date {
            booking.date = date;
        }
        if let Some(time) = patch.time {
            booking.time = time;
        }
        if let Some(total_price_cents) = patch.total_price_cents {
            booking.total_price_cents = total_price_cents;
        }
        if let Some(notes) = &patch.notes {
            booking.notes = notes.clone();
        }
        if let Some(address) = &patch.address {
            booking.address = address.clone();
        }

        self.booking_dao
            .update(&(&booking).try_into()?, BOOKING_SERVICE_PROCESS)
            .await?;
        Ok(())
    }

    /// Idempotent. Cancels regardless of the current status and never
    /// deletes the record, so history and metrics stay intact.
    async fn cancel(&self, id: Uuid) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut booking = self
            .booking_dao
            .find_by_id(id)
            .await?
            .as_ref()
            .map(Booking::from)
            .ok_or(ServiceError::EntityNotFound(id))?;
        if booking.status == BookingStatus::Cancelled {
            return Ok(());
        }
        booking.status = BookingStatus::Cancelled;
        self.booking_dao
            .update(&(&booking).try_into()?, BOOKING_SERVICE_PROCESS)
            .await?;
        Ok(())
    }
}
