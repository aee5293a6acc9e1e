use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use service::{
    availability::{AvailabilityService, AvailableSlot, SLOT_GRANULARITY_MINUTES},
    booking::{Booking, BookingStatus},
    staff::{Staff, TimeWindow},
    ServiceError,
};
use sparkclean_utils::{minutes_since_midnight, time_from_minutes, DayOfWeek};
use tracing::instrument;
use uuid::Uuid;

pub struct AvailabilityServiceImpl<ServiceOfferingDao, StaffDao, BookingDao>
where
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    StaffDao: dao::staff::StaffDao + Send + Sync,
    BookingDao: dao::booking::BookingDao + Send + Sync,
{
    pub service_offering_dao: Arc<ServiceOfferingDao>,
    pub staff_dao: Arc<StaffDao>,
    pub booking_dao: Arc<BookingDao>,
}
impl<ServiceOfferingDao, StaffDao, BookingDao>
    AvailabilityServiceImpl<ServiceOfferingDao, StaffDao, BookingDao>
where
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    StaffDao: dao::staff::StaffDao + Send + Sync,
    BookingDao: dao::booking::BookingDao + Send + Sync,
{
    pub fn new(
        service_offering_dao: Arc<ServiceOfferingDao>,
        staff_dao: Arc<StaffDao>,
        booking_dao: Arc<BookingDao>,
    ) -> Self {
        Self {
            service_offering_dao,
            staff_dao,
            booking_dao,
        }
    }
}

/// Candidate start times within one working window, as minutes since
/// midnight, spaced `granularity_minutes` apart beginning at the window
/// start. A start at or past the window end is never produced, so an empty
/// or inverted window yields nothing.
pub fn window_start_times(window: &TimeWindow, granularity_minutes: u16) -> Vec<u16> {
    let mut starts = Vec::new();
    if granularity_minutes == 0 {
        return starts;
    }
    let end = minutes_since_midnight(window.end);
    let mut current = minutes_since_midnight(window.start);
    while current < end {
        starts.push(current);
        current += granularity_minutes;
    }
    starts
}

/// Half-open interval intersection test over minutes since midnight. Covers
/// containment, partial overlap from either side and exact coincidence;
/// touching endpoints do not conflict and an empty interval overlaps
/// nothing, not even when it sits inside the other interval.
pub fn intervals_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    if a_start >= a_end || b_start >= b_end {
        return false;
    }
    a_start < b_end && a_end > b_start
}

/// The intervals occupied by a staff member's bookings on one date, in u32
/// so an oversized configured duration widens the interval instead of
/// wrapping. Cancelled bookings block nothing; each booking occupies the
/// duration of its own offering at the time of the check, not the duration
/// of the offering currently being queried. Bookings whose offering no
/// longer exists cannot be measured and are skipped.
pub fn occupied_intervals(
    bookings: &[Booking],
    duration_by_offering: &HashMap<Uuid, u32>,
) -> Vec<(u32, u32)> {
    bookings
        .iter()
        .filter(|booking| booking.status != BookingStatus::Cancelled)
        .filter_map(|booking| {
            let duration = duration_by_offering.get(&booking.service_id)?;
            let start = minutes_since_midnight(booking.time) as u32;
            Some((start, start + duration))
        })
        .collect()
}

#[async_trait]
impl<ServiceOfferingDao, StaffDao, BookingDao> AvailabilityService
    for AvailabilityServiceImpl<ServiceOfferingDao, StaffDao, BookingDao>
where
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    StaffDao: dao::staff::StaffDao + Send + Sync,
    BookingDao: dao::booking::BookingDao + Send + Sync,
{
    #[instrument(skip(self))]
    async fn get_available_slots(
        &self,
        service_id: Uuid,
        date: time::Date,
    ) -> Result<Arc<[AvailableSlot]>, ServiceError> {
        // An unknown offering has no availability; that is an answer, not an
        // error.
        let Some(offering) = self.service_offering_dao.find_by_id(service_id).await? else {
            return Ok(Arc::new([]));
        };
        let requested_duration = offering.duration_minutes;
        let day = DayOfWeek::from_date(date);

        let duration_by_offering: HashMap<Uuid, u32> = self
            .service_offering_dao
            .all()
            .await?
            .iter()
            .map(|offering| (offering.id, offering.duration_minutes))
            .collect();

        let eligible_staff: Vec<Staff> = self
            .staff_dao
            .all()
            .await?
            .iter()
            .map(Staff::from)
            .filter(|staff| staff.can_perform(service_id))
            .collect();

        let mut candidates: Vec<(u16, Uuid, Arc<str>)> = Vec::new();
        for staff in &eligible_staff {
            let Some(day_availability) = staff.weekly_availability.get(&day) else {
                continue;
            };
            if !day_availability.available {
                continue;
            }

            let bookings: Vec<Booking> = self
                .booking_dao
                .find_by_staff_and_date(staff.id, date)
                .await?
                .iter()
                .map(Booking::from)
                .collect();
            let occupied = occupied_intervals(&bookings, &duration_by_offering);

            for window in day_availability.windows.iter() {
                for slot_start in window_start_times(window, SLOT_GRANULARITY_MINUTES) {
                    let slot_end = slot_start as u32 + requested_duration;
                    let blocked = occupied.iter().any(|&(start, end)| {
                        intervals_overlap(slot_start as u32, slot_end, start, end)
                    });
                    if !blocked {
                        candidates.push((slot_start, staff.id, staff.name.clone()));
                    }
                }
            }
        }

        // Stable sort keeps staff order for equal times; dedup drops repeats
        // of (time, staff) from overlapping windows but keeps distinct staff
        // sharing a start time.
        candidates.sort_by_key(|&(minutes, _, _)| minutes);
        let mut seen: HashSet<(u16, Uuid)> = HashSet::with_capacity(candidates.len());
        let mut slots = Vec::with_capacity(candidates.len());
        for (minutes, staff_id, staff_name) in candidates {
            if !seen.insert((minutes, staff_id)) {
                continue;
            }
            slots.push(AvailableSlot {
                time: time_from_minutes(minutes).map_err(|_| ServiceError::InternalError)?,
                staff_id,
                staff_name,
            });
        }
        Ok(slots.into())
    }
}
