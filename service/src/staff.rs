use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sparkclean_utils::DayOfWeek;
use uuid::Uuid;

use crate::ServiceError;

/// One contiguous span of working hours within a single day. `start < end`
/// is enforced when staff records are created or updated; windows never
/// cross midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: time::Time,
    pub end: time::Time,
}
impl From<&dao::staff::TimeWindowEntity> for TimeWindow {
    fn from(window: &dao::staff::TimeWindowEntity) -> Self {
        Self {
            start: window.start,
            end: window.end,
        }
    }
}
impl From<&TimeWindow> for dao::staff::TimeWindowEntity {
    fn from(window: &TimeWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub available: bool,
    pub windows: Arc<[TimeWindow]>,
}
impl From<&dao::staff::DayAvailabilityEntity> for DayAvailability {
    fn from(day: &dao::staff::DayAvailabilityEntity) -> Self {
        Self {
            available: day.available,
            windows: day.windows.iter().map(TimeWindow::from).collect(),
        }
    }
}
impl From<&DayAvailability> for dao::staff::DayAvailabilityEntity {
    fn from(day: &DayAvailability) -> Self {
        Self {
            available: day.available,
            windows: day
                .windows
                .iter()
                .map(dao::staff::TimeWindowEntity::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staff {
    pub id: Uuid,
    pub name: Arc<str>,
    pub email: Arc<str>,
    pub phone: Arc<str>,
    pub capable_services: Arc<[Uuid]>,
    pub weekly_availability: HashMap<DayOfWeek, DayAvailability>,
}
impl From<&dao::staff::StaffEntity> for Staff {
    fn from(staff: &dao::staff::StaffEntity) -> Self {
        Self {
            id: staff.id,
            name: staff.name.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone(),
            capable_services: staff.capable_services.clone(),
            weekly_availability: staff
                .weekly_availability
                .iter()
                .map(|(day, availability)| (*day, DayAvailability::from(availability)))
                .collect(),
        }
    }
}
impl From<&Staff> for dao::staff::StaffEntity {
    fn from(staff: &Staff) -> Self {
        Self {
            id: staff.id,
            name: staff.name.clone(),
            email: staff.email.clone(),
            phone: staff.phone.clone(),
            capable_services: staff.capable_services.clone(),
            weekly_availability: staff
                .weekly_availability
                .iter()
                .map(|(day, availability)| {
                    (*day, dao::staff::DayAvailabilityEntity::from(availability))
                })
                .collect(),
        }
    }
}

impl Staff {
    pub fn can_perform(&self, service_id: Uuid) -> bool {
        self.capable_services.contains(&service_id)
    }
}

#[automock]
#[async_trait]
pub trait StaffService {
    async fn get_all(&self) -> Result<Arc<[Staff]>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Staff>, ServiceError>;
    async fn create(&self, staff: &Staff) -> Result<Staff, ServiceError>;
    async fn update(&self, staff: &Staff) -> Result<(), ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}
