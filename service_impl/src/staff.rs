use std::sync::Arc;

use async_trait::async_trait;
use service::{
    staff::{Staff, StaffService},
    ServiceError,
};
use uuid::Uuid;

const STAFF_SERVICE_PROCESS: &str = "staff-service";

pub struct StaffServiceImpl<StaffDao, UuidService>
where
    StaffDao: dao::staff::StaffDao + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    pub staff_dao: Arc<StaffDao>,
    pub uuid_service: Arc<UuidService>,
}
impl<StaffDao, UuidService> StaffServiceImpl<StaffDao, UuidService>
where
    StaffDao: dao::staff::StaffDao + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    pub fn new(staff_dao: Arc<StaffDao>, uuid_service: Arc<UuidService>) -> Self {
        Self {
            staff_dao,
            uuid_service,
        }
    }
}

/// Inverted or empty windows are configuration mistakes and are rejected
/// when the staff record is edited, not deferred to query time.
fn validate_windows(staff: &Staff) -> Result<(), ServiceError> {
    for day_availability in staff.weekly_availability.values() {
        for window in day_availability.windows.iter() {
            if window.start >= window.end {
                return Err(ServiceError::TimeOrderWrong(window.start, window.end));
            }
        }
    }
    Ok(())
}

#[async_trait]
impl<StaffDao, UuidService> StaffService for StaffServiceImpl<StaffDao, UuidService>
where
    StaffDao: dao::staff::StaffDao + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    async fn get_all(&self) -> Result<Arc<[Staff]>, ServiceError> {
        Ok(self
            .staff_dao
            .all()
            .await?
            .iter()
            .map(Staff::from)
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Staff>, ServiceError> {
        Ok(self
            .staff_dao
            .find_by_id(id)
            .await?
            .as_ref()
            .map(Staff::from))
    }

    async fn create(&self, staff: &Staff) -> Result<Staff, ServiceError> {
        if staff.id != Uuid::nil() {
            return Err(ServiceError::IdSetOnCreate);
        }
        validate_windows(staff)?;

        let staff = Staff {
            id: self.uuid_service.new_uuid("staff-id"),
            ..staff.clone()
        };
        self.staff_dao
            .create(&(&staff).into(), STAFF_SERVICE_PROCESS)
            .await?;
        Ok(staff)
    }

    async fn update(&self, staff: &Staff) -> Result<(), ServiceError> {
        self.staff_dao
            .find_by_id(staff.id)
            .await?
            .ok_or(ServiceError::EntityNotFound(staff.id))?;
        validate_windows(staff)?;
        self.staff_dao
            .update(&(staff).into(), STAFF_SERVICE_PROCESS)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.staff_dao
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::EntityNotFound(id))?;
        self.staff_dao.delete(id, STAFF_SERVICE_PROCESS).await?;
        Ok(())
    }
}
