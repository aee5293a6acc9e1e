use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sparkclean_utils::DayOfWeek;
use uuid::Uuid;

use crate::DaoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeWindowEntity {
    pub start: time::Time,
    pub end: time::Time,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayAvailabilityEntity {
    pub available: bool,
    pub windows: Arc<[TimeWindowEntity]>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffEntity {
    pub id: Uuid,
    pub name: Arc<str>,
    pub email: Arc<str>,
    pub phone: Arc<str>,
    pub capable_services: Arc<[Uuid]>,
    pub weekly_availability: HashMap<DayOfWeek, DayAvailabilityEntity>,
}

#[automock]
#[async_trait]
pub trait StaffDao {
    async fn all(&self) -> Result<Arc<[StaffEntity]>, DaoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffEntity>, DaoError>;
    async fn create(&self, entity: &StaffEntity, process: &str) -> Result<(), DaoError>;
    async fn update(&self, entity: &StaffEntity, process: &str) -> Result<(), DaoError>;
    async fn delete(&self, id: Uuid, process: &str) -> Result<(), DaoError>;
}
