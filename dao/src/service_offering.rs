use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::DaoError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceOfferingEntity {
    pub id: Uuid,
    pub name: Arc<str>,
    pub description: Arc<str>,
    pub duration_minutes: u32,
    pub price_cents: u32,
    pub category: Arc<str>,
    pub icon: Arc<str>,
}

#[automock]
#[async_trait]
pub trait ServiceOfferingDao {
    async fn all(&self) -> Result<Arc<[ServiceOfferingEntity]>, DaoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOfferingEntity>, DaoError>;
    async fn create(&self, entity: &ServiceOfferingEntity, process: &str) -> Result<(), DaoError>;
    async fn update(&self, entity: &ServiceOfferingEntity, process: &str) -> Result<(), DaoError>;
    async fn delete(&self, id: Uuid, process: &str) -> Result<(), DaoError>;
}
