use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::ServiceError;

/// A bookable cleaning service as offered to customers. `duration_minutes`
/// determines the interval a booking of this offering occupies; the price is
/// snapshotted into the booking record at booking time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub name: Arc<str>,
    pub description: Arc<str>,
    pub duration_minutes: u32,
    pub price_cents: u32,
    pub category: Arc<str>,
    pub icon: Arc<str>,
}
impl From<&dao::service_offering::ServiceOfferingEntity> for ServiceOffering {
    fn from(offering: &dao::service_offering::ServiceOfferingEntity) -> Self {
        Self {
            id: offering.id,
            name: offering.name.clone(),
            description: offering.description.clone(),
            duration_minutes: offering.duration_minutes,
            price_cents: offering.price_cents,
            category: offering.category.clone(),
            icon: offering.icon.clone(),
        }
    }
}
impl From<&ServiceOffering> for dao::service_offering::ServiceOfferingEntity {
    fn from(offering: &ServiceOffering) -> Self {
        Self {
            id: offering.id,
            name: offering.name.clone(),
            description: offering.description.clone(),
            duration_minutes: offering.duration_minutes,
            price_cents: offering.price_cents,
            category: offering.category.clone(),
            icon: offering.icon.clone(),
        }
    }
}

#[automock]
#[async_trait]
pub trait ServiceOfferingService {
    async fn get_all(&self) -> Result<Arc<[ServiceOffering]>, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<ServiceOffering>, ServiceError>;
    async fn create(&self, offering: &ServiceOffering) -> Result<ServiceOffering, ServiceError>;
    async fn update(&self, offering: &ServiceOffering) -> Result<(), ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
}
