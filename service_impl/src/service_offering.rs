use std::sync::Arc;

use async_trait::async_trait;
use service::{
    service_offering::{ServiceOffering, ServiceOfferingService},
    ServiceError, ValidationFailureItem,
};
use uuid::Uuid;

const SERVICE_OFFERING_PROCESS: &str = "service-offering-service";

/// Working windows never cross midnight, so no appointment can run longer
/// than a day.
const MAX_OFFERING_DURATION_MINUTES: u32 = 24 * 60;

pub struct ServiceOfferingServiceImpl<ServiceOfferingDao, UuidService>
where
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    pub service_offering_dao: Arc<ServiceOfferingDao>,
    pub uuid_service: Arc<UuidService>,
}
impl<ServiceOfferingDao, UuidService> ServiceOfferingServiceImpl<ServiceOfferingDao, UuidService>
where
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    pub fn new(
        service_offering_dao: Arc<ServiceOfferingDao>,
        uuid_service: Arc<UuidService>,
    ) -> Self {
        Self {
            service_offering_dao,
            uuid_service,
        }
    }
}

fn validate_offering(offering: &ServiceOffering) -> Result<(), ServiceError> {
    let mut validation = Vec::with_capacity(2);
    if offering.name.is_empty() {
        validation.push(ValidationFailureItem::InvalidValue("name".into()));
    }
    if offering.duration_minutes == 0 || offering.duration_minutes > MAX_OFFERING_DURATION_MINUTES
    {
        validation.push(ValidationFailureItem::InvalidValue(
            "duration_minutes".into(),
        ));
    }
    if !validation.is_empty() {
        return Err(ServiceError::ValidationError(validation.into()));
    }
    Ok(())
}

#[async_trait]
impl<ServiceOfferingDao, UuidService> ServiceOfferingService
    for ServiceOfferingServiceImpl<ServiceOfferingDao, UuidService>
where
    ServiceOfferingDao: dao::service_offering::ServiceOfferingDao + Send + Sync,
    UuidService: service::uuid_service::UuidService + Send + Sync,
{
    async fn get_all(&self) -> Result<Arc<[ServiceOffering]>, ServiceError> {
        Ok(self
            .service_offering_dao
            .all()
            .await?
            .iter()
            .map(ServiceOffering::from)
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<ServiceOffering>, ServiceError> {
        Ok(self
            .service_offering_dao
            .find_by_id(id)
            .await?
            .as_ref()
            .map(ServiceOffering::from))
    }

    async fn create(&self, offering: &ServiceOffering) -> Result<ServiceOffering, ServiceError> {
        if offering.id != Uuid::nil() {
            return Err(ServiceError::IdSetOnCreate);
        }
        validate_offering(offering)?;

        let offering = ServiceOffering {
            id: self.uuid_service.new_uuid("service-offering-id"),
            ..offering.clone()
        };
        self.service_offering_dao
            .create(&(&offering).into(), SERVICE_OFFERING_PROCESS)
            .await?;
        Ok(offering)
    }

    async fn update(&self, offering: &ServiceOffering) -> Result<(), ServiceError> {
        self.service_offering_dao
            .find_by_id(offering.id)
            .await?
            .ok_or(ServiceError::EntityNotFound(offering.id))?;
        validate_offering(offering)?;
        self.service_offering_dao
            .update(&(offering).into(), SERVICE_OFFERING_PROCESS)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        self.service_offering_dao
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::EntityNotFound(id))?;
        self.service_offering_dao
            .delete(id, SERVICE_OFFERING_PROCESS)
            .await?;
        Ok(())
    }
}
