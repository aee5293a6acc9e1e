use std::sync::Arc;

use async_trait::async_trait;
use dao::service_offering::{ServiceOfferingDao, ServiceOfferingEntity};
use dao::DaoError;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub struct ServiceOfferingDaoImpl {
    rows: RwLock<Vec<ServiceOfferingEntity>>,
}
impl ServiceOfferingDaoImpl {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}
impl Default for ServiceOfferingDaoImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceOfferingDao for ServiceOfferingDaoImpl {
    async fn all(&self) -> Result<Arc<[ServiceOfferingEntity]>, DaoError> {
        Ok(self.rows.read().await.iter().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceOfferingEntity>, DaoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create(&self, entity: &ServiceOfferingEntity, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == entity.id) {
            return Err(DaoError::DatabaseQueryError(
                format!("service offering {} already exists", entity.id).into(),
            ));
        }
        debug!(process, id = %entity.id, "create service offering");
        rows.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &ServiceOfferingEntity, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == entity.id)
            .ok_or_else(|| {
                DaoError::DatabaseQueryError(
                    format!("service offering {} does not exist", entity.id).into(),
                )
            })?;
        debug!(process, id = %entity.id, "update service offering");
        *row = entity.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        let index = rows.iter().position(|row| row.id == id).ok_or_else(|| {
            DaoError::DatabaseQueryError(format!("service offering {id} does not exist").into())
        })?;
        debug!(process, id = %id, "delete service offering");
        rows.remove(index);
        Ok(())
    }
}
