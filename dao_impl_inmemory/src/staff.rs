use std::sync::Arc;

use async_trait::async_trait;
use dao::staff::{StaffDao, StaffEntity};
use dao::DaoError;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub struct StaffDaoImpl {
    rows: RwLock<Vec<StaffEntity>>,
}
impl StaffDaoImpl {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}
impl Default for StaffDaoImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StaffDao for StaffDaoImpl {
    async fn all(&self) -> Result<Arc<[StaffEntity]>, DaoError> {
        Ok(self.rows.read().await.iter().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StaffEntity>, DaoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn create(&self, entity: &StaffEntity, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == entity.id) {
            return Err(DaoError::DatabaseQueryError(
                format!("staff {} already exists", entity.id).into(),
            ));
        }
        debug!(process, id = %entity.id, "create staff");
        rows.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &StaffEntity, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == entity.id)
            .ok_or_else(|| {
                DaoError::DatabaseQueryError(
                    format!("staff {} does not exist", entity.id).into(),
                )
            })?;
        debug!(process, id = %entity.id, "update staff");
        *row = entity.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        let index = rows.iter().position(|row| row.id == id).ok_or_else(|| {
            DaoError::DatabaseQueryError(format!("staff {id} does not exist").into())
        })?;
        debug!(process, id = %id, "delete staff");
        rows.remove(index);
        Ok(())
    }
}
