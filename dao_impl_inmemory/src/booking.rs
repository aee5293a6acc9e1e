use std::sync::Arc;

use async_trait::async_trait;
use dao::booking::{BookingDao, BookingEntity};
use dao::DaoError;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Bookings are append-and-update only. There is no delete; cancellation is
/// a status change written through `update`.
pub struct BookingDaoImpl {
    rows: RwLock<Vec<BookingEntity>>,
}
impl BookingDaoImpl {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}
impl Default for BookingDaoImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingDao for BookingDaoImpl {
    async fn all(&self) -> Result<Arc<[BookingEntity]>, DaoError> {
        Ok(self.rows.read().await.iter().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookingEntity>, DaoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .find(|row| row.id == id)
            .cloned())
    }

    async fn find_by_staff_and_date(
        &self,
        staff_id: Uuid,
        date: time::Date,
    ) -> Result<Arc<[BookingEntity]>, DaoError> {
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| row.staff_id == staff_id && row.date == date)
            .cloned()
            .collect())
    }

    async fn create(&self, entity: &BookingEntity, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|row| row.id == entity.id) {
            return Err(DaoError::DatabaseQueryError(
                format!("booking {} already exists", entity.id).into(),
            ));
        }
        debug!(process, id = %entity.id, "create booking");
        rows.push(entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &BookingEntity, process: &str) -> Result<(), DaoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id == entity.id)
            .ok_or_else(|| {
                DaoError::DatabaseQueryError(
                    format!("booking {} does not exist", entity.id).into(),
                )
            })?;
        debug!(process, id = %entity.id, "update booking");
        *row = entity.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dao::booking::BookingStatusEntity;
    use time::macros::{date, datetime, time};
    use uuid::uuid;

    fn booking(id: Uuid, staff_id: Uuid, date: time::Date) -> BookingEntity {
        BookingEntity {
            id,
            service_id: uuid!("0E0B1090-9A9C-4E2F-BF2E-1B6E2C1A0001"),
            staff_id,
            customer_name: "Emma Wilson".into(),
            customer_email: "emma.w@email.com".into(),
            customer_phone: "(555) 234-5678".into(),
            date,
            time: time!(10:00),
            status: BookingStatusEntity::Confirmed,
            total_price_cents: 12900,
            notes: "".into(),
            address: "123 Maple Street".into(),
            created: datetime!(2024-06-20 10:00:00),
        }
    }

    #[tokio::test]
    async fn test_find_by_staff_and_date_filters_both() {
        let staff_a = uuid!("6A7C0A52-2F6E-4D63-9E45-3C2B7D9F0001");
        let staff_b = uuid!("6A7C0A52-2F6E-4D63-9E45-3C2B7D9F0002");
        let dao = BookingDaoImpl::new();
        dao.create(
            &booking(
                uuid!("C4B7B7E3-5B46-4B9E-8E2C-9C1F3A2D0001"),
                staff_a,
                date!(2024 - 07 - 01),
            ),
            "test",
        )
        .await
        .unwrap();
        dao.create(
            &booking(
                uuid!("C4B7B7E3-5B46-4B9E-8E2C-9C1F3A2D0002"),
                staff_a,
                date!(2024 - 07 - 02),
            ),
            "test",
        )
        .await
        .unwrap();
        dao.create(
            &booking(
                uuid!("C4B7B7E3-5B46-4B9E-8E2C-9C1F3A2D0003"),
                staff_b,
                date!(2024 - 07 - 01),
            ),
            "test",
        )
        .await
        .unwrap();

        let result = dao
            .find_by_staff_and_date(staff_a, date!(2024 - 07 - 01))
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, uuid!("C4B7B7E3-5B46-4B9E-8E2C-9C1F3A2D0001"));
    }

    #[tokio::test]
    async fn test_update_replaces_row() {
        let id = uuid!("C4B7B7E3-5B46-4B9E-8E2C-9C1F3A2D0001");
        let staff_id = uuid!("6A7C0A52-2F6E-4D63-9E45-3C2B7D9F0001");
        let dao = BookingDaoImpl::new();
        dao.create(&booking(id, staff_id, date!(2024 - 07 - 01)), "test")
            .await
            .unwrap();

        let cancelled = BookingEntity {
            status: BookingStatusEntity::Cancelled,
            ..booking(id, staff_id, date!(2024 - 07 - 01))
        };
        dao.update(&cancelled, "test").await.unwrap();
        assert_eq!(dao.find_by_id(id).await.unwrap(), Some(cancelled));
        assert_eq!(dao.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_fails() {
        let dao = BookingDaoImpl::new();
        let result = dao
            .update(
                &booking(
                    uuid!("C4B7B7E3-5B46-4B9E-8E2C-9C1F3A2D0001"),
                    uuid!("6A7C0A52-2F6E-4D63-9E45-3C2B7D9F0001"),
                    date!(2024 - 07 - 01),
                ),
                "test",
            )
            .await;
        assert!(result.is_err());
    }
}
