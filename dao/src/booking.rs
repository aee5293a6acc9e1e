use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::DaoError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingStatusEntity {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingEntity {
    pub id: Uuid,
    pub service_id: Uuid,
    pub staff_id: Uuid,
    pub customer_name: Arc<str>,
    pub customer_email: Arc<str>,
    pub customer_phone: Arc<str>,
    pub date: time::Date,
    pub time: time::Time,
    pub status: BookingStatusEntity,
    pub total_price_cents: u32,
    pub notes: Arc<str>,
    pub address: Arc<str>,
    pub created: PrimitiveDateTime,
}

#[automock]
#[async_trait]
pub trait BookingDao {
    async fn all(&self) -> Result<Arc<[BookingEntity]>, DaoError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BookingEntity>, DaoError>;
    async fn find_by_staff_and_date(
        &self,
        staff_id: Uuid,
        date: time::Date,
    ) -> Result<Arc<[BookingEntity]>, DaoError>;
    async fn create(&self, entity: &BookingEntity, process: &str) -> Result<(), DaoError>;
    async fn update(&self, entity: &BookingEntity, process: &str) -> Result<(), DaoError>;
}
