use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub mod availability;
pub mod booking;
pub mod clock;
pub mod service_offering;
pub mod staff;
pub mod uuid_service;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailureItem {
    InvalidValue(Arc<str>),
    ModificationNotAllowed(Arc<str>),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] dao::DaoError),

    #[error("Entity {0} not found")]
    EntityNotFound(Uuid),

    #[error("Id must not be set on create")]
    IdSetOnCreate,

    #[error("Time {0} must be before {1}")]
    TimeOrderWrong(time::Time, time::Time),

    #[error("Slot {2} on {1} is no longer available for staff {0}")]
    SlotNoLongerAvailable(Uuid, time::Date, time::Time),

    #[error("Validation failed: {0:?}")]
    ValidationError(Arc<[ValidationFailureItem]>),

    #[error("Internal error")]
    InternalError,
}
