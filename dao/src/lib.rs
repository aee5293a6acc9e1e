use thiserror::Error;

pub mod booking;
pub mod service_offering;
pub mod staff;

#[derive(Error, Debug)]
pub enum DaoError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] Box<dyn std::error::Error + Send + Sync>),
}
