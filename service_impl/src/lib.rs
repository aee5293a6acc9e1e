pub mod availability;
pub mod booking;
pub mod clock;
pub mod service_offering;
pub mod staff;
pub mod uuid_service;
