pub mod booking;
pub mod service_offering;
pub mod staff;

pub use booking::BookingDaoImpl;
pub use service_offering::ServiceOfferingDaoImpl;
pub use staff::StaffDaoImpl;
