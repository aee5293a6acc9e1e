use uuid::Uuid;

/// Random v4 identifiers; collision-resistant even for bookings created in
/// the same instant.
pub struct UuidServiceImpl;

impl service::uuid_service::UuidService for UuidServiceImpl {
    fn new_uuid(&self, _usage: &str) -> Uuid {
        Uuid::new_v4()
    }
}
