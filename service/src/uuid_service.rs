use mockall::automock;
use uuid::Uuid;

/// Identifier generation behind a trait. The `usage` tag names what the id
/// is for ("booking-id", "staff-id") so tests can pin the call site.
#[automock]
pub trait UuidService {
    fn new_uuid(&self, usage: &str) -> Uuid;
}
