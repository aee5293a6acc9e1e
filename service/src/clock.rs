use mockall::automock;

/// Clock access behind a trait so booking creation timestamps are
/// controllable in tests.
#[automock]
pub trait ClockService {
    fn date_now(&self) -> time::Date;
    fn date_time_now(&self) -> time::PrimitiveDateTime;
}
