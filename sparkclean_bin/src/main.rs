#[cfg(test)]
mod integration_test;

mod demo_data;

use std::sync::Arc;

use service::availability::AvailabilityService as _;
use service::booking::{Booking, BookingService as _, BookingStatus};
use service::clock::ClockService as _;
use uuid::Uuid;
#[cfg(feature = "json_logging")]
use tracing_subscriber::fmt::format::FmtSpan;

type ServiceOfferingDao = dao_impl_inmemory::ServiceOfferingDaoImpl;
type StaffDao = dao_impl_inmemory::StaffDaoImpl;
type BookingDao = dao_impl_inmemory::BookingDaoImpl;

type ClockService = service_impl::clock::ClockServiceImpl;
type UuidService = service_impl::uuid_service::UuidServiceImpl;
type ServiceOfferingService =
    service_impl::service_offering::ServiceOfferingServiceImpl<ServiceOfferingDao, UuidService>;
type StaffService = service_impl::staff::StaffServiceImpl<StaffDao, UuidService>;
type AvailabilityService =
    service_impl::availability::AvailabilityServiceImpl<ServiceOfferingDao, StaffDao, BookingDao>;
type BookingService = service_impl::booking::BookingServiceImpl<
    BookingDao,
    ServiceOfferingDao,
    StaffDao,
    ClockService,
    UuidService,
>;

pub struct AppState {
    pub clock_service: Arc<ClockService>,
    pub service_offering_service: Arc<ServiceOfferingService>,
    pub staff_service: Arc<StaffService>,
    pub availability_service: Arc<AvailabilityService>,
    pub booking_service: Arc<BookingService>,
}
impl AppState {
    pub fn new() -> Self {
        let service_offering_dao = Arc::new(ServiceOfferingDao::new());
        let staff_dao = Arc::new(StaffDao::new());
        let booking_dao = Arc::new(BookingDao::new());
        let clock_service = Arc::new(service_impl::clock::ClockServiceImpl);
        let uuid_service = Arc::new(service_impl::uuid_service::UuidServiceImpl);

        let service_offering_service = Arc::new(ServiceOfferingService::new(
            service_offering_dao.clone(),
            uuid_service.clone(),
        ));
        let staff_service = Arc::new(StaffService::new(staff_dao.clone(), uuid_service.clone()));
        let availability_service = Arc::new(AvailabilityService::new(
            service_offering_dao.clone(),
            staff_dao.clone(),
            booking_dao.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(
            booking_dao,
            service_offering_dao,
            staff_dao,
            clock_service.clone(),
            uuid_service,
        ));

        Self {
            clock_service,
            service_offering_service,
            staff_service,
            availability_service,
            booking_service,
        }
    }
}
impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[tokio::main]
async fn main() {
    let version = env!("CARGO_PKG_VERSION");

    #[cfg(feature = "local_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .pretty()
        .with_file(true)
        .finish();

    #[cfg(feature = "json_logging")]
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_span_list(true)
        .with_file(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    tracing::info!("Sparkclean backend version: {}", version);
    dotenvy::dotenv().ok();

    let state = AppState::new();
    let demo = demo_data::seed(&state)
        .await
        .expect("Expected demo data to seed");
    tracing::info!(
        offerings = demo.offerings.len(),
        staff = demo.staff.len(),
        bookings = demo.bookings.len(),
        "demo data seeded"
    );

    let date = state
        .clock_service
        .date_now()
        .next_day()
        .expect("Expected a next calendar day");
    for offering in &demo.offerings {
        let slots = state
            .availability_service
            .get_available_slots(offering.id, date)
            .await
            .expect("Expected an availability answer");
        tracing::info!(
            offering = offering.name.as_ref(),
            %date,
            slots = slots.len(),
            "availability"
        );
    }

    let offering = &demo.offerings[0];
    let slots = state
        .availability_service
        .get_available_slots(offering.id, date)
        .await
        .expect("Expected an availability answer");
    if let Some(slot) = slots.first() {
        let booking = state
            .booking_service
            .create(&Booking {
                id: Uuid::nil(),
                service_id: offering.id,
                staff_id: slot.staff_id,
                customer_name: "Olivia Bennett".into(),
                customer_email: "olivia.b@email.com".into(),
                customer_phone: "(555) 456-7890".into(),
                date,
                time: slot.time,
                status: BookingStatus::Pending,
                total_price_cents: offering.price_cents,
                notes: "".into(),
                address: "789 Pine Court".into(),
                created: None,
            })
            .await
            .expect("Expected the sample booking to commit");
        tracing::info!(
            booking = %booking.id,
            staff = slot.staff_name.as_ref(),
            time = %slot.time,
            "sample booking committed"
        );
    } else {
        tracing::info!(%date, "no open slots for a sample booking");
    }
}
