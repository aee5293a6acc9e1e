use std::collections::HashMap;
use std::sync::Arc;

use service::booking::{Booking, BookingService as _, BookingStatus};
use service::clock::ClockService as _;
use service::service_offering::{ServiceOffering, ServiceOfferingService as _};
use service::staff::{DayAvailability, Staff, StaffService as _, TimeWindow};
use service::ServiceError;
use sparkclean_utils::DayOfWeek;
use time::macros::time;
use time::Duration;
use uuid::Uuid;

use crate::AppState;

pub struct DemoData {
    pub offerings: Vec<ServiceOffering>,
    pub staff: Vec<Staff>,
    pub bookings: Vec<Booking>,
}

fn offering(
    name: &str,
    description: &str,
    duration_minutes: u32,
    price_cents: u32,
    category: &str,
    icon: &str,
) -> ServiceOffering {
    ServiceOffering {
        id: Uuid::nil(),
        name: name.into(),
        description: description.into(),
        duration_minutes,
        price_cents,
        category: category.into(),
        icon: icon.into(),
    }
}

fn day(start: time::Time, end: time::Time) -> DayAvailability {
    DayAvailability {
        available: true,
        windows: Arc::new([TimeWindow { start, end }]),
    }
}

/// Monday through Friday 09:00-17:00, Saturday 10:00-15:00, Sunday off.
fn default_week() -> HashMap<DayOfWeek, DayAvailability> {
    let mut week = HashMap::new();
    for weekday in [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ] {
        week.insert(weekday, day(time!(09:00), time!(17:00)));
    }
    week.insert(DayOfWeek::Saturday, day(time!(10:00), time!(15:00)));
    week.insert(
        DayOfWeek::Sunday,
        DayAvailability {
            available: false,
            windows: Arc::new([]),
        },
    );
    week
}

pub async fn seed(state: &AppState) -> Result<DemoData, ServiceError> {
    let standard = state
        .service_offering_service
        .create(&offering(
            "Standard Cleaning",
            "A thorough cleaning of all rooms, including dusting, vacuuming and mopping",
            120,
            12900,
            "Regular",
            "home",
        ))
        .await?;
    let deep = state
        .service_offering_service
        .create(&offering(
            "Deep Cleaning",
            "Intensive cleaning that covers baseboards, appliances and hard-to-reach areas",
            240,
            24900,
            "Premium",
            "sparkles",
        ))
        .await?;
    let move_cleaning = state
        .service_offering_service
        .create(&offering(
            "Move-In/Move-Out Cleaning",
            "Complete cleaning of an empty home, ready for handover",
            300,
            34900,
            "Specialty",
            "truck",
        ))
        .await?;

    let sarah = state
        .staff_service
        .create(&Staff {
            id: Uuid::nil(),
            name: "Sarah Johnson".into(),
            email: "sarah@sparkclean.com".into(),
            phone: "(555) 123-4567".into(),
            capable_services: [standard.id, deep.id, move_cleaning.id].into(),
            weekly_availability: default_week(),
        })
        .await?;
    let michael = state
        .staff_service
        .create(&Staff {
            id: Uuid::nil(),
            name: "Michael Chen".into(),
            email: "michael@sparkclean.com".into(),
            phone: "(555) 234-5678".into(),
            capable_services: [standard.id, deep.id].into(),
            weekly_availability: default_week(),
        })
        .await?;

    // Two upcoming bookings, a week out so the sample booking in main for
    // tomorrow never collides with them.
    let week_out = state.clock_service.date_now() + Duration::days(7);
    let confirmed = state
        .booking_service
        .create(&Booking {
            id: Uuid::nil(),
            service_id: standard.id,
            staff_id: sarah.id,
            customer_name: "Emma Wilson".into(),
            customer_email: "emma.w@email.com".into(),
            customer_phone: "(555) 234-5678".into(),
            date: week_out,
            time: time!(10:00),
            status: BookingStatus::Confirmed,
            total_price_cents: standard.price_cents,
            notes: "Two cats in the house".into(),
            address: "123 Maple Street".into(),
            created: None,
        })
        .await?;
    let pending = state
        .booking_service
        .create(&Booking {
            id: Uuid::nil(),
            service_id: deep.id,
            staff_id: michael.id,
            customer_name: "James Rodriguez".into(),
            customer_email: "james.r@email.com".into(),
            customer_phone: "(555) 345-6789".into(),
            date: week_out + Duration::days(1),
            time: time!(13:00),
            status: BookingStatus::Pending,
            total_price_cents: deep.price_cents,
            notes: "".into(),
            address: "456 Oak Avenue".into(),
            created: None,
        })
        .await?;

    Ok(DemoData {
        offerings: vec![standard, deep, move_cleaning],
        staff: vec![sarah, michael],
        bookings: vec![confirmed, pending],
    })
}
