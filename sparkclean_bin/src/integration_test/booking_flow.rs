use service::availability::AvailabilityService as _;
use service::booking::{Booking, BookingPatch, BookingService as _, BookingStatus};
use service::service_offering::ServiceOffering;
use service::staff::Staff;
use service::ServiceError;
use time::macros::{date, time};
use uuid::Uuid;

use super::seeded_state;

fn booking_request(
    offering: &ServiceOffering,
    staff: &Staff,
    date: time::Date,
    time: time::Time,
) -> Booking {
    Booking {
        id: Uuid::nil(),
        service_id: offering.id,
        staff_id: staff.id,
        customer_name: "Emma Wilson".into(),
        customer_email: "emma.w@email.com".into(),
        customer_phone: "(555) 234-5678".into(),
        date,
        time,
        status: BookingStatus::Pending,
        total_price_cents: offering.price_cents,
        notes: "".into(),
        address: "123 Maple Street".into(),
        created: None,
    }
}

// 2024-07-01 is a Monday, 2024-07-06 a Saturday, 2024-07-07 a Sunday.

#[tokio::test]
async fn test_weekday_availability_covers_both_staff() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];

    let slots = state
        .availability_service
        .get_available_slots(standard.id, date!(2024 - 07 - 01))
        .await
        .unwrap();

    // 09:00-17:00 at 30 minute granularity is 16 starts per staff member.
    assert_eq!(slots.len(), 32);
    assert_eq!(slots[0].time, time!(09:00));
    assert_eq!(slots[1].time, time!(09:00));
    assert_ne!(slots[0].staff_id, slots[1].staff_id);
    assert!(slots.windows(2).all(|pair| pair[0].time <= pair[1].time));
    assert!(slots.iter().all(|slot| slot.time < time!(17:00)));
}

#[tokio::test]
async fn test_saturday_uses_the_shorter_window() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];

    let slots = state
        .availability_service
        .get_available_slots(standard.id, date!(2024 - 07 - 06))
        .await
        .unwrap();

    assert_eq!(slots.len(), 20);
    assert_eq!(slots[0].time, time!(10:00));
    assert_eq!(slots[19].time, time!(14:30));
}

#[tokio::test]
async fn test_sunday_has_no_availability() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];

    let slots = state
        .availability_service
        .get_available_slots(standard.id, date!(2024 - 07 - 07))
        .await
        .unwrap();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_specialty_offering_is_limited_to_capable_staff() {
    let (state, demo) = seeded_state().await;
    let move_cleaning = &demo.offerings[2];
    let sarah = &demo.staff[0];

    let slots = state
        .availability_service
        .get_available_slots(move_cleaning.id, date!(2024 - 07 - 01))
        .await
        .unwrap();

    assert_eq!(slots.len(), 16);
    assert!(slots.iter().all(|slot| slot.staff_id == sarah.id));
}

#[tokio::test]
async fn test_unknown_offering_answers_with_no_slots() {
    let (state, _demo) = seeded_state().await;
    let slots = state
        .availability_service
        .get_available_slots(Uuid::new_v4(), date!(2024 - 07 - 01))
        .await
        .unwrap();
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_booking_blocks_slots_and_cancelling_restores_them() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];
    let sarah = &demo.staff[0];

    let booking = state
        .booking_service
        .create(&booking_request(
            standard,
            sarah,
            date!(2024 - 07 - 01),
            time!(10:00),
        ))
        .await
        .unwrap();
    assert_ne!(booking.id, Uuid::nil());
    assert!(booking.created.is_some());

    // The 120 minute booking occupies 10:00-12:00, removing six of Sarah's
    // sixteen starts; Michael keeps all of his.
    let slots = state
        .availability_service
        .get_available_slots(standard.id, date!(2024 - 07 - 01))
        .await
        .unwrap();
    assert_eq!(slots.len(), 26);
    assert!(!slots
        .iter()
        .any(|slot| slot.staff_id == sarah.id && slot.time == time!(10:00)));
    assert!(slots
        .iter()
        .any(|slot| slot.staff_id == sarah.id && slot.time == time!(12:00)));
    assert!(slots
        .iter()
        .any(|slot| slot.staff_id != sarah.id && slot.time == time!(10:00)));

    state.booking_service.cancel(booking.id).await.unwrap();
    let slots = state
        .availability_service
        .get_available_slots(standard.id, date!(2024 - 07 - 01))
        .await
        .unwrap();
    assert_eq!(slots.len(), 32);
}

#[tokio::test]
async fn test_double_booking_the_same_slot_is_rejected() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];
    let sarah = &demo.staff[0];
    let michael = &demo.staff[1];

    state
        .booking_service
        .create(&booking_request(
            standard,
            sarah,
            date!(2024 - 07 - 01),
            time!(10:00),
        ))
        .await
        .unwrap();

    let result = state
        .booking_service
        .create(&booking_request(
            standard,
            sarah,
            date!(2024 - 07 - 01),
            time!(10:00),
        ))
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::SlotNoLongerAvailable(staff_id, _, _)) if staff_id == sarah.id
    ));

    // The same slot with the other staff member is still free.
    state
        .booking_service
        .create(&booking_request(
            standard,
            michael,
            date!(2024 - 07 - 01),
            time!(10:00),
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_back_to_back_bookings_are_accepted() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];
    let sarah = &demo.staff[0];

    state
        .booking_service
        .create(&booking_request(
            standard,
            sarah,
            date!(2024 - 07 - 01),
            time!(10:00),
        ))
        .await
        .unwrap();
    // Ends at 12:00; the next one may start exactly there.
    state
        .booking_service
        .create(&booking_request(
            standard,
            sarah,
            date!(2024 - 07 - 01),
            time!(12:00),
        ))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_booking_lifecycle() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];
    let sarah = &demo.staff[0];

    let booking = state
        .booking_service
        .create(&booking_request(
            standard,
            sarah,
            date!(2024 - 07 - 01),
            time!(10:00),
        ))
        .await
        .unwrap();

    state
        .booking_service
        .update(
            booking.id,
            &BookingPatch {
                status: Some(BookingStatus::Confirmed),
                ..BookingPatch::default()
            },
        )
        .await
        .unwrap();
    state
        .booking_service
        .update(
            booking.id,
            &BookingPatch {
                status: Some(BookingStatus::Completed),
                ..BookingPatch::default()
            },
        )
        .await
        .unwrap();

    // Completed is terminal for updates.
    let result = state
        .booking_service
        .update(
            booking.id,
            &BookingPatch {
                status: Some(BookingStatus::Confirmed),
                ..BookingPatch::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ServiceError::ValidationError(_))));

    let stored = state
        .booking_service
        .get(booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Completed);
}

#[tokio::test]
async fn test_cancel_is_idempotent_and_keeps_the_record() {
    let (state, demo) = seeded_state().await;
    let standard = &demo.offerings[0];
    let sarah = &demo.staff[0];

    let booking = state
        .booking_service
        .create(&booking_request(
            standard,
            sarah,
            date!(2024 - 07 - 01),
            time!(10:00),
        ))
        .await
        .unwrap();
    let count = state.booking_service.get_all().await.unwrap().len();

    state.booking_service.cancel(booking.id).await.unwrap();
    state.booking_service.cancel(booking.id).await.unwrap();

    let stored = state
        .booking_service
        .get(booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);
    assert_eq!(state.booking_service.get_all().await.unwrap().len(), count);
}

#[tokio::test]
async fn test_seed_includes_upcoming_bookings() {
    let (state, demo) = seeded_state().await;

    assert_eq!(demo.bookings.len(), 2);
    for seeded in &demo.bookings {
        let stored = state
            .booking_service
            .get(seeded.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.staff_id, seeded.staff_id);
        assert_eq!(stored.status, seeded.status);
        assert!(stored.created.is_some());
    }

    // A seeded booking occupies its slot like any other.
    let occupied = &demo.bookings[0];
    let slots = state
        .availability_service
        .get_available_slots(occupied.service_id, occupied.date)
        .await
        .unwrap();
    assert!(!slots
        .iter()
        .any(|slot| slot.staff_id == occupied.staff_id && slot.time == occupied.time));
}
