//! Purchase scenarios written with the Given-When-Then harness.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use cinema_tickets_core::{
    InvalidPurchase, Money, PaymentError, SeatCount, SeatReservationError, TicketServiceConfig,
    TicketServiceError, TicketType,
};
use cinema_tickets_testing::fixtures::{adult, child, infant};
use cinema_tickets_testing::{PurchaseTest, assertions, init_test_tracing};

#[test]
fn test_family_purchase() {
    init_test_tracing();

    PurchaseTest::new()
        .when_purchasing(100, vec![adult(2), child(1), child(2), infant(1)])
        .then_charged(70)
        .then_reserved(5)
        .run();
}

#[test]
fn test_adult_with_child() {
    PurchaseTest::new()
        .when_purchasing(100, vec![adult(2), child(1)])
        .then_charged(50)
        .then_reserved(3)
        .run();
}

#[test]
fn test_adults_and_infants_share_seats() {
    PurchaseTest::new()
        .when_purchasing(8, vec![adult(1), infant(1), adult(1), infant(1)])
        .then_charged(40)
        .then_reserved(2)
        .run();
}

#[test]
fn test_too_many_tickets_on_one_line() {
    PurchaseTest::new()
        .when_purchasing(1, vec![adult(21)])
        .then_rejected(InvalidPurchase::MaximumQuantityExceeded(21))
        .run();
}

#[test]
fn test_no_adult_ticket() {
    PurchaseTest::new()
        .when_purchasing(100, vec![child(1), infant(1)])
        .then(|outcome| {
            assert!(outcome.result.as_ref().unwrap_err().is_invalid_purchase());
            assertions::assert_no_calls(&outcome.calls);
        })
        .run();
}

#[test]
fn test_infant_listed_before_adult() {
    PurchaseTest::new()
        .when_purchasing(100, vec![infant(1), adult(1)])
        .then_rejected(InvalidPurchase::DependentWithoutAdult)
        .run();
}

#[test]
fn test_absent_inputs() {
    PurchaseTest::new()
        .when_purchasing_raw(None, Some(vec![adult(1)]))
        .then_rejected(InvalidPurchase::AccountIdRequired)
        .run();

    PurchaseTest::new()
        .when_purchasing_raw(Some(100), None)
        .then_rejected(InvalidPurchase::InvalidTicketTypeRequest)
        .run();

    PurchaseTest::new()
        .when_purchasing(100, vec![])
        .then_rejected(InvalidPurchase::InvalidTicketTypeRequest)
        .run();
}

#[test]
fn test_custom_rules() {
    let config = TicketServiceConfig::new()
        .with_max_tickets_per_request(30)
        .with_price(TicketType::Adult, Money::from_units(25));

    PurchaseTest::new()
        .given_config(config)
        .when_purchasing(5, vec![adult(25), child(2)])
        .then_charged(645)
        .then_reserved(27)
        .run();
}

#[test]
fn test_declined_payment_stops_purchase() {
    PurchaseTest::new()
        .given_failing_payment(PaymentError::Declined)
        .when_purchasing(100, vec![adult(1)])
        .then_failed(TicketServiceError::Payment(PaymentError::Declined))
        .then(|outcome| assertions::assert_calls_count(&outcome.calls, 1))
        .run();
}

#[test]
fn test_failed_reservation_is_passed_through() {
    let failure = SeatReservationError::NotEnoughSeats {
        requested: SeatCount::new(3),
    };

    PurchaseTest::new()
        .given_failing_seat_reservation(failure.clone())
        .when_purchasing(100, vec![adult(2), child(1)])
        .then_failed(TicketServiceError::SeatReservation(failure))
        .then(|outcome| assertions::assert_calls_count(&outcome.calls, 2))
        .run();
}
