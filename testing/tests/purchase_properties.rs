//! Property tests for the purchase flow.

#![allow(clippy::unwrap_used)] // Tests can unwrap

use cinema_tickets_core::mocks::{CallLog, MockPaymentService, MockSeatReservationService};
use cinema_tickets_core::{
    InvalidPurchase, TicketService, TicketServiceError, TicketServiceImpl, TicketTypeRequest,
};
use cinema_tickets_testing::fixtures::{expected_payment, expected_seats};
use cinema_tickets_testing::properties::{
    dependent_first_order, dependents_only_order, invalid_account_id, order_with_invalid_quantity,
    valid_account_id, valid_order,
};
use cinema_tickets_testing::{PurchaseTest, assertions};
use proptest::prelude::*;

fn purchase(
    account_id: Option<i64>,
    requests: &[TicketTypeRequest],
) -> (Result<(), TicketServiceError>, CallLog) {
    let log = CallLog::new();
    let service = TicketServiceImpl::new(
        MockPaymentService::with_log(log.clone()),
        MockSeatReservationService::with_log(log.clone()),
    );
    let result = service.purchase_tickets(account_id, Some(requests));
    (result, log)
}

proptest! {
    #[test]
    fn valid_orders_charge_and_reserve_once(account_id in valid_account_id(), order in valid_order()) {
        let payment = expected_payment(&order);
        let seats = expected_seats(&order);

        PurchaseTest::new()
            .when_purchasing(account_id, order)
            .then_charged(payment)
            .then_reserved(seats)
            .run();
    }

    #[test]
    fn invalid_account_ids_never_reach_collaborators(
        account_id in invalid_account_id(),
        order in valid_order(),
    ) {
        let (result, log) = purchase(Some(account_id), &order);

        prop_assert_eq!(
            result,
            Err(TicketServiceError::InvalidPurchase(InvalidPurchase::InvalidAccountId(account_id)))
        );
        prop_assert!(log.is_empty());
    }

    #[test]
    fn invalid_quantities_never_reach_collaborators(
        account_id in valid_account_id(),
        (order, quantity) in order_with_invalid_quantity(),
    ) {
        let (result, log) = purchase(Some(account_id), &order);

        let expected = if quantity < 1 {
            InvalidPurchase::InvalidQuantity(quantity)
        } else {
            InvalidPurchase::MaximumQuantityExceeded(quantity)
        };
        prop_assert_eq!(result, Err(TicketServiceError::InvalidPurchase(expected)));
        assertions::assert_no_calls(&log.calls());
    }

    #[test]
    fn dependent_before_adult_is_rejected(
        account_id in valid_account_id(),
        order in dependent_first_order(),
    ) {
        let (result, log) = purchase(Some(account_id), &order);

        prop_assert_eq!(
            result,
            Err(TicketServiceError::InvalidPurchase(InvalidPurchase::DependentWithoutAdult))
        );
        prop_assert!(log.is_empty());
    }

    #[test]
    fn orders_without_adults_are_rejected(
        account_id in valid_account_id(),
        order in dependents_only_order(),
    ) {
        let (result, log) = purchase(Some(account_id), &order);

        prop_assert!(result.unwrap_err().is_invalid_purchase());
        prop_assert!(log.is_empty());
    }

    #[test]
    fn quotes_are_deterministic(account_id in valid_account_id(), order in valid_order()) {
        let service = TicketServiceImpl::new(
            MockPaymentService::new(),
            MockSeatReservationService::new(),
        );

        let first = service.quote(Some(account_id), Some(order.as_slice())).unwrap();
        let second = service.quote(Some(account_id), Some(order.as_slice())).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first.total_payment.units(), expected_payment(&order));
        prop_assert_eq!(first.total_seats.get(), expected_seats(&order));
    }
}
