//! # Cinema Tickets Testing
//!
//! Testing utilities and helpers for cinema ticket purchases.
//!
//! This crate provides:
//! - A Given-When-Then harness running purchases against mock collaborators
//! - Fixtures for building request lines
//! - Property-based testing strategies for valid and invalid orders
//! - A tracing subscriber for test output
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::InvalidPurchase;
//! use cinema_tickets_testing::PurchaseTest;
//! use cinema_tickets_testing::fixtures::{child, infant};
//!
//! PurchaseTest::new()
//!     .when_purchasing(100, vec![child(1), infant(1)])
//!     .then_rejected(InvalidPurchase::DependentWithoutAdult)
//!     .run();
//! ```


pub use purchase_test::{PurchaseOutcome, PurchaseTest, assertions};

/// Builders for request lines and reference totals.
pub mod fixtures {
    use cinema_tickets_core::{TicketType, TicketTypeRequest};

    /// `n` adult tickets.
    #[must_use]
    pub const fn adult(n: i32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Adult, n)
    }

    /// `n` child tickets.
    #[must_use]
    pub const fn child(n: i32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Child, n)
    }

    /// `n` infant tickets.
    #[must_use]
    pub const fn infant(n: i32) -> TicketTypeRequest {
        TicketTypeRequest::new(TicketType::Infant, n)
    }

    /// Payment for `requests` at standard prices, computed independently of
    /// the pricing module.
    #[must_use]
    pub fn expected_payment(requests: &[TicketTypeRequest]) -> u64 {
        requests
            .iter()
            .map(|request| {
                let unit = match request.ticket_type {
                    Some(TicketType::Adult) => 20,
                    Some(TicketType::Child) => 10,
                    Some(TicketType::Infant) | None => 0,
                };
                unit * u64::from(request.quantity())
            })
            .sum()
    }

    /// Seats for `requests`, computed independently of the seating module.
    #[must_use]
    pub fn expected_seats(requests: &[TicketTypeRequest]) -> u64 {
        requests
            .iter()
            .filter(|request| {
                matches!(
                    request.ticket_type,
                    Some(TicketType::Adult | TicketType::Child)
                )
            })
            .map(|request| u64::from(request.quantity()))
            .sum()
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use cinema_tickets_core::config::DEFAULT_MAX_TICKETS_PER_REQUEST;
    use cinema_tickets_core::{TicketType, TicketTypeRequest};
    use proptest::prelude::*;
    use proptest::sample::Index;

    /// Any ticket type.
    pub fn ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![
            Just(TicketType::Infant),
            Just(TicketType::Child),
            Just(TicketType::Adult),
        ]
    }

    /// Child or infant.
    pub fn dependent_ticket_type() -> impl Strategy<Value = TicketType> {
        prop_oneof![Just(TicketType::Infant), Just(TicketType::Child)]
    }

    /// A quantity a single line may ask for.
    pub fn valid_quantity() -> impl Strategy<Value = i32> {
        1..=DEFAULT_MAX_TICKETS_PER_REQUEST
    }

    /// A quantity no line may ask for.
    pub fn invalid_quantity() -> impl Strategy<Value = i32> {
        prop_oneof![i32::MIN..=0, (DEFAULT_MAX_TICKETS_PER_REQUEST + 1)..=i32::MAX]
    }

    /// A positive account id.
    pub fn valid_account_id() -> impl Strategy<Value = i64> {
        1..=i64::MAX
    }

    /// A zero or negative account id.
    pub fn invalid_account_id() -> impl Strategy<Value = i64> {
        i64::MIN..=0
    }

    /// A well-formed request line of any type.
    pub fn request_line() -> impl Strategy<Value = TicketTypeRequest> {
        (ticket_type(), valid_quantity())
            .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
    }

    /// An order that passes every rule: an adult line first, then any
    /// well-formed lines.
    pub fn valid_order() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        (
            valid_quantity(),
            prop::collection::vec(request_line(), 0..8),
        )
            .prop_map(|(adults, rest)| {
                let mut order = vec![TicketTypeRequest::new(TicketType::Adult, adults)];
                order.extend(rest);
                order
            })
    }

    /// An otherwise valid order whose first line is a child or infant line.
    pub fn dependent_first_order() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        (dependent_ticket_type(), valid_quantity(), valid_order()).prop_map(
            |(ticket_type, quantity, rest)| {
                let mut order = vec![TicketTypeRequest::new(ticket_type, quantity)];
                order.extend(rest);
                order
            },
        )
    }

    /// A non-empty order with only child and infant lines.
    pub fn dependents_only_order() -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(
            (dependent_ticket_type(), valid_quantity())
                .prop_map(|(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity)),
            1..8,
        )
    }

    /// A valid order with one line's quantity replaced by an invalid one.
    ///
    /// Yields the order and the invalid quantity.
    pub fn order_with_invalid_quantity() -> impl Strategy<Value = (Vec<TicketTypeRequest>, i32)> {
        (valid_order(), any::<Index>(), invalid_quantity()).prop_map(
            |(mut order, index, quantity)| {
                let line = index.index(order.len());
                order[line].no_of_tickets = quantity;
                (order, quantity)
            },
        )
    }
}

/// Install a tracing subscriber that writes through the test harness.
///
/// Honours `RUST_LOG`, defaulting to `warn`. Safe to call from every test.
pub fn init_test_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
