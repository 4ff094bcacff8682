//! The ticket purchase service.
//!
//! A purchase runs in one pass:
//!
//! ```text
//! validate → price → make_payment → allocate seats → reserve_seat
//! ```
//!
//! Validation failures stop the purchase before either collaborator is
//! called. Collaborator failures are returned as they are; there is no retry
//! and no compensation.

use crate::config::TicketServiceConfig;
use crate::error::{Result, TicketServiceError};
use crate::pricing::total_payment;
use crate::providers::{SeatReservationService, TicketPaymentService};
use crate::seating::total_seats;
use crate::types::{AccountId, Money, PurchaseOrder, SeatCount, TicketTypeRequest};
use crate::validation::validate_purchase;
use serde::Serialize;

/// Purchases cinema tickets.
pub trait TicketService {
    /// Purchase the requested tickets for `account_id`.
    ///
    /// On success the account has been charged once and its seats reserved
    /// once, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`TicketServiceError::InvalidPurchase`] if the request breaks a
    /// purchase rule, in which case no collaborator was called. Errors from
    /// the payment or seat reservation collaborator are passed through.
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        ticket_type_requests: Option<&[TicketTypeRequest]>,
    ) -> Result<()>;
}

/// What a valid purchase costs and how many seats it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PurchaseSummary {
    /// Paying account
    pub account_id: AccountId,
    /// Amount to charge
    pub total_payment: Money,
    /// Seats to reserve
    pub total_seats: SeatCount,
}

/// [`TicketService`] backed by a payment and a seat reservation collaborator.
#[derive(Debug, Clone)]
pub struct TicketServiceImpl<P, S> {
    payment_service: P,
    seat_reservation_service: S,
    config: TicketServiceConfig,
}

impl<P, S> TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    /// Create a service with the standard purchase rules.
    #[must_use]
    pub const fn new(payment_service: P, seat_reservation_service: S) -> Self {
        Self::with_config(
            payment_service,
            seat_reservation_service,
            TicketServiceConfig::new(),
        )
    }

    /// Create a service with custom purchase rules.
    #[must_use]
    pub const fn with_config(
        payment_service: P,
        seat_reservation_service: S,
        config: TicketServiceConfig,
    ) -> Self {
        Self {
            payment_service,
            seat_reservation_service,
            config,
        }
    }

    /// The purchase rules in use.
    #[must_use]
    pub const fn config(&self) -> &TicketServiceConfig {
        &self.config
    }

    /// The payment collaborator.
    #[must_use]
    pub const fn payment_service(&self) -> &P {
        &self.payment_service
    }

    /// The seat reservation collaborator.
    #[must_use]
    pub const fn seat_reservation_service(&self) -> &S {
        &self.seat_reservation_service
    }

    /// Validate a purchase and work out its payment and seats without
    /// calling any collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`TicketServiceError::InvalidPurchase`] if the request breaks a
    /// purchase rule, or [`TicketServiceError::AmountOverflow`] if the total
    /// payment cannot be represented.
    pub fn quote(
        &self,
        account_id: Option<i64>,
        ticket_type_requests: Option<&[TicketTypeRequest]>,
    ) -> Result<PurchaseSummary> {
        let purchase = validate_purchase(account_id, ticket_type_requests, &self.config)?;
        let total_payment = total_payment(&self.config.prices, purchase.requests())
            .ok_or(TicketServiceError::AmountOverflow)?;
        let total_seats = total_seats(purchase.requests());

        Ok(PurchaseSummary {
            account_id: purchase.account_id(),
            total_payment,
            total_seats,
        })
    }

    /// Purchase the tickets described by `order`.
    ///
    /// # Errors
    ///
    /// Same as [`TicketService::purchase_tickets`].
    pub fn purchase_order(&self, order: &PurchaseOrder) -> Result<()> {
        self.purchase_tickets(order.account_id, order.requests())
    }
}

impl<P, S> TicketService for TicketServiceImpl<P, S>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    #[tracing::instrument(skip(self, ticket_type_requests), name = "purchase_tickets")]
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        ticket_type_requests: Option<&[TicketTypeRequest]>,
    ) -> Result<()> {
        let summary = self
            .quote(account_id, ticket_type_requests)
            .inspect_err(|error| tracing::warn!(%error, "Purchase rejected"))?;

        tracing::debug!(
            total_payment = summary.total_payment.units(),
            total_seats = summary.total_seats.get(),
            "Purchase validated"
        );

        self.payment_service
            .make_payment(summary.account_id, summary.total_payment)?;
        self.seat_reservation_service
            .reserve_seat(summary.account_id, summary.total_seats)?;

        tracing::info!(
            account_id = summary.account_id.get(),
            total_payment = summary.total_payment.units(),
            total_seats = summary.total_seats.get(),
            "Tickets purchased"
        );

        Ok(())
    }
}
