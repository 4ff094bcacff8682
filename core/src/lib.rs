//! # Cinema Tickets Core
//!
//! Ticket purchasing for the cinema booking flow.
//!
//! This crate validates a purchase request against the cinema's business
//! rules, works out the payment due and the seats needed, then charges the
//! account and reserves the seats through two external collaborators.
//!
//! ## Purchase rules
//!
//! - The account id must be present and positive
//! - At least one request line, each asking for 1 to 20 tickets
//! - Every line names a ticket type: `INFANT`, `CHILD` or `ADULT`
//! - Child and infant tickets need an adult ticket earlier in the request
//! - Infants pay nothing and sit on an adult's lap (no seat)
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::mocks::{MockPaymentService, MockSeatReservationService};
//! use cinema_tickets_core::{TicketService, TicketServiceImpl, TicketType, TicketTypeRequest};
//!
//! let service = TicketServiceImpl::new(
//!     MockPaymentService::new(),
//!     MockSeatReservationService::new(),
//! );
//!
//! let requests = [
//!     TicketTypeRequest::new(TicketType::Adult, 2),
//!     TicketTypeRequest::new(TicketType::Child, 1),
//! ];
//! service.purchase_tickets(Some(100), Some(&requests))?;
//!
//! let (_, amount) = service.payment_service().payments()[0];
//! assert_eq!(amount.units(), 50);
//! # Ok::<(), cinema_tickets_core::TicketServiceError>(())
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

pub mod config;
pub mod error;
pub mod pricing;
pub mod providers;
pub mod seating;
pub mod service;
pub mod types;
pub mod validation;

/// Mock collaborators for tests.
#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use config::TicketServiceConfig;
pub use error::{InvalidPurchase, Result, TicketServiceError, UnknownTicketType};
pub use pricing::PriceTable;
pub use providers::{
    PaymentError, SeatReservationError, SeatReservationService, TicketPaymentService,
};
pub use service::{PurchaseSummary, TicketService, TicketServiceImpl};
pub use types::{AccountId, Money, PurchaseOrder, SeatCount, TicketType, TicketTypeRequest};
pub use validation::{ValidatedPurchase, validate_purchase};
