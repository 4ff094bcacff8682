//! Error types for ticket purchases.

use crate::providers::{PaymentError, SeatReservationError};
use thiserror::Error;

/// Result type alias for ticket service operations.
pub type Result<T> = std::result::Result<T, TicketServiceError>;

/// A purchase request that breaks one of the business rules.
///
/// Every validation failure is reported through this type, including
/// failures caused by absent input (a missing account id, a missing list of
/// ticket requests, a request line without a ticket type).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPurchase {
    /// No account id was supplied.
    #[error("account id required")]
    AccountIdRequired,

    /// The account id is zero or negative.
    #[error("invalid account id")]
    InvalidAccountId(i64),

    /// The list of ticket requests is absent or empty.
    #[error("invalid ticket type request")]
    InvalidTicketTypeRequest,

    /// A request line asks for fewer than one ticket.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i32),

    /// A request line asks for more tickets than a single line allows.
    #[error("maximum quantity exceeded: {0}")]
    MaximumQuantityExceeded(i32),

    /// A request line has no ticket type.
    #[error("ticket type cannot be null")]
    TicketTypeRequired,

    /// A child or infant line appears before any adult line.
    #[error("child or infant cannot be purchased without an adult")]
    DependentWithoutAdult,

    /// The request contains no adult line at all.
    #[error("at least one adult ticket required")]
    AdultTicketRequired,
}

/// Text that does not name one of the three ticket types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid ticket type: {0}")]
pub struct UnknownTicketType(pub String);

/// Errors returned by [`TicketService`](crate::service::TicketService).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TicketServiceError {
    /// The purchase request was rejected before any collaborator was called.
    #[error("invalid purchase: {0}")]
    InvalidPurchase(#[from] InvalidPurchase),

    /// A ticket type value outside `INFANT`, `CHILD`, `ADULT` reached the
    /// service. This is a contract violation by the caller, not bad user input.
    #[error("invalid ticket type: {0}")]
    UnknownTicketType(String),

    /// The total payment does not fit in [`Money`](crate::types::Money).
    #[error("total payment overflowed")]
    AmountOverflow,

    /// The payment collaborator failed.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// The seat reservation collaborator failed.
    #[error(transparent)]
    SeatReservation(#[from] SeatReservationError),
}

impl From<UnknownTicketType> for TicketServiceError {
    fn from(error: UnknownTicketType) -> Self {
        Self::UnknownTicketType(error.0)
    }
}

impl TicketServiceError {
    /// Returns `true` if the purchase was rejected by validation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cinema_tickets_core::{InvalidPurchase, TicketServiceError};
    /// let error = TicketServiceError::from(InvalidPurchase::AdultTicketRequired);
    /// assert!(error.is_invalid_purchase());
    /// ```
    #[must_use]
    pub const fn is_invalid_purchase(&self) -> bool {
        matches!(self, Self::InvalidPurchase(_))
    }

    /// Returns `true` if this error indicates a defect in the calling code
    /// rather than a problem with the purchase itself.
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        matches!(self, Self::UnknownTicketType(_) | Self::AmountOverflow)
    }

    /// Returns the validation failure, if this is one.
    #[must_use]
    pub const fn as_invalid_purchase(&self) -> Option<&InvalidPurchase> {
        match self {
            Self::InvalidPurchase(reason) => Some(reason),
            _ => None,
        }
    }
}
