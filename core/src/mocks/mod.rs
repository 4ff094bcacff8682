//! Mock collaborator implementations for testing.
//!
//! Both mocks record every call they receive. Mocks built with the same
//! [`CallLog`] record into one shared, ordered log, so tests can check the
//! order in which the ticket service called its collaborators.

pub mod payment;
pub mod seat_reservation;

pub use payment::MockPaymentService;
pub use seat_reservation::MockSeatReservationService;

use crate::types::{AccountId, Money, SeatCount};
use std::sync::{Arc, Mutex, PoisonError};

/// A call received by a mock collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorCall {
    /// `make_payment` was called.
    Payment {
        /// Charged account
        account_id: AccountId,
        /// Charged amount
        amount: Money,
    },
    /// `reserve_seat` was called.
    SeatReservation {
        /// Account the seats are held for
        account_id: AccountId,
        /// Number of seats
        seats: SeatCount,
    },
}

/// Ordered record of collaborator calls, shareable between mocks.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<CollaboratorCall>>>,
}

impl CallLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a call.
    pub fn record(&self, call: CollaboratorCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    /// All calls so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no call was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
