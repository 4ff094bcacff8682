//! Seat reservation collaborator trait.

use crate::types::{AccountId, SeatCount};
use thiserror::Error;

/// Failure reported by a seat reservation collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatReservationError {
    /// Not enough free seats for the request.
    #[error("not enough seats available: requested {requested}")]
    NotEnoughSeats {
        /// Seats the request asked for
        requested: SeatCount,
    },

    /// The booking system could not be reached or refused the reservation.
    #[error("seat reservation unavailable: {reason}")]
    Unavailable {
        /// Reason given by the booking system
        reason: String,
    },
}

/// Seat reservation collaborator.
///
/// This trait abstracts over the booking system that holds seats for an
/// account.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seats` seats for `account_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the seats could not be reserved.
    fn reserve_seat(&self, account_id: AccountId, seats: SeatCount)
    -> Result<(), SeatReservationError>;
}
