//! External collaborators of the ticket service.
//!
//! The ticket service charges the customer and reserves their seats through
//! these traits. Implementations live outside this crate (a payment gateway,
//! a seat booking system); the [`mocks`](crate::mocks) module provides
//! in-memory versions for tests.
//!
//! Both collaborators are assumed to be correct: a call either succeeds or
//! returns the collaborator's own error, which the ticket service hands back
//! to its caller unchanged.

pub mod payment;
pub mod seat_reservation;

pub use payment::{PaymentError, TicketPaymentService};
pub use seat_reservation::{SeatReservationError, SeatReservationService};
