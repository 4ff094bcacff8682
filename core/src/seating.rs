//! Seat allocation.

use crate::types::{SeatCount, TicketTypeRequest};

/// Number of seats to reserve for `requests`.
///
/// Every ticket takes a seat except infant tickets, whose holders sit on an
/// adult's lap.
#[must_use]
pub fn total_seats(requests: &[TicketTypeRequest]) -> SeatCount {
    let seats = requests
        .iter()
        .filter(|request| request.ticket_type.is_some_and(|t| t.occupies_seat()))
        .map(|request| u64::from(request.quantity()))
        .sum();
    SeatCount::new(seats)
}
