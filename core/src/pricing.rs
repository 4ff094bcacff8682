//! Ticket prices and the total payment for a purchase.

use crate::types::{Money, TicketType, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// Unit price for each ticket type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Price of an infant ticket.
    pub infant: Money,
    /// Price of a child ticket.
    pub child: Money,
    /// Price of an adult ticket.
    pub adult: Money,
}

impl PriceTable {
    /// Standard cinema prices: infants free, children 10, adults 20.
    pub const STANDARD: Self = Self {
        infant: Money::from_units(0),
        child: Money::from_units(10),
        adult: Money::from_units(20),
    };

    /// Unit price of `ticket_type`.
    #[must_use]
    pub const fn price_of(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Infant => self.infant,
            TicketType::Child => self.child,
            TicketType::Adult => self.adult,
        }
    }

    /// Set the unit price of `ticket_type`.
    #[must_use]
    pub const fn with_price(mut self, ticket_type: TicketType, price: Money) -> Self {
        match ticket_type {
            TicketType::Infant => self.infant = price,
            TicketType::Child => self.child = price,
            TicketType::Adult => self.adult = price,
        }
        self
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Total payment due for `requests`: the sum of unit price times quantity.
///
/// Lines without a ticket type contribute nothing; validation rejects them
/// before pricing runs. Returns `None` if the total overflows.
#[must_use]
pub fn total_payment(prices: &PriceTable, requests: &[TicketTypeRequest]) -> Option<Money> {
    requests.iter().try_fold(Money::ZERO, |total, request| {
        let Some(ticket_type) = request.ticket_type else {
            return Some(total);
        };
        let line = prices
            .price_of(ticket_type)
            .checked_multiply(request.quantity())?;
        total.checked_add(line)
    })
}
