//! Domain types for cinema ticket purchases.
//!
//! Raw caller input ([`TicketTypeRequest`], [`PurchaseOrder`]) keeps absent
//! values as `Option` so that validation can reject them explicitly. Values
//! produced by validation and pricing ([`AccountId`], [`Money`],
//! [`SeatCount`]) are only constructed once they are known to be valid.

use crate::error::UnknownTicketType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account paying for the tickets. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates an `AccountId`, or `None` if `id` is not positive.
    #[must_use]
    pub const fn new(id: i64) -> Option<Self> {
        if id > 0 { Some(Self(id)) } else { None }
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Ticket types
// ============================================================================

/// The closed set of ticket categories.
///
/// Unit prices live in [`PriceTable`](crate::pricing::PriceTable), not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum TicketType {
    /// Sits on an adult's lap, pays nothing, needs no seat.
    Infant,
    /// Needs a seat and an accompanying adult.
    Child,
    /// Needs a seat.
    Adult,
}

impl TicketType {
    /// All ticket types, in price order.
    pub const ALL: [Self; 3] = [Self::Infant, Self::Child, Self::Adult];

    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Infant => "INFANT",
            Self::Child => "CHILD",
            Self::Adult => "ADULT",
        }
    }

    /// Whether this ticket must be preceded by an adult ticket.
    #[must_use]
    pub const fn is_dependent(&self) -> bool {
        matches!(self, Self::Infant | Self::Child)
    }

    /// Whether this ticket occupies a seat.
    #[must_use]
    pub const fn occupies_seat(&self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = UnknownTicketType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ticket_type| ticket_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTicketType(s.to_string()))
    }
}

impl TryFrom<String> for TicketType {
    type Error = UnknownTicketType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// Request lines
// ============================================================================

/// One line of a purchase: a ticket type and how many of it.
///
/// Constructed by the caller and validated as part of the whole purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    /// Requested ticket type. `None` means the caller left it unset.
    #[serde(rename = "type", default)]
    pub ticket_type: Option<TicketType>,
    /// Requested quantity. Valid lines ask for at least one ticket.
    #[serde(rename = "quantity")]
    pub no_of_tickets: i32,
}

impl TicketTypeRequest {
    /// Creates a request line for `no_of_tickets` tickets of `ticket_type`.
    #[must_use]
    pub const fn new(ticket_type: TicketType, no_of_tickets: i32) -> Self {
        Self {
            ticket_type: Some(ticket_type),
            no_of_tickets,
        }
    }

    /// Creates a request line with no ticket type set.
    #[must_use]
    pub const fn untyped(no_of_tickets: i32) -> Self {
        Self {
            ticket_type: None,
            no_of_tickets,
        }
    }

    /// Builds a request line from an untyped ticket type name.
    ///
    /// A missing name gives an untyped line, which validation rejects. A
    /// name that is not one of the known ticket types is a contract error.
    ///
    /// # Errors
    ///
    /// Returns [`TicketServiceError::UnknownTicketType`](crate::TicketServiceError::UnknownTicketType)
    /// if `ticket_type` names no known ticket type.
    pub fn parse(ticket_type: Option<&str>, no_of_tickets: i32) -> crate::Result<Self> {
        let ticket_type = ticket_type.map(str::parse::<TicketType>).transpose()?;
        Ok(Self {
            ticket_type,
            no_of_tickets,
        })
    }

    /// Returns the quantity of a line that passed validation.
    ///
    /// Negative quantities never survive validation and are reported as zero.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        u32::try_from(self.no_of_tickets).unwrap_or(0)
    }
}

/// All inputs of a single purchase call.
///
/// Useful when a purchase arrives as untyped data (JSON and the like):
/// absent fields stay `None` and are rejected by validation, while a ticket
/// type that is not one of the known names fails deserialization with
/// [`UnknownTicketType`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// Account paying for the tickets.
    #[serde(default)]
    pub account_id: Option<i64>,
    /// Ordered request lines.
    #[serde(default)]
    pub ticket_type_requests: Option<Vec<TicketTypeRequest>>,
}

impl PurchaseOrder {
    /// Creates an order for `account_id` with the given lines.
    #[must_use]
    pub const fn new(account_id: i64, ticket_type_requests: Vec<TicketTypeRequest>) -> Self {
        Self {
            account_id: Some(account_id),
            ticket_type_requests: Some(ticket_type_requests),
        }
    }

    /// Request lines as a slice, if present.
    #[must_use]
    pub fn requests(&self) -> Option<&[TicketTypeRequest]> {
        self.ticket_type_requests.as_deref()
    }
}

// ============================================================================
// Money and seats
// ============================================================================

/// An amount of money in whole currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// No money.
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole units.
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units.
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Adds two amounts with overflow checking.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies by a quantity with overflow checking.
    #[must_use]
    #[allow(clippy::cast_lossless)] // From is not const
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", self.0)
    }
}

/// Number of seats to reserve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SeatCount(u64);

impl SeatCount {
    /// Creates a seat count.
    #[must_use]
    pub const fn new(seats: u64) -> Self {
        Self(seats)
    }

    /// Returns the number of seats.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
