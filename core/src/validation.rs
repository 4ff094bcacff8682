//! Purchase validation.
//!
//! Rules are checked in a fixed order and the first violation wins:
//!
//! 1. an account id is present
//! 2. the account id is positive
//! 3. the request lines are present and non-empty
//! 4. for each line, in order: quantity at least 1, quantity at most the
//!    configured maximum, ticket type set, and no child or infant line
//!    before the first adult line
//! 5. at least one adult line exists

use crate::config::TicketServiceConfig;
use crate::error::InvalidPurchase;
use crate::types::{AccountId, TicketType, TicketTypeRequest};

/// A purchase that passed every rule.
///
/// Only [`validate_purchase`] creates one, so holding a `ValidatedPurchase`
/// means the account id is positive and every line is well formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedPurchase<'a> {
    account_id: AccountId,
    requests: &'a [TicketTypeRequest],
}

impl<'a> ValidatedPurchase<'a> {
    /// The paying account.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// The request lines, in the caller's order.
    #[must_use]
    pub const fn requests(&self) -> &'a [TicketTypeRequest] {
        self.requests
    }
}

/// Validate a purchase request.
///
/// # Errors
///
/// Returns the [`InvalidPurchase`] for the first rule the request breaks.
pub fn validate_purchase<'a>(
    account_id: Option<i64>,
    requests: Option<&'a [TicketTypeRequest]>,
    config: &TicketServiceConfig,
) -> Result<ValidatedPurchase<'a>, InvalidPurchase> {
    let raw_id = account_id.ok_or(InvalidPurchase::AccountIdRequired)?;
    let account_id = AccountId::new(raw_id).ok_or(InvalidPurchase::InvalidAccountId(raw_id))?;

    let requests = match requests {
        Some(requests) if !requests.is_empty() => requests,
        _ => return Err(InvalidPurchase::InvalidTicketTypeRequest),
    };

    let mut adult_seen = false;
    for request in requests {
        let ticket_type = validate_line(request, config)?;
        if ticket_type == TicketType::Adult {
            adult_seen = true;
        } else if !adult_seen {
            return Err(InvalidPurchase::DependentWithoutAdult);
        }
    }

    // A non-empty request without adults already failed on its first line.
    if !adult_seen {
        return Err(InvalidPurchase::AdultTicketRequired);
    }

    Ok(ValidatedPurchase {
        account_id,
        requests,
    })
}

fn validate_line(
    request: &TicketTypeRequest,
    config: &TicketServiceConfig,
) -> Result<TicketType, InvalidPurchase> {
    let quantity = request.no_of_tickets;
    if quantity < 1 {
        return Err(InvalidPurchase::InvalidQuantity(quantity));
    }
    if quantity > config.max_tickets_per_request {
        return Err(InvalidPurchase::MaximumQuantityExceeded(quantity));
    }
    request.ticket_type.ok_or(InvalidPurchase::TicketTypeRequired)
}
