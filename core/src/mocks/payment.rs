//! Mock payment collaborator for testing.

use super::{CallLog, CollaboratorCall};
use crate::providers::{PaymentError, TicketPaymentService};
use crate::types::{AccountId, Money};

/// Mock payment service.
///
/// Records every charge. Succeeds unless built with [`Self::failing`];
/// failed charges are recorded too.
#[derive(Debug, Clone, Default)]
pub struct MockPaymentService {
    log: CallLog,
    failure: Option<PaymentError>,
}

impl MockPaymentService {
    /// Create a mock that accepts every payment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that records into `log`.
    #[must_use]
    pub const fn with_log(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// Make every payment fail with `error`.
    #[must_use]
    pub fn failing(mut self, error: PaymentError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Charges received so far.
    #[must_use]
    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.log
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::Payment { account_id, amount } => Some((account_id, amount)),
                CollaboratorCall::SeatReservation { .. } => None,
            })
            .collect()
    }
}

impl TicketPaymentService for MockPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError> {
        self.log.record(CollaboratorCall::Payment { account_id, amount });
        self.failure.clone().map_or(Ok(()), Err)
    }
}
