//! Payment collaborator trait.

use crate::types::{AccountId, Money};
use thiserror::Error;

/// Failure reported by a payment collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The account was not charged.
    #[error("payment declined")]
    Declined,

    /// The payment service could not be reached or refused to process the charge.
    #[error("payment service unavailable: {reason}")]
    Unavailable {
        /// Reason given by the payment service
        reason: String,
    },
}

/// Payment collaborator.
///
/// This trait abstracts over the payment gateway that takes money from the
/// customer's account.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` to `account_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the payment service does not take the payment.
    fn make_payment(&self, account_id: AccountId, amount: Money) -> Result<(), PaymentError>;
}
