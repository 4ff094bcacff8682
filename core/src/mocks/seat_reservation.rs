//! Mock seat reservation collaborator for testing.

use super::{CallLog, CollaboratorCall};
use crate::providers::{SeatReservationError, SeatReservationService};
use crate::types::{AccountId, SeatCount};

/// Mock seat reservation service.
///
/// Records every reservation. Succeeds unless built with [`Self::failing`].
#[derive(Debug, Clone, Default)]
pub struct MockSeatReservationService {
    log: CallLog,
    failure: Option<SeatReservationError>,
}

impl MockSeatReservationService {
    /// Create a mock that accepts every reservation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that records into `log`.
    #[must_use]
    pub const fn with_log(log: CallLog) -> Self {
        Self { log, failure: None }
    }

    /// Make every reservation fail with `error`.
    #[must_use]
    pub fn failing(mut self, error: SeatReservationError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Reservations received so far.
    #[must_use]
    pub fn reservations(&self) -> Vec<(AccountId, SeatCount)> {
        self.log
            .calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::SeatReservation { account_id, seats } => Some((account_id, seats)),
                CollaboratorCall::Payment { .. } => None,
            })
            .collect()
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seats: SeatCount,
    ) -> Result<(), SeatReservationError> {
        self.log
            .record(CollaboratorCall::SeatReservation { account_id, seats });
        self.failure.clone().map_or(Ok(()), Err)
    }
}
