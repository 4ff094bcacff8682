//! Ticket service configuration.
//!
//! Defaults match the standard cinema rules. Deployments can override them
//! from environment variables with [`TicketServiceConfig::from_env`].

use crate::pricing::PriceTable;
use crate::types::{Money, TicketType};
use serde::{Deserialize, Serialize};
use std::env;

/// Default upper bound on the quantity of a single request line.
pub const DEFAULT_MAX_TICKETS_PER_REQUEST: i32 = 20;

/// Purchase rules and prices used by the ticket service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketServiceConfig {
    /// Largest quantity a single request line may ask for.
    ///
    /// Default: 20
    pub max_tickets_per_request: i32,

    /// Unit prices per ticket type.
    ///
    /// Default: infant 0, child 10, adult 20
    pub prices: PriceTable,
}

impl TicketServiceConfig {
    /// Create configuration with the standard rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_tickets_per_request: DEFAULT_MAX_TICKETS_PER_REQUEST,
            prices: PriceTable::STANDARD,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `TICKETS_MAX_PER_REQUEST`, `TICKETS_PRICE_INFANT`,
    /// `TICKETS_PRICE_CHILD` and `TICKETS_PRICE_ADULT`. Missing or
    /// unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key-value source.
    ///
    /// Same keys and fallbacks as [`from_env`](Self::from_env). A maximum
    /// quantity that is not positive is ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new();
        let price = |key: &str, default: Money| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .map_or(default, Money::from_units)
        };

        let config = Self {
            max_tickets_per_request: lookup("TICKETS_MAX_PER_REQUEST")
                .and_then(|s| s.trim().parse().ok())
                .filter(|max: &i32| *max > 0)
                .unwrap_or(defaults.max_tickets_per_request),
            prices: PriceTable {
                infant: price("TICKETS_PRICE_INFANT", defaults.prices.infant),
                child: price("TICKETS_PRICE_CHILD", defaults.prices.child),
                adult: price("TICKETS_PRICE_ADULT", defaults.prices.adult),
            },
        };

        if config != defaults {
            tracing::info!(
                max_tickets_per_request = config.max_tickets_per_request,
                infant = config.prices.infant.units(),
                child = config.prices.child.units(),
                adult = config.prices.adult.units(),
                "Loaded non-default ticket rules"
            );
        }

        config
    }

    /// Set the largest quantity allowed on a single request line.
    #[must_use]
    pub const fn with_max_tickets_per_request(mut self, max: i32) -> Self {
        self.max_tickets_per_request = max;
        self
    }

    /// Set the price table.
    #[must_use]
    pub const fn with_prices(mut self, prices: PriceTable) -> Self {
        self.prices = prices;
        self
    }

    /// Set the unit price of one ticket type.
    #[must_use]
    pub const fn with_price(mut self, ticket_type: TicketType, price: Money) -> Self {
        self.prices = self.prices.with_price(ticket_type, price);
        self
    }
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}
