use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::types::{Fill, Side};

/// Validated trading constraints for one computation
///
/// Construct through [`TradingParams::new`] when the values come from an
/// untrusted source; `cooldown` and `fee` are then guaranteed non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingParams {
    /// Minimum number of steps between a sale and the next purchase
    pub cooldown: usize,
    /// Fee charged once per completed sale
    pub fee: Decimal,
}

impl TradingParams {
    /// Validate and build parameters from a signed cooldown
    pub fn new(cooldown: i64, fee: Decimal) -> crate::Result<Self> {
        super::validator::validate_params(cooldown, fee)
    }

    /// Size of the window of banked flat profits the sweep keeps live
    pub fn window_len(&self, steps: usize) -> usize {
        self.cooldown.saturating_add(1).min(steps)
    }
}

/// Best attainable profit at one step in each position state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceState {
    /// Best profit with a share currently held (may be negative)
    pub hold: Decimal,
    /// Best profit with no share held
    pub cool: Decimal,
}

impl RecurrenceState {
    /// State after the first price: buy immediately or stay flat
    pub fn seed(first_price: Decimal) -> Self {
        Self {
            hold: -first_price,
            cool: Decimal::ZERO,
        }
    }
}

/// One completed buy followed by a sell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTrip {
    pub buy: Fill,
    pub sell: Fill,
    /// Sale proceeds minus purchase cost minus the fee
    pub net: Decimal,
}

impl RoundTrip {
    pub fn new(
        buy_index: usize,
        buy_price: Decimal,
        sell_index: usize,
        sell_price: Decimal,
        net: Decimal,
    ) -> Self {
        Self {
            buy: Fill::new(Side::Buy, buy_index, buy_price),
            sell: Fill::new(Side::Sell, sell_index, sell_price),
            net,
        }
    }

    /// Number of steps the position stays open
    pub fn holding_period(&self) -> usize {
        self.sell.index - self.buy.index
    }
}

/// An optimal schedule of round trips, in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradePlan {
    pub round_trips: Vec<RoundTrip>,
}

impl TradePlan {
    /// Sum of the net profit of every round trip
    pub fn total_profit(&self) -> Decimal {
        self.round_trips.iter().map(|trip| trip.net).sum()
    }

    /// Total fees paid across the plan
    pub fn fees_paid(&self, fee: Decimal) -> Decimal {
        fee * Decimal::from(self.round_trips.len())
    }

    pub fn is_empty(&self) -> bool {
        self.round_trips.is_empty()
    }

    pub fn len(&self) -> usize {
        self.round_trips.len()
    }

    /// All fills in execution order
    pub fn fills(&self) -> impl Iterator<Item = &Fill> {
        self.round_trips
            .iter()
            .flat_map(|trip| [&trip.buy, &trip.sell])
    }
}
