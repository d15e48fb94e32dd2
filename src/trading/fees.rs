use rust_decimal::Decimal;

use crate::common::errors::{Result, TradingError};

/// Fee calculation utilities
///
/// The fee is flat and charged once per round trip, at the sale. Buying is
/// free of fees.
pub struct FeeCalculator;

impl FeeCalculator {
    /// Cash paid to open a position
    pub fn entry_cost(price: Decimal) -> Decimal {
        price
    }

    /// Cash received when closing a position, after the fee
    ///
    /// # Arguments
    /// * `price` - The sale price
    /// * `fee` - Flat fee charged on the sale
    /// * `step` - Index of the sale, reported on overflow
    pub fn exit_proceeds(price: Decimal, fee: Decimal, step: usize) -> Result<Decimal> {
        price
            .checked_sub(fee)
            .ok_or(TradingError::NumericOverflow { step })
    }

    /// Net profit of buying at `buy` and selling at `sell`
    ///
    /// # Returns
    /// `sell - fee - buy`, which is negative when the move does not cover the fee
    pub fn round_trip_net(
        buy: Decimal,
        sell: Decimal,
        fee: Decimal,
        step: usize,
    ) -> Result<Decimal> {
        Self::exit_proceeds(sell, fee, step)?
            .checked_sub(Self::entry_cost(buy))
            .ok_or(TradingError::NumericOverflow { step })
    }

    /// Smallest sale price at which a purchase at `buy` breaks even
    pub fn break_even(buy: Decimal, fee: Decimal) -> Option<Decimal> {
        buy.checked_add(fee)
    }
}
