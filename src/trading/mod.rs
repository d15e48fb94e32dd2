//! Profit maximization under a post-sale cooldown and a per-sale fee
//!
//! # Pipeline
//!
//! ```text
//!  prices, cooldown, fee
//!          │
//!          ▼
//!  validator ── ConfigurationError / MalformedInputError
//!          │
//!          ▼ (empty prices short-circuit to 0)
//!  engine::sweep ── NumericOverflowError
//!          │
//!          ▼
//!  finalizer::finalize → max(0, cool[n-1])
//! ```
//!
//! At most one share is held at a time, there is no short selling, and after
//! a sale at step `j` the next purchase may happen at step `j + cooldown + 1`
//! at the earliest. The fee is charged once per round trip, on the sale.
//!
//! # Example
//!
//! ```
//! use cooldown_trader::compute_max_profit;
//! use rust_decimal_macros::dec;
//!
//! let prices = [dec!(1), dec!(2), dec!(3), dec!(0), dec!(2)];
//! assert_eq!(compute_max_profit(&prices, 1, dec!(0)).unwrap(), dec!(3));
//! ```

mod engine;
mod fees;
mod finalizer;
mod plan;
mod types;
pub mod validator;

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::common::errors::Result;

pub use engine::sweep;
pub use fees::FeeCalculator;
pub use finalizer::finalize;
pub use plan::{plan_trades, recurrence_history};
pub use types::{RecurrenceState, RoundTrip, TradePlan, TradingParams};

/// Maximum total profit for `prices` under `params`
///
/// Validates the inputs, runs the sweep and clamps the terminal flat value at
/// zero. An empty sequence yields zero without running the sweep.
#[instrument(skip(prices), fields(steps = prices.len()))]
pub fn max_profit(prices: &[Decimal], params: &TradingParams) -> Result<Decimal> {
    validator::validate_fee(params.fee)?;
    validator::validate_prices(prices)?;

    if prices.is_empty() {
        debug!("empty price sequence, nothing to trade");
        return Ok(Decimal::ZERO);
    }

    let terminal = engine::sweep(prices, params)?;
    Ok(finalizer::finalize(terminal))
}

/// Convenience form of [`max_profit`] taking the cooldown and fee directly
pub fn compute_max_profit(prices: &[Decimal], cooldown: usize, fee: Decimal) -> Result<Decimal> {
    max_profit(prices, &TradingParams { cooldown, fee })
}
