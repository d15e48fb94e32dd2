//! Reconstruction of one optimal trade schedule
//!
//! The profit sweep only keeps a bounded window, which is enough for the
//! number but not for the trades behind it. Here the full per-step history is
//! kept and walked backwards from the final flat state.

use rust_decimal::Decimal;
use tracing::debug;

use super::engine::transition;
use super::fees::FeeCalculator;
use super::types::{RecurrenceState, RoundTrip, TradePlan, TradingParams};
use super::validator;
use crate::common::errors::Result;
use crate::common::types::PositionState;

/// Per-step `(hold, cool)` values for the whole sequence
///
/// Same recurrence as the bounded sweep, with `O(n)` memory.
pub fn recurrence_history(
    prices: &[Decimal],
    params: &TradingParams,
) -> Result<Vec<RecurrenceState>> {
    let Some(&first) = prices.first() else {
        return Ok(Vec::new());
    };

    let cooldown = params.cooldown;
    let mut history = Vec::with_capacity(prices.len());
    history.push(RecurrenceState::seed(first));

    for (step, &price) in prices.iter().enumerate().skip(1) {
        let banked = if step > cooldown {
            Some(history[step - cooldown - 1].cool)
        } else {
            None
        };
        let next = transition(history[step - 1], banked, price, params.fee, step)?;
        history.push(next);
    }

    Ok(history)
}

/// Build one schedule of round trips whose total equals the maximum profit
///
/// On ties the walk prefers doing nothing, so the plan never contains a round
/// trip that adds zero.
pub fn plan_trades(prices: &[Decimal], params: &TradingParams) -> Result<TradePlan> {
    validator::validate_fee(params.fee)?;
    validator::validate_prices(prices)?;

    let history = recurrence_history(prices, params)?;
    let Some(last) = history.last() else {
        return Ok(TradePlan::default());
    };
    if last.cool <= Decimal::ZERO {
        return Ok(TradePlan::default());
    }

    let cooldown = params.cooldown;
    let mut round_trips = Vec::new();
    let mut position = PositionState::Flat;
    let mut sell_at = None;
    let mut i = history.len() - 1;

    loop {
        match position {
            PositionState::Flat => {
                if i == 0 {
                    break;
                }
                if history[i].cool == history[i - 1].cool {
                    i -= 1;
                    continue;
                }
                sell_at = Some(i);
                position = PositionState::Holding;
                i -= 1;
            }
            PositionState::Holding => {
                if i > 0 && history[i].hold == history[i - 1].hold {
                    i -= 1;
                    continue;
                }
                if let Some(sell) = sell_at.take() {
                    let net =
                        FeeCalculator::round_trip_net(prices[i], prices[sell], params.fee, sell)?;
                    round_trips.push(RoundTrip::new(i, prices[i], sell, prices[sell], net));
                }
                // explicit boundary: only a buy past the cooldown can be funded by a sale
                if i > cooldown {
                    let banked = history[i - cooldown - 1].cool;
                    if banked > Decimal::ZERO && history[i].hold == banked - prices[i] {
                        position = PositionState::Flat;
                        i -= cooldown + 1;
                        continue;
                    }
                }
                break;
            }
        }
    }

    round_trips.reverse();
    let plan = TradePlan { round_trips };
    debug!(round_trips = plan.len(), total = %plan.total_profit(), "trade plan reconstructed");
    Ok(plan)
}
