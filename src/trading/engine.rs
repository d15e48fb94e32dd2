//! Two-state recurrence over the price sequence
//!
//! At every step the engine tracks the best profit while holding one share
//! (`hold`) and while flat (`cool`). A sale at step `j` can only fund a
//! purchase at step `i > j + cooldown`, so a purchase at `i` reads the flat
//! profit banked at `i - cooldown - 1`. Only those last `cooldown + 1` flat
//! values are kept live.

use rust_decimal::Decimal;
use std::collections::VecDeque;
use tracing::{debug, trace};

use super::types::{RecurrenceState, TradingParams};
use crate::common::errors::{Result, TradingError};

/// Flat-state profits of the most recent steps, oldest first
///
/// Never grows past `capacity`, so the backing buffer is allocated once.
struct CooldownWindow {
    values: VecDeque<Decimal>,
    capacity: usize,
}

impl CooldownWindow {
    fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Flat profit recorded `capacity` steps before the next push
    fn banked(&self) -> Option<Decimal> {
        if self.values.len() == self.capacity {
            self.values.front().copied()
        } else {
            None
        }
    }

    fn push(&mut self, cool: Decimal) {
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(cool);
    }
}

/// Apply one step of the recurrence
///
/// `banked` is the flat profit from `cooldown + 1` steps back, or `None`
/// while no sale that old can exist; the only entry then is a self-funded buy.
pub(crate) fn transition(
    prev: RecurrenceState,
    banked: Option<Decimal>,
    price: Decimal,
    fee: Decimal,
    step: usize,
) -> Result<RecurrenceState> {
    let overflow = || TradingError::NumericOverflow { step };

    let entry = match banked {
        Some(cool) => cool.checked_sub(price).ok_or_else(overflow)?,
        None => -price,
    };
    let exit = prev
        .hold
        .checked_add(price)
        .and_then(|v| v.checked_sub(fee))
        .ok_or_else(overflow)?;

    Ok(RecurrenceState {
        hold: prev.hold.max(entry),
        cool: prev.cool.max(exit),
    })
}

/// Sweep the whole sequence and return the state at the last step
///
/// Returns `None` for an empty sequence. Prices and fee are assumed to have
/// passed validation.
pub fn sweep(prices: &[Decimal], params: &TradingParams) -> Result<Option<RecurrenceState>> {
    let Some((&first, rest)) = prices.split_first() else {
        return Ok(None);
    };

    let cooldown = params.cooldown;
    let mut window = CooldownWindow::new(params.window_len(prices.len()));
    let mut state = RecurrenceState::seed(first);
    window.push(state.cool);

    for (offset, &price) in rest.iter().enumerate() {
        let step = offset + 1;
        let banked = if step > cooldown {
            let cool = window.banked();
            debug_assert!(cool.is_some(), "window must be full past the cooldown");
            cool
        } else {
            None
        };

        state = transition(state, banked, price, params.fee, step)?;
        window.push(state.cool);

        trace!(step, %price, hold = %state.hold, cool = %state.cool, "recurrence step");
    }

    debug!(
        steps = prices.len(),
        cooldown,
        hold = %state.hold,
        cool = %state.cool,
        "sweep finished"
    );

    Ok(Some(state))
}
