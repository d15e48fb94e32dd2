use rust_decimal::Decimal;

use super::types::RecurrenceState;

/// Terminal profit: the flat value at the last step, never below zero
///
/// Not trading at all always yields exactly zero, so it dominates any
/// net-negative path. `None` (no prices) is zero as well.
pub fn finalize(terminal: Option<RecurrenceState>) -> Decimal {
    terminal
        .map(|state| state.cool.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}
