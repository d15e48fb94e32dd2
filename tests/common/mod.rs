//! Common test utilities and fixtures

#![allow(dead_code)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A worked example with its expected maximum profit
pub struct Scenario {
    pub name: &'static str,
    pub prices: Vec<Decimal>,
    pub cooldown: usize,
    pub fee: Decimal,
    pub expected: Decimal,
}

/// Reference scenarios
pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "sell, cool down one step, buy again",
            prices: to_decimals(&[1, 2, 3, 0, 2]),
            cooldown: 1,
            fee: dec!(0),
            expected: dec!(3),
        },
        Scenario {
            name: "fee with one step of cooldown",
            prices: to_decimals(&[1, 3, 2, 8, 4, 9]),
            cooldown: 1,
            fee: dec!(2),
            expected: dec!(6),
        },
        Scenario {
            name: "fee with immediate rebuy allowed",
            prices: to_decimals(&[1, 3, 2, 8, 4, 9]),
            cooldown: 0,
            fee: dec!(2),
            expected: dec!(8),
        },
        Scenario {
            name: "long cooldown on a rising market",
            prices: to_decimals(&[1, 2, 3, 4, 5]),
            cooldown: 2,
            fee: dec!(0),
            expected: dec!(4),
        },
        Scenario {
            name: "falling market",
            prices: to_decimals(&[5, 4, 3, 2, 1]),
            cooldown: 1,
            fee: dec!(0),
            expected: dec!(0),
        },
        Scenario {
            name: "single price",
            prices: to_decimals(&[1]),
            cooldown: 1,
            fee: dec!(0),
            expected: dec!(0),
        },
        Scenario {
            name: "fee larger than any move",
            prices: to_decimals(&[1, 2, 3, 4, 5]),
            cooldown: 1,
            fee: dec!(10),
            expected: dec!(0),
        },
    ]
}

/// Exhaustive search over every buy/sell/skip decision
///
/// Exponential, only for short sequences. Independent of the recurrence so it
/// can be used to check optimality.
pub fn brute_force(prices: &[i64], cooldown: usize, fee: i64) -> i64 {
    fn go(
        prices: &[i64],
        cooldown: usize,
        fee: i64,
        i: usize,
        holding: bool,
        next_buy: usize,
    ) -> Option<i64> {
        if i == prices.len() {
            return if holding { None } else { Some(0) };
        }

        let skip = go(prices, cooldown, fee, i + 1, holding, next_buy);
        let act = if holding {
            go(prices, cooldown, fee, i + 1, false, i + cooldown + 1)
                .map(|rest| rest + prices[i] - fee)
        } else if i >= next_buy {
            go(prices, cooldown, fee, i + 1, true, next_buy).map(|rest| rest - prices[i])
        } else {
            None
        };

        match (skip, act) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    go(prices, cooldown, fee, 0, false, 0).unwrap_or(0).max(0)
}

pub fn to_decimals(values: &[i64]) -> Vec<Decimal> {
    values.iter().map(|&v| Decimal::from(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_known_answers() {
        assert_eq!(brute_force(&[1, 2, 3, 0, 2], 1, 0), 3);
        assert_eq!(brute_force(&[1, 3, 2, 8, 4, 9], 1, 2), 6);
        assert_eq!(brute_force(&[1, 3, 2, 8, 4, 9], 0, 2), 8);
        assert_eq!(brute_force(&[], 0, 0), 0);
    }
}
