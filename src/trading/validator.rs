//! Input validation for prices, cooldown and fee
//!
//! Everything here runs before the sweep starts. A rejected input never
//! reaches the recurrence engine, so the engine itself only has to care about
//! arithmetic overflow.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::types::TradingParams;
use crate::common::errors::{Result, TradingError};

/// Check cooldown and fee domains and build [`TradingParams`]
pub fn validate_params(cooldown: i64, fee: Decimal) -> Result<TradingParams> {
    if cooldown < 0 {
        return Err(TradingError::configuration(
            "cooldown",
            format!("must be >= 0, got {}", cooldown),
        ));
    }
    let cooldown = usize::try_from(cooldown).map_err(|_| {
        TradingError::configuration("cooldown", format!("{} does not fit in usize", cooldown))
    })?;

    validate_fee(fee)?;

    Ok(TradingParams { cooldown, fee })
}

/// Reject a negative fee
pub fn validate_fee(fee: Decimal) -> Result<()> {
    if fee.is_sign_negative() && !fee.is_zero() {
        return Err(TradingError::configuration(
            "fee",
            format!("must be >= 0, got {}", fee),
        ));
    }
    Ok(())
}

/// Reject any negative price, citing the first offending index
pub fn validate_prices(prices: &[Decimal]) -> Result<()> {
    prices
        .iter()
        .enumerate()
        .try_for_each(|(index, &price)| check_price(index, price))
}

fn check_price(index: usize, price: Decimal) -> Result<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(TradingError::malformed(
            index,
            format!("negative price {}", price),
        ));
    }
    Ok(())
}

/// Convert floating-point prices, rejecting NaN, infinities and out-of-range values
pub fn prices_from_f64(prices: &[f64]) -> Result<Vec<Decimal>> {
    let converted = prices
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if !value.is_finite() {
                return Err(TradingError::malformed(
                    index,
                    format!("non-finite price {}", value),
                ));
            }
            Decimal::from_f64(value).ok_or_else(|| {
                TradingError::malformed(index, format!("price {} out of decimal range", value))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    validate_prices(&converted)?;
    Ok(converted)
}

/// Parse a comma-separated price list such as `"1,2,3.5"`
///
/// A blank string is an empty sequence. Each element is validated as it is
/// parsed, so the reported index is that of the first bad element.
pub fn parse_prices(raw: &str) -> Result<Vec<Decimal>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let prices = raw
        .split(',')
        .enumerate()
        .map(|(index, token)| {
            let price =
                parse_decimal(token).map_err(|reason| TradingError::malformed(index, reason))?;
            check_price(index, price)?;
            Ok(price)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(prices)
}

/// Parse the cooldown argument
pub fn parse_cooldown(raw: &str) -> Result<usize> {
    let value = raw.trim().parse::<i64>().map_err(|e| {
        TradingError::configuration("cooldown", format!("invalid integer {:?}: {}", raw, e))
    })?;
    Ok(validate_params(value, Decimal::ZERO)?.cooldown)
}

/// Parse the fee argument
pub fn parse_fee(raw: &str) -> Result<Decimal> {
    let fee = parse_decimal(raw).map_err(|reason| TradingError::configuration("fee", reason))?;
    validate_fee(fee)?;
    Ok(fee)
}

fn parse_decimal(token: &str) -> std::result::Result<Decimal, String> {
    let token = token.trim();
    if token.is_empty() {
        return Err("empty value".to_string());
    }

    let lowered = token.to_ascii_lowercase();
    let unsigned = lowered.trim_start_matches(['+', '-']);
    if matches!(unsigned, "nan" | "inf" | "infinity") {
        return Err(format!("non-finite value {:?}", token));
    }

    let parsed = if lowered.contains('e') {
        Decimal::from_scientific(token)
    } else {
        Decimal::from_str(token)
    };
    parsed.map_err(|e| format!("cannot parse {:?}: {}", token, e))
}
