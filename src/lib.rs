//! cooldown_trader Library
//!
//! Maximum profit from buying and selling a single asset, one share at a
//! time, when every sale is followed by a mandatory cooldown and charged a
//! flat fee.

pub mod common;
pub mod config;
pub mod trading;

// Re-export commonly used types
pub use common::errors::{Result, TradingError};
pub use common::types::{Fill, PositionState, Side};
pub use config::types::AppConfig;

pub use trading::{
    compute_max_profit, max_profit, plan_trades, recurrence_history, FeeCalculator,
    RecurrenceState, RoundTrip, TradePlan, TradingParams,
};
