//! Error types for the profit computation

use thiserror::Error;

/// Result type alias using our TradingError
pub type Result<T> = std::result::Result<T, TradingError>;

/// Process exit code for a successful run
pub const EXIT_OK: u8 = 0;
/// Process exit code for a command-line usage error or other failure
pub const EXIT_USAGE: u8 = 1;
/// Process exit code for malformed price input
pub const EXIT_MALFORMED_INPUT: u8 = 2;
/// Process exit code for an invalid cooldown, fee or config file
pub const EXIT_CONFIGURATION: u8 = 3;
/// Process exit code for arithmetic overflow during the sweep
pub const EXIT_NUMERIC_OVERFLOW: u8 = 4;

/// Main error type for profit computation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TradingError {
    /// A parameter (cooldown, fee, config source) is outside its domain
    #[error("Configuration error: {parameter}: {reason}")]
    Configuration {
        parameter: &'static str,
        reason: String,
    },

    /// A price element is negative, non-finite or unparseable
    #[error("Malformed input at index {index}: {reason}")]
    MalformedInput { index: usize, reason: String },

    /// Arithmetic left the representable decimal range
    #[error("Numeric overflow at step {step}")]
    NumericOverflow { step: usize },
}

impl TradingError {
    pub fn configuration(parameter: &'static str, reason: impl Into<String>) -> Self {
        TradingError::Configuration {
            parameter,
            reason: reason.into(),
        }
    }

    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        TradingError::MalformedInput {
            index,
            reason: reason.into(),
        }
    }

    /// Exit code the command-line wrapper reports for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            TradingError::Configuration { .. } => EXIT_CONFIGURATION,
            TradingError::MalformedInput { .. } => EXIT_MALFORMED_INPUT,
            TradingError::NumericOverflow { .. } => EXIT_NUMERIC_OVERFLOW,
        }
    }
}

impl From<config::ConfigError> for TradingError {
    fn from(err: config::ConfigError) -> Self {
        TradingError::configuration("config", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            TradingError::configuration("fee", "negative").exit_code(),
            EXIT_CONFIGURATION
        );
        assert_eq!(
            TradingError::malformed(3, "negative").exit_code(),
            EXIT_MALFORMED_INPUT
        );
        assert_eq!(
            TradingError::NumericOverflow { step: 1 }.exit_code(),
            EXIT_NUMERIC_OVERFLOW
        );
    }

    #[test]
    fn test_messages_name_the_offender() {
        let err = TradingError::configuration("cooldown", "must be >= 0, got -1");
        assert_eq!(
            err.to_string(),
            "Configuration error: cooldown: must be >= 0, got -1"
        );

        let err = TradingError::malformed(4, "negative price -2");
        assert_eq!(err.to_string(), "Malformed input at index 4: negative price -2");
    }
}
