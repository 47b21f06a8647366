//! Engine-wide error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type returned by caller-supplied hooks.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Conversion and formatting errors.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// Amount is not a finite number or numeric-looking string.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Exchange rate is zero or negative.
    #[error("Invalid exchange rate: {0} (must be greater than zero)")]
    InvalidRate(Decimal),

    /// ISO code is not known to the locale formatting layer.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Unrecognized rounding policy token.
    #[error("Invalid rounding policy: {0}")]
    InvalidPolicy(String),

    /// Currency configuration or settings are malformed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied hook failed. The hook's error is passed through as-is.
    #[error(transparent)]
    HookFailure(HookError),
}

impl CurrencyError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidRate(_) => "INVALID_RATE",
            Self::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            Self::InvalidPolicy(_) => "INVALID_POLICY",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::HookFailure(_) => "HOOK_FAILURE",
        }
    }

    /// Returns true if the error came from a caller-supplied hook.
    #[must_use]
    pub const fn is_hook_failure(&self) -> bool {
        matches!(self, Self::HookFailure(_))
    }
}
