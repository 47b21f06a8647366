//! Exchange-rate application.
//!
//! CRITICAL: No rounding happens here.
//! - Multiplication is exact in `Decimal`
//! - Rounding belongs to the policy step of the formatter

use localcur_shared::{CurrencyConfig, CurrencyError, CurrencyResult};
use rust_decimal::Decimal;

use super::amount::ToAmount;

/// Which of the configured rates to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// Reference currency to local currency (`to_local_rate`).
    ReferenceToLocal,
    /// Local currency to reference currency (`to_reference_rate`).
    LocalToReference,
}

impl ConversionDirection {
    /// Returns the rate for this direction.
    #[must_use]
    pub const fn rate(self, config: &CurrencyConfig) -> Decimal {
        match self {
            Self::ReferenceToLocal => config.to_local_rate,
            Self::LocalToReference => config.to_reference_rate,
        }
    }
}

/// Applies exchange rates with exact decimal arithmetic.
pub struct RateConverter;

impl RateConverter {
    /// Multiplies `amount` by `rate`.
    ///
    /// # Errors
    ///
    /// - `InvalidRate` if `rate <= 0`.
    /// - `InvalidAmount` if the amount cannot be read or the product
    ///   overflows the decimal range.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use localcur_core::currency::RateConverter;
    ///
    /// let result = RateConverter::convert(1.005, dec!(110)).unwrap();
    /// assert_eq!(result, dec!(110.55));
    /// ```
    pub fn convert(amount: impl ToAmount, rate: Decimal) -> CurrencyResult<Decimal> {
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::InvalidRate(rate));
        }
        let amount = amount.to_amount()?;
        amount
            .checked_mul(rate)
            .ok_or_else(|| CurrencyError::InvalidAmount(format!("{amount} x {rate} overflows")))
    }

    /// Converts in the given direction using the config's rate.
    pub fn convert_with(
        config: &CurrencyConfig,
        amount: impl ToAmount,
        direction: ConversionDirection,
    ) -> CurrencyResult<Decimal> {
        Self::convert(amount, direction.rate(config))
    }

    /// Converts a reference-currency amount into the local currency.
    pub fn to_local(config: &CurrencyConfig, amount: impl ToAmount) -> CurrencyResult<Decimal> {
        Self::convert_with(config, amount, ConversionDirection::ReferenceToLocal)
    }

    /// Converts a local-currency amount into the reference currency.
    pub fn to_reference(config: &CurrencyConfig, amount: impl ToAmount) -> CurrencyResult<Decimal> {
        Self::convert_with(config, amount, ConversionDirection::LocalToReference)
    }
}
