//! Active currency configuration.
//!
//! CRITICAL: Rates are `Decimal`, never floating-point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CurrencyError, CurrencyResult};

/// The local currency a session displays amounts in.
///
/// `to_local_rate` converts a reference-currency amount into the local
/// currency; `to_reference_rate` goes the other way. The two are supplied
/// independently and are not required to be exact inverses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// ISO 4217 code of the local currency (e.g., "JPY").
    pub iso_code: String,
    /// Display locale (e.g., "ja-JP").
    pub locale: String,
    /// 1 reference unit = `to_local_rate` local units.
    pub to_local_rate: Decimal,
    /// 1 local unit = `to_reference_rate` reference units.
    pub to_reference_rate: Decimal,
}

impl CurrencyConfig {
    /// Creates a validated configuration.
    ///
    /// The ISO code is upper-cased.
    pub fn new(
        iso_code: impl Into<String>,
        locale: impl Into<String>,
        to_local_rate: Decimal,
        to_reference_rate: Decimal,
    ) -> CurrencyResult<Self> {
        let config = Self {
            iso_code: iso_code.into().to_ascii_uppercase(),
            locale: locale.into(),
            to_local_rate,
            to_reference_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the ISO code is not three ASCII letters or the
    ///   locale is empty.
    /// - `InvalidRate` if either rate is zero or negative.
    pub fn validate(&self) -> CurrencyResult<()> {
        if self.iso_code.len() != 3 || !self.iso_code.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CurrencyError::InvalidConfig(format!(
                "ISO code must be three letters, got {:?}",
                self.iso_code
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(CurrencyError::InvalidConfig("locale must not be empty".into()));
        }
        for rate in [self.to_local_rate, self.to_reference_rate] {
            if rate <= Decimal::ZERO {
                return Err(CurrencyError::InvalidRate(rate));
            }
        }
        Ok(())
    }

    /// Returns a copy with both rates replaced.
    #[must_use]
    pub fn with_rates(&self, to_local_rate: Decimal, to_reference_rate: Decimal) -> Self {
        Self {
            to_local_rate,
            to_reference_rate,
            ..self.clone()
        }
    }
}

impl Default for CurrencyConfig {
    /// Reference currency displayed as itself.
    fn default() -> Self {
        Self {
            iso_code: "USD".to_string(),
            locale: "en-US".to_string(),
            to_local_rate: Decimal::ONE,
            to_reference_rate: Decimal::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_identity() {
        let config = CurrencyConfig::default();
        assert_eq!(config.iso_code, "USD");
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.to_local_rate, Decimal::ONE);
        assert_eq!(config.to_reference_rate, Decimal::ONE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_uppercases_code() {
        let config = CurrencyConfig::new("jpy", "ja-JP", dec!(110), dec!(0.0091)).unwrap();
        assert_eq!(config.iso_code, "JPY");
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        let err = CurrencyConfig::new("JPY", "ja-JP", dec!(0), dec!(1)).unwrap_err();
        assert!(matches!(err, CurrencyError::InvalidRate(r) if r == Decimal::ZERO));

        let err = CurrencyConfig::new("JPY", "ja-JP", dec!(110), dec!(-0.01)).unwrap_err();
        assert!(matches!(err, CurrencyError::InvalidRate(_)));
    }

    #[test]
    fn test_rejects_bad_code() {
        for code in ["", "US", "USDT", "U5D"] {
            let err = CurrencyConfig::new(code, "en-US", dec!(1), dec!(1)).unwrap_err();
            assert!(matches!(err, CurrencyError::InvalidConfig(_)), "{code}");
        }
    }

    #[test]
    fn test_rejects_empty_locale() {
        let err = CurrencyConfig::new("USD", "  ", dec!(1), dec!(1)).unwrap_err();
        assert!(matches!(err, CurrencyError::InvalidConfig(_)));
    }

    #[test]
    fn test_with_rates_keeps_code_and_locale() {
        let config = CurrencyConfig::default().with_rates(dec!(2), dec!(0.5));
        assert_eq!(config.iso_code, "USD");
        assert_eq!(config.to_local_rate, dec!(2));
        assert_eq!(config.to_reference_rate, dec!(0.5));
    }

    #[test]
    fn test_deserialize_rates_from_strings() {
        let config: CurrencyConfig = serde_json::from_str(
            r#"{"iso_code":"KWD","locale":"en-US","to_local_rate":"0.3","to_reference_rate":"3.25"}"#,
        )
        .unwrap();
        assert_eq!(config.to_local_rate, dec!(0.3));
        assert_eq!(config.to_reference_rate, dec!(3.25));
    }
}
