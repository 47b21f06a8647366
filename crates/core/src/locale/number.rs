//! Locale-aware monetary number rendering.
//!
//! The number itself is laid out by ICU's decimal formatter (separators,
//! grouping strategy, digits). The currency symbol is placed around it
//! from the compiled-in tables.

use fixed_decimal::Decimal as FixedDecimal;
use icu::decimal::options::DecimalFormatterOptions;
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale as IcuLocale;
use localcur_shared::{CurrencyError, CurrencyResult};
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

use super::data::{
    CurrencyInfo, LocaleData, ROOT_LOCALE, SymbolPlacement, currency_info, local_symbol,
    locale_data,
};
use super::tag::LocaleTag;

/// Fraction digit bounds for one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionDigits {
    /// Digits always shown, padding with zeros.
    pub min: u32,
    /// Digits shown at most, rounding half away from zero.
    pub max: u32,
}

impl FractionDigits {
    /// Exactly `digits` fraction digits.
    #[must_use]
    pub const fn exact(digits: u32) -> Self {
        Self {
            min: digits,
            max: digits,
        }
    }

    /// At least `min` digits, at most `max(min, natural)`.
    #[must_use]
    pub const fn at_least(min: u32, natural: u32) -> Self {
        Self {
            min,
            max: if natural > min { natural } else { min },
        }
    }
}

/// Formats amounts of one currency in one locale.
pub struct MoneyFormatter {
    decimal: DecimalFormatter,
    layout: &'static LocaleData,
    currency: &'static CurrencyInfo,
    symbol: &'static str,
}

impl MoneyFormatter {
    /// Builds a formatter for a locale tag and ISO code.
    ///
    /// Digits follow the tag's numbering system, or the locale's default
    /// when the tag names none. Locales without a symbol layout entry use
    /// the root layout.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if ICU rejects the tag or has no decimal data.
    /// - `UnsupportedCurrency` if the ISO code is not in the currency table.
    pub fn new(tag: &LocaleTag, iso_code: &str) -> CurrencyResult<Self> {
        let currency = currency_info(iso_code)
            .ok_or_else(|| CurrencyError::UnsupportedCurrency(iso_code.to_string()))?;

        let icu_locale: IcuLocale = tag
            .to_string()
            .parse()
            .map_err(|_| CurrencyError::InvalidConfig(format!("unsupported locale tag {tag}")))?;
        let decimal = DecimalFormatter::try_new(
            DecimalFormatterPreferences::from(&icu_locale),
            DecimalFormatterOptions::default(),
        )
        .map_err(|e| CurrencyError::InvalidConfig(format!("no decimal data for {tag}: {e}")))?;

        let chain = tag.fallback_chain();
        let layout = chain
            .iter()
            .find_map(|key| locale_data(key))
            .unwrap_or_else(|| {
                warn!(locale = %tag, "Unknown locale, using root symbol layout");
                &ROOT_LOCALE
            });
        let symbol = chain
            .iter()
            .find_map(|key| local_symbol(key, currency.code))
            .unwrap_or(currency.symbol);

        Ok(Self {
            decimal,
            layout,
            currency,
            symbol,
        })
    }

    /// The currency's default fraction digits.
    #[must_use]
    pub const fn natural_digits(&self) -> u32 {
        self.currency.minor_units
    }

    /// Renders `value` with the given fraction digits.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the rounded value cannot be handed to the
    /// decimal formatter.
    pub fn format(&self, value: Decimal, digits: FractionDigits) -> CurrencyResult<String> {
        let rounded = value.round_dp_with_strategy(digits.max, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();

        let text = rounded.abs().to_string();
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let mut fraction = frac_part.trim_end_matches('0').to_string();
        while fraction.len() < digits.min as usize {
            fraction.push('0');
        }
        let plain = if fraction.is_empty() {
            int_part.to_string()
        } else {
            format!("{int_part}.{fraction}")
        };

        // Trailing zeros in the literal are kept as displayed fraction digits.
        let fixed = FixedDecimal::try_from_str(&plain)
            .map_err(|_| CurrencyError::InvalidAmount(plain.clone()))?;
        let number = self.decimal.format(&fixed).to_string();

        let mut out = String::with_capacity(number.len() + self.symbol.len() + 3);
        if negative {
            out.push('-');
        }
        match self.layout.placement {
            SymbolPlacement::Prefix => {
                out.push_str(self.symbol);
                if self.symbol.chars().last().is_some_and(char::is_alphabetic) {
                    out.push('\u{a0}');
                }
                out.push_str(&number);
            }
            SymbolPlacement::PrefixSpaced => {
                out.push_str(self.symbol);
                out.push('\u{a0}');
                out.push_str(&number);
            }
            SymbolPlacement::Suffix => {
                out.push_str(&number);
                out.push('\u{a0}');
                out.push_str(self.symbol);
            }
        }
        Ok(out)
    }
}

impl std::fmt::Debug for MoneyFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoneyFormatter")
            .field("layout", &self.layout.key)
            .field("currency", &self.currency.code)
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}
