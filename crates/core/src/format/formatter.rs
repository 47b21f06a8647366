//! Policy-aware display formatting.

use localcur_shared::{CurrencyConfig, CurrencyResult, PolicyFamily, RoundingPolicy};
use rust_decimal::Decimal;

use super::hooks::HookChain;
use crate::locale::{FractionDigits, LocaleTag, MoneyFormatter};
use crate::policy::{PolicyOverrideTable, apply_policy};

/// Numbering system forced onto every locale so digits stay Latin.
const LATIN_NUMBERING: &str = "latn";

/// Resolves, applies, and renders rounding policies.
#[derive(Debug, Default)]
pub struct PolicyFormatter {
    table: PolicyOverrideTable,
    hooks: HookChain,
}

impl PolicyFormatter {
    /// Creates a formatter over an override table and hook chain.
    #[must_use]
    pub fn new(table: PolicyOverrideTable, hooks: HookChain) -> Self {
        Self { table, hooks }
    }

    /// The hook chain.
    #[must_use]
    pub const fn hooks(&self) -> &HookChain {
        &self.hooks
    }

    /// Formats `amount` for display in `config`'s currency and locale.
    ///
    /// Resolves the effective policy, applies it, renders the result, then
    /// folds the string through the format hooks.
    ///
    /// # Errors
    ///
    /// - `UnsupportedCurrency` if the ISO code is unknown.
    /// - `InvalidConfig` if the locale tag is malformed.
    /// - `HookFailure` if a format hook fails.
    pub fn format(
        &self,
        config: &CurrencyConfig,
        amount: Decimal,
        requested: Option<RoundingPolicy>,
    ) -> CurrencyResult<String> {
        let rendered = self.render(config, amount, requested)?;
        self.hooks.fold_format(rendered)
    }

    /// Formats without running the format hooks.
    pub fn render(
        &self,
        config: &CurrencyConfig,
        amount: Decimal,
        requested: Option<RoundingPolicy>,
    ) -> CurrencyResult<String> {
        let policy = self.table.resolve(&config.iso_code, requested);
        let value = apply_policy(policy, amount);

        let tag = LocaleTag::parse(&config.locale)?.with_numbering(LATIN_NUMBERING);
        let formatter = MoneyFormatter::new(&tag, &config.iso_code)?;
        let digits = match policy.family() {
            PolicyFamily::Raw => return Ok(value.normalize().to_string()),
            PolicyFamily::Natural => FractionDigits::exact(formatter.natural_digits()),
            PolicyFamily::Cents => FractionDigits::at_least(2, formatter.natural_digits()),
            PolicyFamily::Integer => FractionDigits::exact(0),
        };
        formatter.format(value, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localcur_shared::CurrencyError;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn config(iso_code: &str, locale: &str) -> CurrencyConfig {
        CurrencyConfig::new(iso_code, locale, dec!(1), dec!(1)).unwrap()
    }

    fn render(iso_code: &str, amount: Decimal, policy: Option<RoundingPolicy>) -> String {
        PolicyFormatter::default()
            .format(&config(iso_code, "en-US"), amount, policy)
            .unwrap()
    }

    #[rstest]
    #[case(None, "$1,234.57")]
    #[case(Some(RoundingPolicy::Default), "$1,234.57")]
    #[case(Some(RoundingPolicy::Rounding), "$1,234.57")]
    #[case(Some(RoundingPolicy::Carry), "$1,234.57")]
    #[case(Some(RoundingPolicy::Truncation), "$1,234.56")]
    #[case(Some(RoundingPolicy::Int), "$1,235")]
    #[case(Some(RoundingPolicy::IntCarry), "$1,235")]
    #[case(Some(RoundingPolicy::IntTruncation), "$1,234")]
    #[case(Some(RoundingPolicy::IntFixed), "$1,235")]
    #[case(Some(RoundingPolicy::IntRt), "$1,234")]
    #[case(Some(RoundingPolicy::Original), "1234.5678")]
    fn test_usd_policies(#[case] policy: Option<RoundingPolicy>, #[case] expected: &str) {
        assert_eq!(render("USD", dec!(1234.5678), policy), expected);
    }

    #[test]
    fn test_jpy_defaults_to_integer() {
        assert_eq!(render("JPY", dec!(110.55), None), "¥111");
        assert_eq!(
            render("JPY", dec!(110.55), Some(RoundingPolicy::Rounding)),
            "¥110.55"
        );
    }

    #[test]
    fn test_kwd_clamped_to_two_decimals() {
        assert_eq!(
            render("KWD", dec!(3.0), Some(RoundingPolicy::Rounding)),
            "KD\u{a0}3.00"
        );
        assert_eq!(
            render("KWD", dec!(3.4567), Some(RoundingPolicy::Carry)),
            "KD\u{a0}3.46"
        );
        assert_eq!(render("KWD", dec!(3.4567), None), "KD\u{a0}3.46");
    }

    #[test]
    fn test_kwd_original_keeps_all_digits() {
        assert_eq!(
            render("KWD", dec!(3.4567), Some(RoundingPolicy::Original)),
            "3.4567"
        );
    }

    #[test]
    fn test_pkr_forced_integer() {
        assert_eq!(
            render("PKR", dec!(250.75), Some(RoundingPolicy::Truncation)),
            "PKR\u{a0}251"
        );
        assert_eq!(
            render("PKR", dec!(250.75), Some(RoundingPolicy::Original)),
            "250.75"
        );
    }

    #[test]
    fn test_original_strips_trailing_zeros() {
        assert_eq!(render("USD", dec!(3.000), Some(RoundingPolicy::Original)), "3");
    }

    #[test]
    fn test_locale_is_respected() {
        let formatter = PolicyFormatter::default();
        let text = formatter
            .format(&config("EUR", "de-DE"), dec!(1234.5), None)
            .unwrap();
        assert_eq!(text, "1.234,50\u{a0}€");
    }

    #[rstest]
    #[case("ar-EG", "EGP")]
    #[case("fa-IR", "USD")]
    #[case("bn-BD", "BDT")]
    #[case("hi-IN-u-nu-deva", "INR")]
    fn test_digits_are_latin_in_every_locale(#[case] locale: &str, #[case] iso_code: &str) {
        let text = PolicyFormatter::default()
            .format(
                &config(iso_code, locale),
                dec!(1234.5),
                Some(RoundingPolicy::Rounding),
            )
            .unwrap();
        assert!(
            text.chars().all(|c| !c.is_numeric() || c.is_ascii_digit()),
            "{text}"
        );
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, "123450", "{text}");
    }

    #[test]
    fn test_malformed_locale() {
        let err = PolicyFormatter::default()
            .format(&config("USD", "-"), dec!(1), None)
            .unwrap_err();
        assert!(matches!(err, CurrencyError::InvalidConfig(_)));
    }

    #[test]
    fn test_unsupported_currency() {
        let err = PolicyFormatter::default()
            .format(&config("XYZ", "en-US"), dec!(1), None)
            .unwrap_err();
        assert!(matches!(err, CurrencyError::UnsupportedCurrency(_)));

        let err = PolicyFormatter::default()
            .format(&config("XYZ", "en-US"), dec!(1), Some(RoundingPolicy::Original))
            .unwrap_err();
        assert!(matches!(err, CurrencyError::UnsupportedCurrency(_)));
    }

    #[test]
    fn test_format_hooks_run_after_rendering() {
        let hooks = HookChain::builder()
            .format_map(|s| s.replace('\u{a0}', " "))
            .format_map(|s| format!("≈ {s}"))
            .build();
        let formatter = PolicyFormatter::new(*PolicyOverrideTable::standard(), hooks);
        let text = formatter
            .format(&config("KWD", "en-US"), dec!(3), Some(RoundingPolicy::Rounding))
            .unwrap();
        assert_eq!(text, "≈ KD 3.00");

        let raw = formatter
            .render(&config("KWD", "en-US"), dec!(3), Some(RoundingPolicy::Rounding))
            .unwrap();
        assert_eq!(raw, "KD\u{a0}3.00");
    }

    #[test]
    fn test_format_hooks_also_see_original() {
        let hooks = HookChain::builder().format_map(|s| format!("{s} USD")).build();
        let formatter = PolicyFormatter::new(PolicyOverrideTable::default(), hooks);
        let text = formatter
            .format(&config("USD", "en-US"), dec!(2.50), Some(RoundingPolicy::Original))
            .unwrap();
        assert_eq!(text, "2.5 USD");
    }

    #[test]
    fn test_hook_failure_propagates() {
        let hooks = HookChain::builder()
            .format_hook(|_| Err("glyph missing".into()))
            .build();
        let formatter = PolicyFormatter::new(PolicyOverrideTable::default(), hooks);
        let err = formatter
            .format(&config("USD", "en-US"), dec!(1), None)
            .unwrap_err();
        assert!(err.is_hook_failure());
    }
}
