//! Property-based tests for the engine entry points.
//!
//! - Identity updates leave conversions unchanged
//! - Zero-decimal currencies display implicit and explicit INT alike
//! - Embedded translation agrees with direct conversion

use localcur_shared::{CurrencyConfig, RoundingPolicy};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::local_currency::LocalCurrency;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn zero_decimal_currency() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop::sample::select(vec![
        ("JPY", "ja-JP"),
        ("KRW", "ko-KR"),
        ("MYR", "ms-MY"),
        ("THB", "th-TH"),
        ("IDR", "id-ID"),
        ("INR", "en-IN"),
        ("SGD", "en-SG"),
        ("HKD", "zh-HK"),
    ])
}

fn engine_for(iso_code: &str, locale: &str, rate: Decimal) -> LocalCurrency {
    LocalCurrency::builder()
        .currency(CurrencyConfig::new(iso_code, locale, rate, Decimal::ONE).unwrap())
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Updating with `cfg => cfg` changes no subsequent output.
    #[test]
    fn prop_identity_update_is_noop(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let mut engine = engine_for("EUR", "de-DE", rate);
        let before: Vec<String> = RoundingPolicy::ALL
            .into_iter()
            .map(|p| engine.to_local(amount, Some(p)).unwrap())
            .collect();

        engine.update_currency(CurrencyConfig::clone).unwrap();

        let after: Vec<String> = RoundingPolicy::ALL
            .into_iter()
            .map(|p| engine.to_local(amount, Some(p)).unwrap())
            .collect();
        prop_assert_eq!(before, after);
    }

    /// No policy and an explicit INT give the same display for zero-decimal currencies.
    #[test]
    fn prop_zero_decimal_default_displays_as_int(
        amount in positive_amount(),
        rate in positive_rate(),
        (iso_code, locale) in zero_decimal_currency(),
    ) {
        let engine = engine_for(iso_code, locale, rate);
        prop_assert_eq!(
            engine.to_local(amount, None).unwrap(),
            engine.to_local(amount, Some(RoundingPolicy::Int)).unwrap()
        );
    }

    /// A lone embedded token translates exactly like a direct conversion.
    #[test]
    fn prop_embedded_matches_direct(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let engine = engine_for("USD", "en-US", rate);
        let text = format!("Price: ${amount} each");
        let expected = format!("Price: {} each", engine.to_local(amount, None).unwrap());
        prop_assert_eq!(engine.translate_embedded_amounts(&text, None).unwrap(), expected);
    }
}
