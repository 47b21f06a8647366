//! Property-based tests for rate conversion.
//!
//! - Round trip through a rate and its inverse
//! - Exactness against integer arithmetic

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::RateConverter;

/// Strategy to generate positive decimal amounts (0.01 to 1,000,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting with R and then with 1/R returns the original amount
    /// within decimal rounding tolerance.
    #[test]
    fn prop_round_trip_through_inverse_rate(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        let local = RateConverter::convert(amount, rate).unwrap();
        let back = RateConverter::convert(local, Decimal::ONE / rate).unwrap();
        let tolerance = Decimal::new(1, 6);
        prop_assert!(
            (back - amount).abs() <= tolerance,
            "{} -> {} -> {} drifted", amount, local, back
        );
    }

    /// The product is exact: it equals the integer product at the combined scale.
    #[test]
    fn prop_conversion_is_exact(
        cents in 1i64..100_000_000i64,
        rate_units in 1i64..100_000_000i64,
    ) {
        let result = RateConverter::convert(Decimal::new(cents, 2), Decimal::new(rate_units, 4)).unwrap();
        let expected = Decimal::new(cents * rate_units, 6);
        prop_assert_eq!(result, expected);
    }

    /// Positive inputs give positive outputs.
    #[test]
    fn prop_positive_inputs_positive_output(
        amount in positive_amount(),
        rate in positive_rate(),
    ) {
        prop_assert!(RateConverter::convert(amount, rate).unwrap() > Decimal::ZERO);
    }

    /// Non-positive rates never convert.
    #[test]
    fn prop_non_positive_rate_rejected(
        amount in positive_amount(),
        rate in -100_000i64..=0i64,
    ) {
        prop_assert!(RateConverter::convert(amount, Decimal::new(rate, 2)).is_err());
    }
}
