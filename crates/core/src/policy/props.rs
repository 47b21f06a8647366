//! Property-based tests for rounding policies.
//!
//! - Carry never falls below truncation
//! - Fix-then-carry never falls below fix-then-floor
//! - Integer policies produce integers, cent policies produce cents

use localcur_shared::RoundingPolicy;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::rounding::apply_policy;
use super::table::PolicyOverrideTable;

/// Strategy to generate signed amounts with up to 6 decimal places.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

fn has_sub_cent_remainder(amount: Decimal) -> bool {
    amount.round_dp(2) != amount
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// CARRY(x) >= TRUNCATION(x), equal only without a sub-cent remainder.
    #[test]
    fn prop_carry_not_below_truncation(amount in any_amount()) {
        let carry = apply_policy(RoundingPolicy::Carry, amount);
        let truncation = apply_policy(RoundingPolicy::Truncation, amount);
        prop_assert!(carry >= truncation);
        prop_assert_eq!(carry == truncation, !has_sub_cent_remainder(amount));
    }

    /// INT_FIXED(x) >= INT_RT(x).
    #[test]
    fn prop_int_fixed_not_below_int_rt(amount in any_amount()) {
        prop_assert!(
            apply_policy(RoundingPolicy::IntFixed, amount)
                >= apply_policy(RoundingPolicy::IntRt, amount)
        );
    }

    /// Integer policies always yield whole numbers within one unit of x.
    #[test]
    fn prop_integer_policies_yield_integers(amount in any_amount()) {
        for policy in RoundingPolicy::ALL.into_iter().filter(|p| p.is_integer()) {
            let result = apply_policy(policy, amount);
            prop_assert_eq!(result, result.trunc(), "{} gave {}", policy, result);
            prop_assert!((result - amount).abs() <= Decimal::ONE);
        }
    }

    /// Cent policies stay within one cent of x and carry no sub-cent digits.
    #[test]
    fn prop_cent_policies_yield_cents(amount in any_amount()) {
        for policy in [RoundingPolicy::Rounding, RoundingPolicy::Carry, RoundingPolicy::Truncation] {
            let result = apply_policy(policy, amount);
            prop_assert!(!has_sub_cent_remainder(result));
            prop_assert!((result - amount).abs() <= Decimal::new(1, 2));
        }
    }

    /// Zero-decimal currencies resolve DEFAULT-by-absence to the same
    /// numeric output as an explicit INT request.
    #[test]
    fn prop_zero_decimal_default_matches_int(
        amount in any_amount(),
        index in 0usize..12,
    ) {
        let table = PolicyOverrideTable::standard();
        let codes = ["MYR", "THB", "PHP", "HKD", "JPY", "KRW", "INR", "CLP", "SGD", "MVR", "TWD", "IDR"];
        let code = codes[index];
        let implicit = apply_policy(table.resolve(code, None), amount);
        let explicit = apply_policy(table.resolve(code, Some(RoundingPolicy::Int)), amount);
        prop_assert_eq!(implicit, explicit);
    }
}
