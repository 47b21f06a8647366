//! Rounding rules per policy.
//!
//! All rules work on `Decimal` directly. Cent-level ceiling and floor use
//! directed rounding at two decimals, which is exact and equivalent to
//! scaling by 100, taking the integer ceiling or floor, and scaling back.

use localcur_shared::RoundingPolicy;
use rust_decimal::{Decimal, RoundingStrategy};

/// Half-up at two decimals, used by `Rounding` and the two-step integer rules.
fn fix_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies `policy` to a raw converted amount.
///
/// `Default` and `Original` return the amount unchanged.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use localcur_core::policy::apply_policy;
/// use localcur_shared::RoundingPolicy;
///
/// assert_eq!(apply_policy(RoundingPolicy::Carry, dec!(9.999)), dec!(10.00));
/// assert_eq!(apply_policy(RoundingPolicy::IntRt, dec!(2.995)), dec!(3));
/// ```
#[must_use]
pub fn apply_policy(policy: RoundingPolicy, amount: Decimal) -> Decimal {
    match policy {
        RoundingPolicy::Default | RoundingPolicy::Original => amount,
        RoundingPolicy::Rounding => fix_cents(amount),
        RoundingPolicy::Carry => {
            amount.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
        }
        RoundingPolicy::Truncation => {
            amount.round_dp_with_strategy(2, RoundingStrategy::ToNegativeInfinity)
        }
        RoundingPolicy::Int => {
            amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
        RoundingPolicy::IntCarry => amount.ceil(),
        RoundingPolicy::IntTruncation => amount.floor(),
        RoundingPolicy::IntFixed => fix_cents(amount).ceil(),
        RoundingPolicy::IntRt => fix_cents(amount).floor(),
    }
}
