//! Amount inputs accepted at the engine boundary.
//!
//! Native floats are converted through their shortest round-trip decimal
//! text, so `1.005_f64` becomes exactly `1.005` and not the nearest binary
//! value `1.00499999999999989...`.

use std::str::FromStr;

use localcur_shared::{CurrencyError, CurrencyResult};
use rust_decimal::Decimal;

/// A value that can be read as a decimal amount.
pub trait ToAmount {
    /// Returns the exact decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the value is not a finite number or a
    /// numeric literal.
    fn to_amount(&self) -> CurrencyResult<Decimal>;
}

impl ToAmount for Decimal {
    fn to_amount(&self) -> CurrencyResult<Decimal> {
        Ok(*self)
    }
}

impl ToAmount for f64 {
    fn to_amount(&self) -> CurrencyResult<Decimal> {
        if !self.is_finite() {
            return Err(CurrencyError::InvalidAmount(self.to_string()));
        }
        parse_amount(&self.to_string())
    }
}

macro_rules! impl_to_amount_for_int {
    ($($t:ty),*) => {
        $(
            impl ToAmount for $t {
                fn to_amount(&self) -> CurrencyResult<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_to_amount_for_int!(i32, i64, u32, u64);

impl ToAmount for str {
    fn to_amount(&self) -> CurrencyResult<Decimal> {
        parse_amount(self)
    }
}

impl ToAmount for String {
    fn to_amount(&self) -> CurrencyResult<Decimal> {
        parse_amount(self)
    }
}

impl<T: ToAmount + ?Sized> ToAmount for &T {
    fn to_amount(&self) -> CurrencyResult<Decimal> {
        (**self).to_amount()
    }
}

/// Parses a plain (`-12.50`) or scientific (`1.2e3`) numeric literal.
///
/// # Errors
///
/// Returns `InvalidAmount` for empty or non-numeric text, or a value outside
/// the decimal range.
pub fn parse_amount(text: &str) -> CurrencyResult<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CurrencyError::InvalidAmount("empty amount".into()));
    }
    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(trimmed)
    };
    parsed.map_err(|_| CurrencyError::InvalidAmount(text.to_string()))
}
