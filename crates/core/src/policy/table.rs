//! Compiled-in per-currency policy overrides.

use localcur_shared::RoundingPolicy;

/// Currencies displayed without minor units unless the caller asks otherwise.
const ZERO_DECIMAL_CURRENCIES: &[&str] = &[
    "MYR", "THB", "PHP", "HKD", "JPY", "KRW", "INR", "CLP", "SGD", "MVR", "TWD", "IDR",
];

/// Currencies whose ISO minor unit is three digits.
const THREE_DECIMAL_CURRENCIES: &[&str] = &["KWD", "OMR", "BHD", "TND", "JOD", "LYD"];

/// Read-only policy overrides keyed by ISO code.
#[derive(Debug, Clone, Copy)]
pub struct PolicyOverrideTable {
    /// Policy used when the caller requests none, by currency set.
    implicit: &'static [(RoundingPolicy, &'static [&'static str])],
    /// Market rules that override the caller unless `Original` is requested.
    forced: &'static [(&'static str, RoundingPolicy)],
    /// Currencies clamped to two decimals.
    three_decimal: &'static [&'static str],
}

static STANDARD: PolicyOverrideTable = PolicyOverrideTable {
    implicit: &[(RoundingPolicy::Int, ZERO_DECIMAL_CURRENCIES)],
    // Local e-commerce in Pakistan quotes whole rupees.
    forced: &[("PKR", RoundingPolicy::Int)],
    three_decimal: THREE_DECIMAL_CURRENCIES,
};

impl PolicyOverrideTable {
    /// Returns the compiled-in table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a table from explicit sets.
    #[must_use]
    pub const fn new(
        implicit: &'static [(RoundingPolicy, &'static [&'static str])],
        forced: &'static [(&'static str, RoundingPolicy)],
        three_decimal: &'static [&'static str],
    ) -> Self {
        Self {
            implicit,
            forced,
            three_decimal,
        }
    }

    /// Policy applied when the caller requests none.
    #[must_use]
    pub fn implicit_policy(&self, iso_code: &str) -> Option<RoundingPolicy> {
        self.implicit
            .iter()
            .find(|(_, codes)| contains(codes, iso_code))
            .map(|(policy, _)| *policy)
    }

    /// Policy forced by a market-specific rule.
    #[must_use]
    pub fn forced_policy(&self, iso_code: &str) -> Option<RoundingPolicy> {
        self.forced
            .iter()
            .find(|(code, _)| code.eq_ignore_ascii_case(iso_code))
            .map(|(_, policy)| *policy)
    }

    /// Returns true if the currency is clamped to two decimals.
    #[must_use]
    pub fn is_three_decimal(&self, iso_code: &str) -> bool {
        contains(self.three_decimal, iso_code)
    }
}

impl Default for PolicyOverrideTable {
    fn default() -> Self {
        STANDARD
    }
}

fn contains(codes: &[&str], iso_code: &str) -> bool {
    codes.iter().any(|code| code.eq_ignore_ascii_case(iso_code))
}
