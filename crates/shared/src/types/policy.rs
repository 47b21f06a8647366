//! Rounding policies for display amounts.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CurrencyError;

/// How a converted amount is rounded before it is displayed.
///
/// The string tokens (`as_str`) are stable and accepted by `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Leave rounding to the formatter, at the currency's natural precision.
    #[default]
    Default,
    /// Round to two decimals, half away from zero.
    Rounding,
    /// Keep two decimals, rounding any remainder up.
    Carry,
    /// Keep two decimals, discarding any remainder.
    Truncation,
    /// Round to an integer, half away from zero.
    Int,
    /// Ceiling to an integer.
    IntCarry,
    /// Floor to an integer.
    IntTruncation,
    /// Round to two decimals first, then ceiling to an integer.
    IntFixed,
    /// Round to two decimals first, then floor to an integer.
    IntRt,
    /// Raw value, no rounding and no locale formatting.
    Original,
}

/// Groups policies by the fraction digits the formatter enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyFamily {
    /// The currency's natural minor units.
    Natural,
    /// At least two fraction digits.
    Cents,
    /// Zero fraction digits.
    Integer,
    /// Skips locale formatting.
    Raw,
}

impl RoundingPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Default,
        Self::Rounding,
        Self::Carry,
        Self::Truncation,
        Self::Int,
        Self::IntCarry,
        Self::IntTruncation,
        Self::IntFixed,
        Self::IntRt,
        Self::Original,
    ];

    /// Returns the policy token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Rounding => "rounding",
            Self::Carry => "carry",
            Self::Truncation => "truncation",
            Self::Int => "int",
            Self::IntCarry => "int_carry",
            Self::IntTruncation => "int_truncation",
            Self::IntFixed => "int_fixed",
            Self::IntRt => "int_rt",
            Self::Original => "original",
        }
    }

    /// Returns the fraction-digit family of this policy.
    #[must_use]
    pub const fn family(self) -> PolicyFamily {
        match self {
            Self::Default => PolicyFamily::Natural,
            Self::Rounding | Self::Carry | Self::Truncation => PolicyFamily::Cents,
            Self::Int | Self::IntCarry | Self::IntTruncation | Self::IntFixed | Self::IntRt => {
                PolicyFamily::Integer
            }
            Self::Original => PolicyFamily::Raw,
        }
    }

    /// Returns true for the `INT_*` family.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self.family(), PolicyFamily::Integer)
    }

    /// Returns true if the policy changes the number of displayed decimals
    /// away from integers, i.e. neither `Original` nor an `INT_*` policy.
    #[must_use]
    pub const fn affects_decimals(self) -> bool {
        matches!(self.family(), PolicyFamily::Natural | PolicyFamily::Cents)
    }

    /// Parses a token, degrading unknown tokens to `Default`.
    #[must_use]
    pub fn from_token_lenient(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            warn!(token, "Unknown rounding policy token, using default");
            Self::Default
        })
    }
}

impl std::fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoundingPolicy {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == token)
            .ok_or_else(|| CurrencyError::InvalidPolicy(s.to_string()))
    }
}
