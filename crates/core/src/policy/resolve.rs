//! Effective policy resolution.
//!
//! Precedence, applied in order:
//! 1. The requested policy, else the table's implicit policy, else `Default`
//! 2. A forced market rule, unless `Original` was requested
//! 3. Three-decimal currencies clamp decimal-affecting policies to `Rounding`

use localcur_shared::RoundingPolicy;
use tracing::debug;

use super::table::PolicyOverrideTable;

impl PolicyOverrideTable {
    /// Resolves the policy actually applied for `iso_code`.
    ///
    /// The clamp also covers an absent request: KWD with no policy resolves
    /// to `Rounding` and shows two decimals, not its three ISO minor units.
    ///
    /// # Example
    ///
    /// ```
    /// use localcur_core::policy::PolicyOverrideTable;
    /// use localcur_shared::RoundingPolicy;
    ///
    /// let table = PolicyOverrideTable::standard();
    /// assert_eq!(table.resolve("JPY", None), RoundingPolicy::Int);
    /// assert_eq!(table.resolve("KWD", Some(RoundingPolicy::Carry)), RoundingPolicy::Rounding);
    /// ```
    #[must_use]
    pub fn resolve(&self, iso_code: &str, requested: Option<RoundingPolicy>) -> RoundingPolicy {
        let mut effective = requested
            .or_else(|| self.implicit_policy(iso_code))
            .unwrap_or_default();

        if requested != Some(RoundingPolicy::Original) {
            if let Some(forced) = self.forced_policy(iso_code) {
                effective = forced;
            }
        }

        if self.is_three_decimal(iso_code) && effective.affects_decimals() {
            effective = RoundingPolicy::Rounding;
        }

        debug!(
            iso_code,
            requested = requested.map(RoundingPolicy::as_str),
            effective = effective.as_str(),
            "Resolved rounding policy"
        );
        effective
    }
}
