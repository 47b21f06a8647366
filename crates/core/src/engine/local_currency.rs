//! The local-currency engine.

use localcur_shared::{
    CurrencyConfig, CurrencyError, CurrencyResult, EngineSettings, PolicyTokenMode, RoundingPolicy,
};
use tracing::{debug, info};

use super::embedded::replace_embedded;
use crate::currency::{RateConverter, ToAmount, parse_amount};
use crate::format::{HookChain, PolicyFormatter};
use crate::locale::{LocaleTag, currency_info};
use crate::policy::PolicyOverrideTable;

/// Called with the installed configuration after every currency change.
pub type CurrencyObserver = Box<dyn Fn(&CurrencyConfig) + Send + Sync>;

/// Replacement for the active configuration.
pub enum CurrencyUpdate {
    /// Install this configuration.
    Replace(CurrencyConfig),
    /// Derive the new configuration from the current one.
    Update(Box<dyn FnOnce(&CurrencyConfig) -> CurrencyConfig + Send>),
}

impl From<CurrencyConfig> for CurrencyUpdate {
    fn from(config: CurrencyConfig) -> Self {
        Self::Replace(config)
    }
}

impl std::fmt::Debug for CurrencyUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Replace(config) => f.debug_tuple("Replace").field(config).finish(),
            Self::Update(_) => f.write_str("Update(..)"),
        }
    }
}

/// Converts and formats amounts for one active currency configuration.
///
/// All methods are synchronous. `set_currency` takes `&mut self`, so a
/// multi-threaded host serializes changes against reads with its own lock.
pub struct LocalCurrency {
    currency: CurrencyConfig,
    formatter: PolicyFormatter,
    reference_marker: String,
    policy_tokens: PolicyTokenMode,
    observers: Vec<CurrencyObserver>,
}

impl LocalCurrency {
    /// Starts a builder with the default configuration.
    #[must_use]
    pub fn builder() -> LocalCurrencyBuilder {
        LocalCurrencyBuilder::default()
    }

    /// Builds an engine from loaded settings.
    pub fn from_settings(settings: &EngineSettings, hooks: HookChain) -> CurrencyResult<Self> {
        Self::builder()
            .currency(settings.into_currency_config()?)
            .reference_marker(settings.reference_marker.clone())
            .policy_tokens(settings.policy_tokens)
            .hooks(hooks)
            .build()
    }

    /// The active configuration.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyConfig {
        &self.currency
    }

    /// The formatter, with its override table and hooks.
    #[must_use]
    pub const fn formatter(&self) -> &PolicyFormatter {
        &self.formatter
    }

    /// The embedded-amount marker.
    #[must_use]
    pub fn reference_marker(&self) -> &str {
        &self.reference_marker
    }

    /// Converts a reference-currency amount and formats it locally.
    pub fn to_local(
        &self,
        amount: impl ToAmount,
        policy: Option<RoundingPolicy>,
    ) -> CurrencyResult<String> {
        let local = RateConverter::to_local(&self.currency, amount)?;
        self.formatter.format(&self.currency, local, policy)
    }

    /// Converts a local-currency amount to the reference currency and
    /// formats it with the active configuration.
    pub fn to_reference(
        &self,
        amount: impl ToAmount,
        policy: Option<RoundingPolicy>,
    ) -> CurrencyResult<String> {
        let reference = RateConverter::to_reference(&self.currency, amount)?;
        self.formatter.format(&self.currency, reference, policy)
    }

    /// Replaces each marker-prefixed amount in `text` with its local display.
    ///
    /// Text without the marker is returned unchanged.
    pub fn translate_embedded_amounts(
        &self,
        text: &str,
        policy: Option<RoundingPolicy>,
    ) -> CurrencyResult<String> {
        replace_embedded(text, &self.reference_marker, |number| {
            self.to_local(parse_amount(number)?, policy)
        })
    }

    /// Resolves a policy token according to the configured token mode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` for an unknown token in strict mode.
    pub fn policy_from_token(&self, token: &str) -> CurrencyResult<RoundingPolicy> {
        match self.policy_tokens {
            PolicyTokenMode::Strict => token.parse(),
            PolicyTokenMode::Lenient => Ok(RoundingPolicy::from_token_lenient(token)),
        }
    }

    /// [`Self::to_local`] with an optional policy token.
    pub fn to_local_with_token(
        &self,
        amount: impl ToAmount,
        token: Option<&str>,
    ) -> CurrencyResult<String> {
        let policy = self.policy_option(token)?;
        self.to_local(amount, policy)
    }

    /// [`Self::to_reference`] with an optional policy token.
    pub fn to_reference_with_token(
        &self,
        amount: impl ToAmount,
        token: Option<&str>,
    ) -> CurrencyResult<String> {
        let policy = self.policy_option(token)?;
        self.to_reference(amount, policy)
    }

    /// [`Self::translate_embedded_amounts`] with an optional policy token.
    pub fn translate_with_token(&self, text: &str, token: Option<&str>) -> CurrencyResult<String> {
        let policy = self.policy_option(token)?;
        self.translate_embedded_amounts(text, policy)
    }

    /// Replaces the active configuration.
    ///
    /// The new configuration is validated and installed, folded through the
    /// currency hooks, and then passed to every observer. The fold's
    /// output is not installed. Observers are notified even when a hook
    /// fails; the hook's error is returned afterwards.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`, `InvalidRate`, or `UnsupportedCurrency` if the new
    ///   configuration is rejected; the active configuration is unchanged.
    /// - `HookFailure` if a currency hook fails; the new configuration stays
    ///   installed.
    pub fn set_currency(&mut self, update: impl Into<CurrencyUpdate>) -> CurrencyResult<()> {
        let next = match update.into() {
            CurrencyUpdate::Replace(config) => config,
            CurrencyUpdate::Update(updater) => updater(&self.currency),
        };
        validate_currency(&next)?;

        info!(
            iso_code = %next.iso_code,
            locale = %next.locale,
            to_local_rate = %next.to_local_rate,
            to_reference_rate = %next.to_reference_rate,
            "Currency changed"
        );
        self.currency = next;

        let folded = self.formatter.hooks().fold_currency(self.currency.clone());
        if let Ok(folded) = &folded {
            if *folded != self.currency {
                debug!(
                    folded_iso_code = %folded.iso_code,
                    "Currency hook output differs from installed configuration and is discarded"
                );
            }
        }

        for observer in &self.observers {
            observer(&self.currency);
        }

        folded.map(|_| ())
    }

    /// Derives the new configuration from the current one.
    pub fn update_currency<F>(&mut self, updater: F) -> CurrencyResult<()>
    where
        F: FnOnce(&CurrencyConfig) -> CurrencyConfig + Send + 'static,
    {
        self.set_currency(CurrencyUpdate::Update(Box::new(updater)))
    }

    /// Registers a change observer.
    pub fn on_currency_change<F>(&mut self, observer: F)
    where
        F: Fn(&CurrencyConfig) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn policy_option(&self, token: Option<&str>) -> CurrencyResult<Option<RoundingPolicy>> {
        token.map(|t| self.policy_from_token(t)).transpose()
    }
}

impl std::fmt::Debug for LocalCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalCurrency")
            .field("currency", &self.currency)
            .field("formatter", &self.formatter)
            .field("reference_marker", &self.reference_marker)
            .field("policy_tokens", &self.policy_tokens)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Checks a configuration against the invariants and the locale layer.
fn validate_currency(config: &CurrencyConfig) -> CurrencyResult<()> {
    config.validate()?;
    LocaleTag::parse(&config.locale)?;
    if currency_info(&config.iso_code).is_none() {
        return Err(CurrencyError::UnsupportedCurrency(config.iso_code.clone()));
    }
    Ok(())
}

/// Builder for [`LocalCurrency`].
pub struct LocalCurrencyBuilder {
    currency: CurrencyConfig,
    table: PolicyOverrideTable,
    hooks: HookChain,
    reference_marker: String,
    policy_tokens: PolicyTokenMode,
    observers: Vec<CurrencyObserver>,
}

impl Default for LocalCurrencyBuilder {
    fn default() -> Self {
        Self {
            currency: CurrencyConfig::default(),
            table: PolicyOverrideTable::default(),
            hooks: HookChain::default(),
            reference_marker: "$".to_string(),
            policy_tokens: PolicyTokenMode::default(),
            observers: Vec::new(),
        }
    }
}

impl LocalCurrencyBuilder {
    /// Sets the initial configuration.
    #[must_use]
    pub fn currency(mut self, currency: CurrencyConfig) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the policy override table.
    #[must_use]
    pub fn table(mut self, table: PolicyOverrideTable) -> Self {
        self.table = table;
        self
    }

    /// Sets the hook chain.
    #[must_use]
    pub fn hooks(mut self, hooks: HookChain) -> Self {
        self.hooks = hooks;
        self
    }

    /// Sets the embedded-amount marker.
    #[must_use]
    pub fn reference_marker(mut self, marker: impl Into<String>) -> Self {
        self.reference_marker = marker.into();
        self
    }

    /// Sets the policy token mode.
    #[must_use]
    pub fn policy_tokens(mut self, mode: PolicyTokenMode) -> Self {
        self.policy_tokens = mode;
        self
    }

    /// Registers a change observer.
    #[must_use]
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&CurrencyConfig) + Send + Sync + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Validates and builds the engine.
    pub fn build(self) -> CurrencyResult<LocalCurrency> {
        validate_currency(&self.currency)?;
        if self.reference_marker.is_empty() {
            return Err(CurrencyError::InvalidConfig(
                "reference_marker must not be empty".into(),
            ));
        }
        Ok(LocalCurrency {
            currency: self.currency,
            formatter: PolicyFormatter::new(self.table, self.hooks),
            reference_marker: self.reference_marker,
            policy_tokens: self.policy_tokens,
            observers: self.observers,
        })
    }
}
