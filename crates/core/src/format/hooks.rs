//! Caller-supplied post-processing hooks.
//!
//! Hooks run in registration order, each receiving the previous hook's
//! output. A failing hook stops the fold and its error is returned as-is.

use localcur_shared::{CurrencyConfig, CurrencyError, CurrencyResult, HookError};

/// Transforms a currency configuration after a currency change.
pub type CurrencyHook =
    Box<dyn Fn(CurrencyConfig) -> Result<CurrencyConfig, HookError> + Send + Sync>;

/// Transforms a formatted amount string.
pub type FormatHook = Box<dyn Fn(String) -> Result<String, HookError> + Send + Sync>;

/// Two independent ordered hook lists, fixed at construction.
#[derive(Default)]
pub struct HookChain {
    currency_hooks: Vec<CurrencyHook>,
    format_hooks: Vec<FormatHook>,
}

impl HookChain {
    /// Starts an empty chain.
    #[must_use]
    pub fn builder() -> HookChainBuilder {
        HookChainBuilder::default()
    }

    /// Folds `config` through every currency hook.
    pub fn fold_currency(&self, config: CurrencyConfig) -> CurrencyResult<CurrencyConfig> {
        self.currency_hooks
            .iter()
            .try_fold(config, |acc, hook| hook(acc))
            .map_err(CurrencyError::HookFailure)
    }

    /// Folds `text` through every format hook.
    pub fn fold_format(&self, text: String) -> CurrencyResult<String> {
        self.format_hooks
            .iter()
            .try_fold(text, |acc, hook| hook(acc))
            .map_err(CurrencyError::HookFailure)
    }

    /// Number of currency hooks.
    #[must_use]
    pub fn currency_hook_count(&self) -> usize {
        self.currency_hooks.len()
    }

    /// Number of format hooks.
    #[must_use]
    pub fn format_hook_count(&self) -> usize {
        self.format_hooks.len()
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("currency_hooks", &self.currency_hooks.len())
            .field("format_hooks", &self.format_hooks.len())
            .finish()
    }
}

/// Builder for [`HookChain`]. Call order is fold order.
#[derive(Default)]
pub struct HookChainBuilder {
    chain: HookChain,
}

impl HookChainBuilder {
    /// Appends a fallible currency hook.
    #[must_use]
    pub fn currency_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(CurrencyConfig) -> Result<CurrencyConfig, HookError> + Send + Sync + 'static,
    {
        self.chain.currency_hooks.push(Box::new(hook));
        self
    }

    /// Appends a currency hook that cannot fail.
    #[must_use]
    pub fn currency_map<F>(self, hook: F) -> Self
    where
        F: Fn(CurrencyConfig) -> CurrencyConfig + Send + Sync + 'static,
    {
        self.currency_hook(move |config| Ok(hook(config)))
    }

    /// Appends a fallible format hook.
    #[must_use]
    pub fn format_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(String) -> Result<String, HookError> + Send + Sync + 'static,
    {
        self.chain.format_hooks.push(Box::new(hook));
        self
    }

    /// Appends a format hook that cannot fail.
    #[must_use]
    pub fn format_map<F>(self, hook: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.format_hook(move |text| Ok(hook(text)))
    }

    /// Finishes the chain.
    #[must_use]
    pub fn build(self) -> HookChain {
        self.chain
    }
}
