//! Engine settings management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{CurrencyError, CurrencyResult};
use crate::types::CurrencyConfig;

/// Engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Initial currency configuration.
    #[serde(default)]
    pub currency: CurrencySettings,
    /// Marker that introduces an embedded reference-currency amount.
    #[serde(default = "default_reference_marker")]
    pub reference_marker: String,
    /// How unrecognized policy tokens are handled.
    #[serde(default)]
    pub policy_tokens: PolicyTokenMode,
}

/// Initial currency configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code of the local currency.
    #[serde(default = "default_iso_code")]
    pub iso_code: String,
    /// Display locale.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Reference to local exchange rate.
    #[serde(default = "default_rate")]
    pub to_local_rate: Decimal,
    /// Local to reference exchange rate.
    #[serde(default = "default_rate")]
    pub to_reference_rate: Decimal,
}

/// Handling of policy tokens that name no known policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyTokenMode {
    /// Fall back to the default policy and log a warning.
    #[default]
    Lenient,
    /// Fail with `InvalidPolicy`.
    Strict,
}

fn default_reference_marker() -> String {
    "$".to_string()
}

fn default_iso_code() -> String {
    "USD".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_rate() -> Decimal {
    Decimal::ONE
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            iso_code: default_iso_code(),
            locale: default_locale(),
            to_local_rate: default_rate(),
            to_reference_rate: default_rate(),
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            currency: CurrencySettings::default(),
            reference_marker: default_reference_marker(),
            policy_tokens: PolicyTokenMode::default(),
        }
    }
}

impl EngineSettings {
    /// Loads settings from config files and the environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// `config/default`, `config/{RUN_MODE}`, then `LOCALCUR__*` variables
    /// (e.g. `LOCALCUR__CURRENCY__ISO_CODE=JPY`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("LOCALCUR").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Validates the currency section into a `CurrencyConfig`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` for an empty marker, otherwise whatever
    /// `CurrencyConfig::new` rejects.
    pub fn into_currency_config(&self) -> CurrencyResult<CurrencyConfig> {
        if self.reference_marker.is_empty() {
            return Err(CurrencyError::InvalidConfig(
                "reference_marker must not be empty".into(),
            ));
        }
        CurrencyConfig::new(
            self.currency.iso_code.clone(),
            self.currency.locale.clone(),
            self.currency.to_local_rate,
            self.currency.to_reference_rate,
        )
    }
}
