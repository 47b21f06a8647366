//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use localcur_shared::{EngineSettings, PolicyTokenMode};

/// Localcur - convert and display reference-currency amounts locally
#[derive(Parser, Debug)]
#[command(name = "localcur")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Commands,
}

/// Settings overrides applied on top of config files and environment.
#[derive(Args, Debug, Default)]
pub struct Overrides {
    /// ISO 4217 code of the local currency
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Display locale (e.g. ja-JP)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Reference to local exchange rate
    #[arg(long, global = true)]
    pub rate: Option<String>,

    /// Local to reference exchange rate
    #[arg(long, global = true)]
    pub reference_rate: Option<String>,

    /// Marker introducing embedded amounts
    #[arg(long, global = true)]
    pub marker: Option<String>,

    /// Reject unknown policy tokens instead of falling back
    #[arg(long, global = true)]
    pub strict: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a reference amount and display it locally
    Local(AmountArgs),

    /// Convert a local amount back to the reference currency
    Reference(AmountArgs),

    /// Replace embedded reference amounts in text
    Translate(TextArgs),

    /// List the rounding policy tokens
    Policies,
}

/// Arguments for amount commands.
#[derive(Args, Debug)]
pub struct AmountArgs {
    /// Amount as a decimal literal
    pub amount: String,

    /// Rounding policy token
    #[arg(short, long)]
    pub policy: Option<String>,
}

/// Arguments for the translate command.
#[derive(Args, Debug)]
pub struct TextArgs {
    /// Text containing marker-prefixed amounts
    pub text: String,

    /// Rounding policy token
    #[arg(short, long)]
    pub policy: Option<String>,
}

impl Overrides {
    /// Applies the overrides to loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a rate is not a decimal literal.
    pub fn apply(self, settings: &mut EngineSettings) -> anyhow::Result<()> {
        if let Some(code) = self.currency {
            settings.currency.iso_code = code;
        }
        if let Some(locale) = self.locale {
            settings.currency.locale = locale;
        }
        if let Some(rate) = self.rate {
            settings.currency.to_local_rate = rate.trim().parse()?;
        }
        if let Some(rate) = self.reference_rate {
            settings.currency.to_reference_rate = rate.trim().parse()?;
        }
        if let Some(marker) = self.marker {
            settings.reference_marker = marker;
        }
        if self.strict {
            settings.policy_tokens = PolicyTokenMode::Strict;
        }
        Ok(())
    }
}
