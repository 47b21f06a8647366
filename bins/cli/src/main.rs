//! Localcur CLI
//!
//! # Usage
//!
//! ```bash
//! # Convert an amount into the configured local currency
//! localcur --currency JPY --locale ja-JP --rate 110 local 12.34
//!
//! # Pick a rounding policy
//! localcur local 9.999 --policy carry
//!
//! # Translate embedded amounts
//! localcur --currency EUR --locale de-DE --rate 0.9 translate 'ab $100 inkl. MwSt.'
//! ```

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use localcur_core::{HookChain, LocalCurrency};
use localcur_shared::{EngineSettings, RoundingPolicy};

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "localcur=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut settings = EngineSettings::load().context("Failed to load configuration")?;
    cli.overrides.apply(&mut settings)?;
    debug!(
        iso_code = %settings.currency.iso_code,
        locale = %settings.currency.locale,
        "Settings loaded"
    );

    let engine = LocalCurrency::from_settings(&settings, HookChain::default())?;

    let output = match cli.command {
        Commands::Local(args) => {
            engine.to_local_with_token(args.amount.as_str(), args.policy.as_deref())?
        }
        Commands::Reference(args) => {
            engine.to_reference_with_token(args.amount.as_str(), args.policy.as_deref())?
        }
        Commands::Translate(args) => {
            engine.translate_with_token(&args.text, args.policy.as_deref())?
        }
        Commands::Policies => RoundingPolicy::ALL
            .into_iter()
            .map(RoundingPolicy::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
    };

    println!("{output}");
    Ok(())
}
