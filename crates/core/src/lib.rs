//! Conversion and formatting engine for Localcur.
//!
//! This crate contains pure computation with ZERO network or storage dependencies.
//! Amounts are exact decimals from input to display.
//!
//! # Modules
//!
//! - `currency` - Amount parsing and rate conversion
//! - `policy` - Rounding policies and per-currency overrides
//! - `locale` - Locale tags, compiled-in locale data, money rendering
//! - `format` - Policy-aware formatting and hook chains
//! - `engine` - The active-currency entry points

pub mod currency;
pub mod engine;
pub mod format;
pub mod locale;
pub mod policy;

pub use currency::{ConversionDirection, RateConverter, ToAmount};
pub use engine::{CurrencyUpdate, LocalCurrency, LocalCurrencyBuilder};
pub use format::{HookChain, PolicyFormatter};
pub use policy::{PolicyOverrideTable, apply_policy};
