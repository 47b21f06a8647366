//! Locale tags, display data, and monetary number rendering.
//!
//! Numbers are laid out by ICU. Digits follow the tag's `nu` keyword.

pub mod data;
pub mod number;
pub mod tag;

pub use data::{CurrencyInfo, LocaleData, SymbolPlacement, currency_info};
pub use number::{FractionDigits, MoneyFormatter};
pub use tag::LocaleTag;
