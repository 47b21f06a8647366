//! Common types used across the engine.

pub mod currency;
pub mod policy;

pub use currency::CurrencyConfig;
pub use policy::{PolicyFamily, RoundingPolicy};
