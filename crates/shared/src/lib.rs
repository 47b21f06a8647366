//! Shared types, errors, and settings for Localcur.
//!
//! This crate provides common types used across all other crates:
//! - The active currency configuration
//! - Rounding policies and their token forms
//! - Engine-wide error types
//! - Settings management

pub mod config;
pub mod error;
pub mod types;

pub use config::{CurrencySettings, EngineSettings, PolicyTokenMode};
pub use error::{CurrencyError, CurrencyResult, HookError};
pub use types::{CurrencyConfig, PolicyFamily, RoundingPolicy};
