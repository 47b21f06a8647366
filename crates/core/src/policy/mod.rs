//! Rounding policy overrides, resolution, and application.

pub mod resolve;
pub mod rounding;
pub mod table;

#[cfg(test)]
mod props;

pub use rounding::apply_policy;
pub use table::PolicyOverrideTable;
