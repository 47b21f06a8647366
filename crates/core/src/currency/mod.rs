//! Exchange-rate application and amount parsing.

pub mod amount;
pub mod conversion;

#[cfg(test)]
mod props;

pub use amount::{ToAmount, parse_amount};
pub use conversion::{ConversionDirection, RateConverter};
