//! Entry points binding conversion and formatting to an active currency.

pub mod embedded;
pub mod local_currency;

#[cfg(test)]
mod props;

pub use embedded::replace_embedded;
pub use local_currency::{CurrencyObserver, CurrencyUpdate, LocalCurrency, LocalCurrencyBuilder};
