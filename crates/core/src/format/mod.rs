//! Policy formatting and post-processing hooks.

pub mod formatter;
pub mod hooks;

pub use formatter::PolicyFormatter;
pub use hooks::{CurrencyHook, FormatHook, HookChain, HookChainBuilder};
