//! Compiled-in currency display data.
//!
//! Separators, grouping, and digits come from ICU locale data. This table
//! only covers what the decimal formatter does not: where the currency
//! symbol sits, which symbol a locale uses, and each currency's minor units.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Before the number; separated only when the symbol ends in a letter.
    Prefix,
    /// Before the number, always separated.
    PrefixSpaced,
    /// After the number, always separated.
    Suffix,
}

/// Currency layout of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    /// Lookup key (e.g., "de" or "es-MX").
    pub key: &'static str,
    /// Symbol placement.
    pub placement: SymbolPlacement,
}

/// Display data for one ISO 4217 currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    /// ISO 4217 code.
    pub code: &'static str,
    /// Symbol used when the locale has no override.
    pub symbol: &'static str,
    /// Default fraction digits.
    pub minor_units: u32,
}

/// Fallback when no entry in a tag's chain matches.
pub const ROOT_LOCALE: LocaleData = locale("en", SymbolPlacement::Prefix);

const fn locale(key: &'static str, placement: SymbolPlacement) -> LocaleData {
    LocaleData { key, placement }
}

const LOCALES: &[LocaleData] = &[
    ROOT_LOCALE,
    locale("hi", SymbolPlacement::Prefix),
    locale("bn", SymbolPlacement::Suffix),
    locale("ms", SymbolPlacement::Prefix),
    locale("th", SymbolPlacement::Prefix),
    locale("fil", SymbolPlacement::Prefix),
    locale("zh", SymbolPlacement::Prefix),
    locale("ja", SymbolPlacement::Prefix),
    locale("ko", SymbolPlacement::Prefix),
    locale("id", SymbolPlacement::Prefix),
    locale("vi", SymbolPlacement::Suffix),
    locale("ur", SymbolPlacement::PrefixSpaced),
    locale("dv", SymbolPlacement::PrefixSpaced),
    locale("ar", SymbolPlacement::Suffix),
    locale("fa", SymbolPlacement::PrefixSpaced),
    locale("he", SymbolPlacement::Suffix),
    locale("tr", SymbolPlacement::Prefix),
    // Spanish: Spain suffixes, the Americas mostly prefix.
    locale("es", SymbolPlacement::Suffix),
    locale("es-419", SymbolPlacement::Prefix),
    locale("es-MX", SymbolPlacement::Prefix),
    locale("es-US", SymbolPlacement::Prefix),
    locale("es-CL", SymbolPlacement::Prefix),
    locale("es-AR", SymbolPlacement::PrefixSpaced),
    locale("es-CO", SymbolPlacement::PrefixSpaced),
    locale("pt", SymbolPlacement::PrefixSpaced),
    locale("pt-PT", SymbolPlacement::Suffix),
    locale("de", SymbolPlacement::Suffix),
    locale("de-AT", SymbolPlacement::PrefixSpaced),
    locale("de-CH", SymbolPlacement::PrefixSpaced),
    locale("fr", SymbolPlacement::Suffix),
    locale("fr-CH", SymbolPlacement::Suffix),
    locale("it", SymbolPlacement::Suffix),
    locale("nl", SymbolPlacement::PrefixSpaced),
    locale("sv", SymbolPlacement::Suffix),
    locale("nb", SymbolPlacement::Suffix),
    locale("da", SymbolPlacement::Suffix),
    locale("fi", SymbolPlacement::Suffix),
    locale("pl", SymbolPlacement::Suffix),
    locale("cs", SymbolPlacement::Suffix),
    locale("hu", SymbolPlacement::Suffix),
    locale("ru", SymbolPlacement::Suffix),
];

const fn currency(code: &'static str, symbol: &'static str, minor_units: u32) -> CurrencyInfo {
    CurrencyInfo {
        code,
        symbol,
        minor_units,
    }
}

const CURRENCIES: &[CurrencyInfo] = &[
    // Americas
    currency("USD", "$", 2),
    currency("CAD", "CA$", 2),
    currency("MXN", "MX$", 2),
    currency("BRL", "R$", 2),
    currency("CLP", "CLP", 0),
    currency("COP", "COP", 2),
    currency("ARS", "ARS", 2),
    currency("PEN", "PEN", 2),
    // Europe
    currency("EUR", "€", 2),
    currency("GBP", "£", 2),
    currency("CHF", "CHF", 2),
    currency("SEK", "SEK", 2),
    currency("NOK", "NOK", 2),
    currency("DKK", "DKK", 2),
    currency("PLN", "PLN", 2),
    currency("CZK", "CZK", 2),
    currency("HUF", "HUF", 2),
    currency("RUB", "RUB", 2),
    currency("TRY", "TRY", 2),
    // Asia-Pacific
    currency("JPY", "¥", 0),
    currency("CNY", "CN¥", 2),
    currency("HKD", "HK$", 2),
    currency("TWD", "NT$", 2),
    currency("KRW", "₩", 0),
    currency("SGD", "SGD", 2),
    currency("MYR", "MYR", 2),
    currency("THB", "THB", 2),
    currency("PHP", "₱", 2),
    currency("IDR", "IDR", 2),
    currency("VND", "₫", 0),
    currency("INR", "₹", 2),
    currency("PKR", "PKR", 2),
    currency("MVR", "MVR", 2),
    currency("BDT", "BDT", 2),
    currency("LKR", "LKR", 2),
    currency("AUD", "A$", 2),
    currency("NZD", "NZ$", 2),
    // Middle East and Africa
    currency("KWD", "KD", 3),
    currency("OMR", "OMR", 3),
    currency("BHD", "BHD", 3),
    currency("TND", "DT", 3),
    currency("JOD", "JOD", 3),
    currency("LYD", "LYD", 3),
    currency("AED", "AED", 2),
    currency("SAR", "SAR", 2),
    currency("QAR", "QAR", 2),
    currency("ILS", "₪", 2),
    currency("EGP", "EGP", 2),
    currency("ZAR", "ZAR", 2),
    currency("NGN", "NGN", 2),
    currency("KES", "KES", 2),
];

/// Symbols that differ from the default within a locale, keyed by locale
/// lookup key and ISO code.
const LOCAL_SYMBOLS: &[(&str, &str, &str)] = &[
    ("en-CA", "CAD", "$"),
    ("en-CA", "USD", "US$"),
    ("en-AU", "AUD", "$"),
    ("en-AU", "USD", "US$"),
    ("en-NZ", "NZD", "$"),
    ("en-NZ", "USD", "US$"),
    ("en-SG", "SGD", "$"),
    ("en-SG", "USD", "US$"),
    ("en-MY", "MYR", "RM"),
    ("en-PH", "PHP", "₱"),
    ("en-PK", "PKR", "Rs"),
    ("en-HK", "HKD", "HK$"),
    ("en-IN", "USD", "$"),
    ("ms", "MYR", "RM"),
    ("th", "THB", "฿"),
    ("fil", "PHP", "₱"),
    ("ja", "JPY", "￥"),
    ("ja", "CNY", "元"),
    ("zh", "CNY", "¥"),
    ("zh-TW", "TWD", "$"),
    ("zh-Hant", "TWD", "$"),
    ("ko", "KRW", "₩"),
    ("id", "IDR", "Rp"),
    ("ur", "PKR", "Rs"),
    ("dv", "MVR", "Rf"),
    ("es-CL", "CLP", "$"),
    ("es-MX", "MXN", "$"),
    ("es-US", "USD", "$"),
    ("es-AR", "ARS", "$"),
    ("es-CO", "COP", "$"),
    ("sv", "SEK", "kr"),
    ("nb", "NOK", "kr"),
    ("da", "DKK", "kr."),
    ("cs", "CZK", "Kč"),
    ("hu", "HUF", "Ft"),
    ("he", "ILS", "₪"),
    ("bn", "BDT", "৳"),
    ("pt-BR", "BRL", "R$"),
    ("pt-BR", "USD", "US$"),
    ("de-CH", "CHF", "CHF"),
    ("pl", "PLN", "zł"),
    ("ru", "RUB", "₽"),
    ("tr", "TRY", "₺"),
    ("ar-KW", "KWD", "د.ك.\u{200f}"),
];

static LOCALE_INDEX: Lazy<HashMap<&'static str, &'static LocaleData>> =
    Lazy::new(|| LOCALES.iter().map(|data| (data.key, data)).collect());

static CURRENCY_INDEX: Lazy<HashMap<&'static str, &'static CurrencyInfo>> =
    Lazy::new(|| CURRENCIES.iter().map(|info| (info.code, info)).collect());

static SYMBOL_INDEX: Lazy<HashMap<(&'static str, &'static str), &'static str>> = Lazy::new(|| {
    LOCAL_SYMBOLS
        .iter()
        .map(|(key, code, symbol)| ((*key, *code), *symbol))
        .collect()
});

/// Looks up locale data by exact key.
#[must_use]
pub fn locale_data(key: &str) -> Option<&'static LocaleData> {
    LOCALE_INDEX.get(key).copied()
}

/// Looks up currency data by ISO code (case-insensitive).
#[must_use]
pub fn currency_info(iso_code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCY_INDEX
        .get(iso_code.to_ascii_uppercase().as_str())
        .copied()
}

/// Looks up a locale-specific symbol by exact locale key.
#[must_use]
pub fn local_symbol(key: &str, iso_code: &str) -> Option<&'static str> {
    SYMBOL_INDEX.get(&(key, iso_code)).copied()
}
