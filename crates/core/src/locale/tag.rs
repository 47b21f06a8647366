//! Locale tag parsing.
//!
//! Accepts `language[-Script][-REGION][-u-key-value...]`, with `_` accepted
//! as a separator. Only the `nu` (numbering system) keyword of the Unicode
//! extension is kept.

use localcur_shared::{CurrencyError, CurrencyResult};

/// A parsed locale tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTag {
    /// Lower-case language subtag (e.g., "zh").
    pub language: String,
    /// Title-case script subtag (e.g., "Hant").
    pub script: Option<String>,
    /// Upper-case region subtag (e.g., "TW").
    pub region: Option<String>,
    /// Numbering system from `-u-nu-*` (e.g., "latn").
    pub numbering: Option<String>,
}

impl LocaleTag {
    /// Parses a locale tag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the language subtag is missing or malformed.
    pub fn parse(tag: &str) -> CurrencyResult<Self> {
        let mut subtags = tag.trim().split(['-', '_']).peekable();

        let language = subtags
            .next()
            .filter(|s| (2..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic()))
            .ok_or_else(|| CurrencyError::InvalidConfig(format!("malformed locale tag {tag:?}")))?
            .to_ascii_lowercase();

        let mut parsed = Self {
            language,
            script: None,
            region: None,
            numbering: None,
        };

        while let Some(subtag) = subtags.next() {
            if subtag.len() == 1 {
                if subtag.eq_ignore_ascii_case("u") {
                    parsed.read_unicode_extension(&mut subtags);
                    continue;
                }
                // Other extensions and private use carry nothing we format with.
                break;
            }
            if parsed.script.is_none()
                && parsed.region.is_none()
                && subtag.len() == 4
                && subtag.bytes().all(|b| b.is_ascii_alphabetic())
            {
                parsed.script = Some(title_case(subtag));
            } else if parsed.region.is_none() && is_region(subtag) {
                parsed.region = Some(subtag.to_ascii_uppercase());
            }
        }

        Ok(parsed)
    }

    /// Returns the tag with the numbering system set.
    #[must_use]
    pub fn with_numbering(mut self, numbering: &str) -> Self {
        self.numbering = Some(numbering.to_ascii_lowercase());
        self
    }

    /// Lookup keys from most to least specific.
    ///
    /// `zh-Hant-TW` yields `zh-Hant-TW`, `zh-TW`, `zh-Hant`, `zh`.
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<String> {
        let mut chain = Vec::with_capacity(4);
        match (&self.script, &self.region) {
            (Some(script), Some(region)) => {
                chain.push(format!("{}-{script}-{region}", self.language));
                chain.push(format!("{}-{region}", self.language));
                chain.push(format!("{}-{script}", self.language));
            }
            (None, Some(region)) => chain.push(format!("{}-{region}", self.language)),
            (Some(script), None) => chain.push(format!("{}-{script}", self.language)),
            (None, None) => {}
        }
        chain.push(self.language.clone());
        chain
    }

    fn read_unicode_extension<'a, I>(&mut self, subtags: &mut std::iter::Peekable<I>)
    where
        I: Iterator<Item = &'a str>,
    {
        while let Some(key) = subtags.next_if(|s| s.len() == 2) {
            let mut first_value = None;
            while let Some(value) = subtags.next_if(|s| (3..=8).contains(&s.len())) {
                first_value.get_or_insert(value);
            }
            if key.eq_ignore_ascii_case("nu") {
                if let Some(value) = first_value {
                    self.numbering = Some(value.to_ascii_lowercase());
                }
            }
        }
    }
}

impl std::fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        if let Some(numbering) = &self.numbering {
            write!(f, "-u-nu-{numbering}")?;
        }
        Ok(())
    }
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}

fn title_case(subtag: &str) -> String {
    let lower = subtag.to_ascii_lowercase();
    let mut chars = lower.chars();
    chars
        .next()
        .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
        .unwrap_or_default()
}
