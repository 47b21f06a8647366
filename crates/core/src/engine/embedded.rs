//! Embedded amount tokens in free text.
//!
//! A token is the marker followed by digits with an optional fractional
//! part: `$5`, `$5.50`, `$.75`. A dot is only part of the token when a
//! digit follows it, so sentence punctuation after an amount is kept.

use localcur_shared::CurrencyResult;

/// Byte length of the numeric literal starting at the beginning of `rest`,
/// or `None` if `rest` does not start with one.
fn numeric_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();

    let frac_len = match bytes.get(int_len) {
        Some(b'.') => bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count(),
        _ => 0,
    };

    match (int_len, frac_len) {
        (0, 0) => None,
        (_, 0) => Some(int_len),
        (_, frac) => Some(int_len + 1 + frac),
    }
}

/// Replaces every `marker` + number token in `text` with `convert(number)`.
///
/// Text between tokens, and markers not followed by a number, are copied
/// unchanged. An empty marker matches nothing.
///
/// # Errors
///
/// Returns the first error produced by `convert`.
pub fn replace_embedded<F>(text: &str, marker: &str, mut convert: F) -> CurrencyResult<String>
where
    F: FnMut(&str) -> CurrencyResult<String>,
{
    if marker.is_empty() || !text.contains(marker) {
        return Ok(text.to_string());
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(marker) {
        let token_start = cursor + offset;
        let number_start = token_start + marker.len();

        match numeric_len(&text[number_start..]) {
            Some(len) => {
                out.push_str(&text[cursor..token_start]);
                out.push_str(&convert(&text[number_start..number_start + len])?);
                cursor = number_start + len;
            }
            None => {
                out.push_str(&text[cursor..number_start]);
                cursor = number_start;
            }
        }
    }

    out.push_str(&text[cursor..]);
    Ok(out)
}
