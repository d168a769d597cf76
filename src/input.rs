//! Parsing of free-form, comma-separated custom arrays.

use crate::core::Value;
use crate::error::SortError;

/// Splits `text` on commas and keeps every token that parses as an integer.
///
/// Tokens are trimmed first; anything that does not parse is dropped.
///
/// ```
/// use sortscope::input::parse_values;
///
/// assert_eq!(parse_values(" 5, 3,x, -8,,1 "), vec![5, 3, -8, 1]);
/// ```
pub fn parse_values(text: &str) -> Vec<Value> {
    text.split(',')
        .filter_map(|token| token.trim().parse::<Value>().ok())
        .collect()
}

/// Like [`parse_values`], but an input with no integers is an error.
pub fn parse_custom_array(text: &str) -> Result<Vec<Value>, SortError> {
    let values = parse_values(text);
    if values.is_empty() {
        return Err(SortError::NoValues);
    }
    Ok(values)
}
