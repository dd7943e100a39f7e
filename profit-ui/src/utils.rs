use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Error returned when a form field cannot be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseInputError {
    #[error("value is required")]
    Empty,

    #[error("invalid whole number '{input}': {source}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("'{input}' is not a finite number")]
    NotFinite { input: String },

    #[error("misplaced thousands separator in '{input}'")]
    MisplacedSeparator { input: String },
}

/// Normalizes input for parsing: trims surrounding whitespace and removes
/// comma thousands separators.
///
/// Commas are only accepted in the integer part, in groups of three digits
/// after a leading group of one to three (`"1,234,567"`). Anything else,
/// such as `"1,,2"` or `",123"`, is rejected rather than silently joined.
fn normalize_numeric_input(s: &str) -> Result<String, ParseInputError> {
    let trimmed = s.trim();
    if !trimmed.contains(',') {
        return Ok(trimmed.to_string());
    }

    let unsigned = trimmed
        .strip_prefix(['-', '+'])
        .unwrap_or(trimmed);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut groups = integer.split(',');
    let leading_ok = groups
        .next()
        .is_some_and(|group| (1..=3).contains(&group.len()));
    let well_formed = leading_ok && groups.all(|group| group.len() == 3) && !fraction.contains(',');

    if !well_formed {
        tracing::warn!(input = %s, "misplaced thousands separator");
        return Err(ParseInputError::MisplacedSeparator {
            input: s.to_string(),
        });
    }
    Ok(trimmed.replace(',', ""))
}

/// Parses an amount in cents.
///
/// Surrounding whitespace is ignored and comma thousands separators are
/// accepted when correctly grouped (e.g. `"10,000,000"`).
/// Empty or whitespace-only input is an error.
pub fn parse_cents(s: &str) -> Result<i64, ParseInputError> {
    let normalized = normalize_numeric_input(s)?;
    if normalized.is_empty() {
        return Err(ParseInputError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid cents amount: {}", e);
        ParseInputError::InvalidInteger {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a tax rate given in percent (`"19.5"` is 19.5%).
///
/// Whitespace and thousands separators are handled as in [`parse_cents`].
/// `NaN` and infinities parse as floats but are rejected here.
pub fn parse_tax_rate(s: &str) -> Result<f64, ParseInputError> {
    let normalized = normalize_numeric_input(s)?;
    if normalized.is_empty() {
        return Err(ParseInputError::Empty);
    }
    let rate: f64 = normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid tax rate: {}", e);
        ParseInputError::InvalidNumber {
            input: s.to_string(),
            source: e,
        }
    })?;
    if !rate.is_finite() {
        tracing::warn!(input = %s, "tax rate is not finite");
        return Err(ParseInputError::NotFinite {
            input: s.to_string(),
        });
    }
    Ok(rate)
}
