//! Cutoff value parsing: percentages and ranks.
//!
//! ## Overview
//!
//! The catalog export stores both cutoff values as text: ranks as `"5000"`,
//! percentages as `"89.50%"`. Either may be blank or garbage. This module
//! turns them into typed values and maps anything unusable to `None`.
//!
//! ## Why Decimal?
//!
//! Ranking puts exact matches first, so `89.50` and `89.5` must compare
//! equal and distances like `|70 - 69.99|` must not pick up float noise.
//! Percentages are therefore `rust_decimal::Decimal`, and ranks are lifted
//! into `Decimal` when the engine needs a common distance.
//!
//! ## Examples
//!
//! ```
//! use college_predictor::types::score::{parse_rank, parse_score};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(parse_score("89.50%"), Some(Decimal::new(8950, 2)));
//! assert_eq!(parse_rank(" 5000 "), Some(5000));
//! assert_eq!(parse_score(""), None);
//! ```

use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Upper bound of a percentage cutoff.
pub const MAX_SCORE: Decimal = Decimal::ONE_HUNDRED;

// ============================================================================
// Parsing
// ============================================================================

/// Parse a percentage cutoff such as `"89.50%"` or `"72"`.
///
/// # Returns
///
/// * `Some(Decimal)` - value in `0..=100`
/// * `None` - blank, not a number, or out of range
///
/// # Example
///
/// ```
/// use college_predictor::types::score::parse_score;
///
/// assert!(parse_score("100%").is_some());
/// assert_eq!(parse_score("101"), None);
/// assert_eq!(parse_score("-3"), None);
/// assert_eq!(parse_score("N/A"), None);
/// ```
pub fn parse_score(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let value = Decimal::from_str(number).ok()?;
    in_score_range(value).then_some(value)
}

/// Parse a rank cutoff.
///
/// Accepts plain integers and integral decimals (`"5000.0"`). Ranks start
/// at 1, so `"0"` is rejected.
///
/// # Example
///
/// ```
/// use college_predictor::types::score::parse_rank;
///
/// assert_eq!(parse_rank("5000.0"), Some(5000));
/// assert_eq!(parse_rank("0"), None);
/// assert_eq!(parse_rank("12.5"), None);
/// ```
pub fn parse_rank(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if let Ok(rank) = trimmed.parse::<u32>() {
        return (rank >= 1).then_some(rank);
    }
    let value = Decimal::from_str(trimmed).ok()?;
    decimal_to_rank(value)
}

/// Convert a decimal to a rank if it is a whole number >= 1.
pub fn decimal_to_rank(d: Decimal) -> Option<u32> {
    if !d.fract().is_zero() {
        return None;
    }
    d.to_u32().filter(|rank| *rank >= 1)
}

/// Check that a percentage lies in `0..=100`.
#[inline]
pub fn in_score_range(d: Decimal) -> bool {
    !d.is_sign_negative() && d <= MAX_SCORE
}

// ============================================================================
// Comparison Helpers
// ============================================================================

/// Absolute difference between a target and a cutoff value.
///
/// Saturates at `Decimal::MAX` when the subtraction overflows.
///
/// # Example
///
/// ```
/// use college_predictor::types::score::distance;
/// use rust_decimal::Decimal;
///
/// assert_eq!(distance(Decimal::from(2000), Decimal::from(3000)), Decimal::from(1000));
/// assert_eq!(distance(Decimal::from(3000), Decimal::from(2000)), Decimal::from(1000));
/// ```
#[inline]
pub fn distance(target: Decimal, value: Decimal) -> Decimal {
    target.checked_sub(value).map_or(Decimal::MAX, |d| d.abs())
}

/// Render a percentage for display with two decimal places.
///
/// ```
/// use college_predictor::types::score::format_score;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_score(Decimal::new(895, 1)), "89.50%");
/// ```
pub fn format_score(d: Decimal) -> String {
    format!("{:.2}%", d)
}

// ============================================================================
// Serde adapters
// ============================================================================
// The export writes numbers as strings most of the time but not always, so
// both representations are accepted. Unusable values become None instead of
// failing the whole snapshot.

pub(crate) fn deserialize_rank<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(s) => parse_rank(&s),
        Value::Number(n) => parse_rank(&n.to_string()),
        _ => None,
    }))
}

pub(crate) fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::String(s) => parse_score(&s),
        Value::Number(n) => parse_score(&n.to_string()),
        _ => None,
    }))
}

pub(crate) fn serialize_decimal<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(d) => serializer.serialize_some(&d.to_string()),
        None => serializer.serialize_none(),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
