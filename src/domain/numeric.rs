//! Lenient numeric coercion shared by the engine components.
//!
//! Upstream payloads arrive partially populated: numbers, numeric strings,
//! `null`, or fields that are missing altogether. Everything here maps those
//! shapes onto `Option<f64>` where `None` means "unknown", and never fails.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Keep a value only if it is a finite number.
#[must_use]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Parse a numeric string, ignoring surrounding whitespace.
///
/// Empty strings and non-finite spellings (`inf`, `NaN`) are rejected.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to the nearest integer, ties away from zero.
#[must_use]
pub fn round_points(value: f64) -> f64 {
    value.round()
}

/// Round and convert to non-negative integer points.
///
/// Negative values become 0; values beyond `u64::MAX` saturate.
#[must_use]
pub fn to_points(value: f64) -> u64 {
    // `as` saturates for out-of-range floats.
    round_points(value.max(0.0)) as u64
}

/// Round and convert to signed integer points, saturating at the `i64` range.
#[must_use]
pub fn to_signed_points(value: f64) -> i64 {
    round_points(value) as i64
}

/// Clamp a ratio into `[0, 1]`.
#[must_use]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Any JSON shape a numeric field may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Loose {
    fn into_number(self) -> Option<f64> {
        match self {
            Self::Number(n) => finite(Some(n)),
            Self::Text(s) => parse_number(&s),
            Self::Other(_) => None,
        }
    }
}

/// Deserialize a field leniently into `Option<f64>`.
///
/// Use with `#[serde(default, deserialize_with = "lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Loose::deserialize(deserializer)?.into_number())
}

/// Deserialize a string field leniently; anything that is not a string is `None`.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => Some(s),
        Loose::Number(_) | Loose::Other(_) => None,
    })
}
