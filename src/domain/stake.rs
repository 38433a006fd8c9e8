//! Stake bounds and raw stake input resolution.
//!
//! Stakes are whole points. [`normalize_bounds`] turns possibly
//! misconfigured per-market limits into a legal [`StakeBounds`], and
//! [`resolve_stake_input`] coerces whatever the observer typed into that
//! range, reporting whether any correction was needed.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::numeric::{finite, lenient, parse_number, round_points};

/// Default minimum stake when a market does not configure one.
pub const DEFAULT_MIN_STAKE_POINTS: u64 = 5;

/// Default maximum stake when a market does not configure one.
pub const DEFAULT_MAX_STAKE_POINTS: u64 = 500;

/// Legal stake range for a market.
///
/// Invariant: `1 <= min_stake_points <= max_stake_points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeBounds {
    min_stake_points: u64,
    max_stake_points: u64,
}

impl StakeBounds {
    /// Create bounds, raising `min` to 1 and `max` to meet `min` if needed.
    #[must_use]
    pub fn new(min_stake_points: u64, max_stake_points: u64) -> Self {
        let min_stake_points = min_stake_points.max(1);
        Self {
            min_stake_points,
            max_stake_points: max_stake_points.max(min_stake_points),
        }
    }

    #[must_use]
    pub const fn min_stake_points(&self) -> u64 {
        self.min_stake_points
    }

    #[must_use]
    pub const fn max_stake_points(&self) -> u64 {
        self.max_stake_points
    }

    /// Whether `stake_points` lies inside the bounds.
    #[must_use]
    pub const fn contains(&self, stake_points: u64) -> bool {
        stake_points >= self.min_stake_points && stake_points <= self.max_stake_points
    }
}

impl Default for StakeBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_STAKE_POINTS, DEFAULT_MAX_STAKE_POINTS)
    }
}

impl fmt::Display for StakeBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min_stake_points, self.max_stake_points)
    }
}

/// Raw per-market bound configuration plus the defaults to fall back on.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundsInput {
    #[serde(deserialize_with = "lenient")]
    pub min_stake_points: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub max_stake_points: Option<f64>,
    /// Used when `min_stake_points` is missing or non-finite.
    pub default_min: f64,
    /// Used when `max_stake_points` is missing or non-finite.
    pub default_max: f64,
}

impl BoundsInput {
    /// Input with explicit bounds and the standard defaults.
    #[must_use]
    pub fn new(min_stake_points: Option<f64>, max_stake_points: Option<f64>) -> Self {
        Self {
            min_stake_points,
            max_stake_points,
            ..Self::default()
        }
    }

    /// Replace the fallback defaults.
    #[must_use]
    pub fn with_defaults(mut self, default_min: f64, default_max: f64) -> Self {
        self.default_min = default_min;
        self.default_max = default_max;
        self
    }
}

impl Default for BoundsInput {
    fn default() -> Self {
        Self {
            min_stake_points: None,
            max_stake_points: None,
            default_min: DEFAULT_MIN_STAKE_POINTS as f64,
            default_max: DEFAULT_MAX_STAKE_POINTS as f64,
        }
    }
}

/// Normalize raw bound configuration into legal [`StakeBounds`].
///
/// Each bound is rounded; `min` is floored at 1 and `max` is floored at the
/// resolved `min`. A misconfigured `max < min` raises `max`, never lowers `min`.
#[must_use]
pub fn normalize_bounds(input: &BoundsInput) -> StakeBounds {
    let min = finite(input.min_stake_points)
        .or_else(|| finite(Some(input.default_min)))
        .unwrap_or(DEFAULT_MIN_STAKE_POINTS as f64);
    let max = finite(input.max_stake_points)
        .or_else(|| finite(Some(input.default_max)))
        .unwrap_or(DEFAULT_MAX_STAKE_POINTS as f64);

    // Saturating casts; StakeBounds::new restores the ordering invariant.
    let min = round_points(min).max(1.0) as u64;
    let max = round_points(max).max(0.0) as u64;

    StakeBounds::new(min, max)
}

/// A stake exactly as the observer entered it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawStake {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawStake {
    /// Parse to a finite number, if possible.
    #[must_use]
    pub fn parse(&self) -> Option<f64> {
        match self {
            Self::Number(n) => finite(Some(*n)),
            Self::Text(s) => parse_number(s),
            Self::Missing => None,
        }
    }
}

impl From<f64> for RawStake {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u64> for RawStake {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for RawStake {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawStake {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<RawStake>> From<Option<T>> for RawStake {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl<'de> Deserialize<'de> for RawStake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            Number(f64),
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::Number(n) => Self::Number(n),
            Shape::Text(s) => Self::Text(s),
            Shape::Other(_) => Self::Missing,
        })
    }
}

/// Result of coercing a raw stake into bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeResolution {
    /// The stake to use, always within the bounds.
    pub stake_points: u64,
    /// True when the raw value was unparseable, fractional, or out of range.
    pub adjusted: bool,
}

/// Coerce a raw stake into `bounds`.
///
/// Unparseable input falls back to `fallback_stake_points`, or to the bounds'
/// minimum when the fallback is missing or non-finite.
#[must_use]
pub fn resolve_stake_input(
    raw: &RawStake,
    bounds: StakeBounds,
    fallback_stake_points: Option<f64>,
) -> StakeResolution {
    let parsed = raw.parse();
    let base = parsed.unwrap_or_else(|| {
        finite(fallback_stake_points).unwrap_or(bounds.min_stake_points as f64)
    });

    let rounded = round_points(base);
    let clamped = rounded.clamp(
        bounds.min_stake_points as f64,
        bounds.max_stake_points as f64,
    );

    let adjusted = parsed.is_none() || rounded != base || clamped != rounded;

    StakeResolution {
        // Clamped to [min, max] with min >= 1, so the cast is exact.
        stake_points: clamped as u64,
        adjusted,
    }
}

/// Whether `stake_points` is a whole number inside `bounds`.
///
/// Fractional values are rejected even when numerically in range.
#[must_use]
pub fn is_within_bounds(stake_points: f64, bounds: StakeBounds) -> bool {
    stake_points.is_finite()
        && stake_points.fract() == 0.0
        && stake_points >= bounds.min_stake_points as f64
        && stake_points <= bounds.max_stake_points as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(min: u64, max: u64) -> StakeBounds {
        StakeBounds::new(min, max)
    }

    #[test]
    fn normalize_bounds_uses_defaults() {
        let normalized = normalize_bounds(&BoundsInput::default());
        assert_eq!(normalized, bounds(5, 500));
    }

    #[test]
    fn normalize_bounds_raises_max_to_min() {
        let normalized = normalize_bounds(&BoundsInput::new(Some(30.0), Some(10.0)));
        assert_eq!(normalized.min_stake_points(), 30);
        assert_eq!(normalized.max_stake_points(), 30);
    }

    #[test]
    fn normalize_bounds_rounds_and_floors() {
        let normalized = normalize_bounds(&BoundsInput::new(Some(-3.0), Some(49.6)));
        assert_eq!(normalized, bounds(1, 50));
    }

    #[test]
    fn normalize_bounds_ignores_non_finite_values() {
        let normalized = normalize_bounds(
            &BoundsInput::new(Some(f64::NAN), Some(f64::INFINITY)).with_defaults(10.0, 20.0),
        );
        assert_eq!(normalized, bounds(10, 20));
    }

    #[test]
    fn normalize_bounds_floors_defaults_consistently() {
        let normalized = normalize_bounds(&BoundsInput::default().with_defaults(0.0, -5.0));
        assert_eq!(normalized, bounds(1, 1));
    }

    #[test]
    fn resolve_clamps_numeric_string() {
        let resolution = resolve_stake_input(&"500".into(), bounds(5, 100), Some(10.0));
        assert_eq!(
            resolution,
            StakeResolution {
                stake_points: 100,
                adjusted: true
            }
        );
    }

    #[test]
    fn resolve_accepts_in_range_integer() {
        let resolution = resolve_stake_input(&RawStake::Number(25.0), bounds(5, 100), None);
        assert_eq!(resolution.stake_points, 25);
        assert!(!resolution.adjusted);
    }

    #[test]
    fn resolve_rounds_fractional_input() {
        let resolution = resolve_stake_input(&RawStake::Number(12.5), bounds(5, 100), None);
        assert_eq!(resolution.stake_points, 13);
        assert!(resolution.adjusted);
    }

    #[test]
    fn resolve_uses_fallback_on_garbage() {
        let resolution = resolve_stake_input(&"lots".into(), bounds(5, 100), Some(10.0));
        assert_eq!(resolution.stake_points, 10);
        assert!(resolution.adjusted);
    }

    #[test]
    fn resolve_uses_min_when_fallback_missing() {
        let resolution = resolve_stake_input(&RawStake::Missing, bounds(5, 100), Some(f64::NAN));
        assert_eq!(resolution.stake_points, 5);
        assert!(resolution.adjusted);
    }

    #[test]
    fn resolve_clamps_fallback_too() {
        let resolution = resolve_stake_input(&"".into(), bounds(5, 100), Some(1000.0));
        assert_eq!(resolution.stake_points, 100);
        assert!(resolution.adjusted);
    }

    #[test]
    fn within_bounds_rejects_fractions() {
        assert!(!is_within_bounds(10.5, bounds(5, 100)));
        assert!(is_within_bounds(10.0, bounds(5, 100)));
        assert!(is_within_bounds(5.0, bounds(5, 100)));
        assert!(is_within_bounds(100.0, bounds(5, 100)));
        assert!(!is_within_bounds(101.0, bounds(5, 100)));
        assert!(!is_within_bounds(f64::NAN, bounds(5, 100)));
    }

    #[test]
    fn raw_stake_deserializes_any_shape() {
        let number: RawStake = serde_json::from_str("42").unwrap();
        let text: RawStake = serde_json::from_str("\"42\"").unwrap();
        let other: RawStake = serde_json::from_str("{\"a\": 1}").unwrap();

        assert_eq!(number.parse(), Some(42.0));
        assert_eq!(text.parse(), Some(42.0));
        assert_eq!(other, RawStake::Missing);
    }
}
