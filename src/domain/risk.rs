//! Resolution-window risk classification.
//!
//! An observer's prediction accuracy over a fixed window (7 or 30 days) is
//! mapped onto one of four [`RiskLevel`]s using validated
//! [`ResolutionWindowThresholds`]. An explicit level supplied by the backend
//! always wins; small samples and malformed rates classify as
//! [`RiskLevel::Unknown`].
//!
//! # Examples
//!
//! ```
//! use reviewpool::domain::{classify_risk, ResolutionWindow, ResolutionWindowThresholds, RiskLevel};
//!
//! let thresholds = ResolutionWindowThresholds::default();
//! let window = ResolutionWindow::from_counts(None, 10, 5);
//!
//! assert_eq!(classify_risk(&window, &thresholds), RiskLevel::Watch);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::DomainError;
use super::numeric::{clamp_unit, finite, lenient, lenient_text, to_points};

/// Default accuracy rate below which an observer is critical.
pub const DEFAULT_CRITICAL_BELOW: f64 = 0.45;

/// Default accuracy rate below which an observer is on watch.
pub const DEFAULT_WATCH_BELOW: f64 = 0.6;

/// Default minimum resolved predictions before a rate is trusted.
pub const DEFAULT_MIN_RESOLVED_PREDICTIONS: u32 = 3;

/// Largest accepted minimum sample size.
pub const MAX_MIN_RESOLVED_PREDICTIONS: u32 = 500;

/// Health classification of an observer over one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Healthy,
    Watch,
    Critical,
    Unknown,
}

impl RiskLevel {
    pub const ALL: [Self; 4] = [Self::Healthy, Self::Watch, Self::Critical, Self::Unknown];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Watch => "watch",
            Self::Critical => "critical",
            Self::Unknown => "unknown",
        }
    }

    /// Lenient parse: an exact literal match, else `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_str() == value)
    }

    /// Ordering used when combining windows; `Unknown` ranks lowest.
    #[must_use]
    pub const fn severity(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Healthy => 1,
            Self::Watch => 2,
            Self::Critical => 3,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownRiskLevel {
            value: s.to_string(),
        })
    }
}

/// Fixed historical span a window aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowSpan {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
}

impl WindowSpan {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
        }
    }

    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::SevenDays => 7,
            Self::ThirtyDays => 30,
        }
    }
}

impl fmt::Display for WindowSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WindowSpan {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Self::SevenDays),
            "30d" => Ok(Self::ThirtyDays),
            other => Err(DomainError::UnknownWindowSpan {
                value: other.to_string(),
            }),
        }
    }
}

/// Accuracy-rate cut-offs. Invariant: `0 <= critical_below <= watch_below <= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyRateThresholds {
    pub critical_below: f64,
    pub watch_below: f64,
}

/// Fully populated, validated classification thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionWindowThresholds {
    pub accuracy_rate: AccuracyRateThresholds,
    pub min_resolved_predictions: u32,
}

impl Default for ResolutionWindowThresholds {
    fn default() -> Self {
        Self {
            accuracy_rate: AccuracyRateThresholds {
                critical_below: DEFAULT_CRITICAL_BELOW,
                watch_below: DEFAULT_WATCH_BELOW,
            },
            min_resolved_predictions: DEFAULT_MIN_RESOLVED_PREDICTIONS,
        }
    }
}

/// Raw accuracy-rate thresholds as supplied by a caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccuracyRateInput {
    #[serde(deserialize_with = "lenient")]
    pub critical_below: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub watch_below: Option<f64>,
}

/// Raw thresholds as supplied by a caller; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThresholdsInput {
    pub accuracy_rate: AccuracyRateInput,
    #[serde(deserialize_with = "lenient")]
    pub min_resolved_predictions: Option<f64>,
}

fn within(value: Option<f64>, low: f64, high: f64) -> Option<f64> {
    finite(value).filter(|v| (low..=high).contains(v))
}

/// Normalize raw thresholds, falling back to the documented defaults.
#[must_use]
pub fn normalize_thresholds(raw: &ThresholdsInput) -> ResolutionWindowThresholds {
    normalize_thresholds_with(raw, &ResolutionWindowThresholds::default())
}

/// Normalize raw thresholds against caller-chosen fallbacks.
///
/// `watch_below` is validated against the resolved `critical_below`; when it
/// is rejected the fallback is used, raised to `critical_below` if needed so
/// the ordering invariant always holds.
#[must_use]
pub fn normalize_thresholds_with(
    raw: &ThresholdsInput,
    fallback: &ResolutionWindowThresholds,
) -> ResolutionWindowThresholds {
    let critical_below = within(raw.accuracy_rate.critical_below, 0.0, 1.0)
        .unwrap_or_else(|| clamp_unit(fallback.accuracy_rate.critical_below));

    let watch_below = within(raw.accuracy_rate.watch_below, critical_below, 1.0)
        .unwrap_or_else(|| clamp_unit(fallback.accuracy_rate.watch_below).max(critical_below));

    let min_resolved_predictions = within(
        raw.min_resolved_predictions,
        1.0,
        f64::from(MAX_MIN_RESOLVED_PREDICTIONS),
    )
    // Range-checked above, so the rounded value fits in u32.
    .map_or(
        fallback
            .min_resolved_predictions
            .clamp(1, MAX_MIN_RESOLVED_PREDICTIONS),
        |v| to_points(v) as u32,
    );

    ResolutionWindowThresholds {
        accuracy_rate: AccuracyRateThresholds {
            critical_below,
            watch_below,
        },
        min_resolved_predictions,
    }
}

fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.map_or(0, |v| to_points(v).min(u64::from(u32::MAX)) as u32))
}

fn lenient_risk_level<'de, D>(deserializer: D) -> Result<Option<RiskLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.as_deref().and_then(RiskLevel::parse))
}

fn lenient_span<'de, D>(deserializer: D) -> Result<Option<WindowSpan>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.and_then(|s| s.parse().ok()))
}

/// Accuracy statistics for one window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolutionWindow {
    #[serde(deserialize_with = "lenient_span")]
    pub span: Option<WindowSpan>,
    /// Number of predictions resolved within the window.
    #[serde(deserialize_with = "lenient_count")]
    pub resolved: u32,
    /// Fraction of resolved predictions that were correct.
    #[serde(deserialize_with = "lenient")]
    pub rate: Option<f64>,
    /// Explicit level from the backend; always wins when present.
    #[serde(deserialize_with = "lenient_risk_level")]
    pub risk_level: Option<RiskLevel>,
}

impl ResolutionWindow {
    /// Window statistics from raw counts; the rate is unknown when nothing resolved.
    #[must_use]
    pub fn from_counts(span: Option<WindowSpan>, resolved: u32, correct: u32) -> Self {
        let rate = (resolved > 0).then(|| clamp_unit(f64::from(correct) / f64::from(resolved)));
        Self {
            span,
            resolved,
            rate,
            risk_level: None,
        }
    }

    /// Attach an explicit backend classification.
    #[must_use]
    pub fn with_risk_level(mut self, risk_level: RiskLevel) -> Self {
        self.risk_level = Some(risk_level);
        self
    }
}

/// Classify a window against validated thresholds.
#[must_use]
pub fn classify_risk(
    window: &ResolutionWindow,
    thresholds: &ResolutionWindowThresholds,
) -> RiskLevel {
    if let Some(level) = window.risk_level {
        return level;
    }
    if window.resolved < thresholds.min_resolved_predictions {
        return RiskLevel::Unknown;
    }
    let Some(rate) = finite(window.rate) else {
        return RiskLevel::Unknown;
    };

    if rate < thresholds.accuracy_rate.critical_below {
        RiskLevel::Critical
    } else if rate < thresholds.accuracy_rate.watch_below {
        RiskLevel::Watch
    } else {
        RiskLevel::Healthy
    }
}

/// Classification of a single window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowAssessment {
    pub span: Option<WindowSpan>,
    pub risk_level: RiskLevel,
}

/// Classification across all of an observer's windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObserverRiskProfile {
    pub windows: Vec<WindowAssessment>,
    /// Most severe known level, or `Unknown` when nothing could be classified.
    pub overall: RiskLevel,
}

/// Classify every window and combine them into one profile.
#[must_use]
pub fn assess_windows(
    windows: &[ResolutionWindow],
    thresholds: &ResolutionWindowThresholds,
) -> ObserverRiskProfile {
    let windows: Vec<WindowAssessment> = windows
        .iter()
        .map(|window| WindowAssessment {
            span: window.span,
            risk_level: classify_risk(window, thresholds),
        })
        .collect();

    let overall = windows
        .iter()
        .map(|w| w.risk_level)
        .max_by_key(|level| level.severity())
        .unwrap_or(RiskLevel::Unknown);

    ObserverRiskProfile { windows, overall }
}
