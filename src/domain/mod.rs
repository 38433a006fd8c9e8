//! Pure settlement and risk engine.
//!
//! Every function here is total, deterministic, and side-effect free: it
//! reads its arguments and returns a fresh value. Missing or malformed input
//! degrades to documented defaults, `None`, or [`RiskLevel::Unknown`].

pub mod error;
pub mod numeric;

mod market;
mod outcome;
mod risk;
mod settlement;
mod stake;
mod usage;

pub use market::{build_market_snapshot, MarketInput, MarketSnapshot};
pub use outcome::{Outcome, TrustTier};
pub use risk::{
    assess_windows, classify_risk, normalize_thresholds, normalize_thresholds_with,
    AccuracyRateInput, AccuracyRateThresholds, ObserverRiskProfile, ResolutionWindow,
    ResolutionWindowThresholds, RiskLevel, ThresholdsInput, WindowAssessment, WindowSpan,
    DEFAULT_CRITICAL_BELOW, DEFAULT_MIN_RESOLVED_PREDICTIONS, DEFAULT_WATCH_BELOW,
    MAX_MIN_RESOLVED_PREDICTIONS,
};
pub use settlement::{settle_stake, Settlement, SettlementInput};
pub use stake::{
    is_within_bounds, normalize_bounds, resolve_stake_input, BoundsInput, RawStake, StakeBounds,
    StakeResolution, DEFAULT_MAX_STAKE_POINTS, DEFAULT_MIN_STAKE_POINTS,
};
pub use usage::{derive_usage_limit_state, UsageInput, UsageLimitState};
