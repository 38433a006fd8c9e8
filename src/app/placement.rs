//! Prediction placement: the composition a "place a prediction" request runs.
//!
//! Bounds resolution, stake resolution, the daily usage check, and the
//! market snapshot are independent pure functions; [`PlacementEngine`]
//! chains them in request order and applies the configured defaults.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::config::EngineConfig;
use crate::domain::numeric::lenient;
use crate::domain::{
    assess_windows, build_market_snapshot, classify_risk, derive_usage_limit_state,
    normalize_bounds, normalize_thresholds_with, resolve_stake_input, BoundsInput, MarketInput,
    MarketSnapshot, ObserverRiskProfile, Outcome, RawStake, ResolutionWindow,
    ResolutionWindowThresholds, RiskLevel, StakeBounds, StakeResolution, ThresholdsInput,
    UsageInput, UsageLimitState,
};

/// A request to stake on one side of a market.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    /// The side the observer is backing.
    pub outcome: Outcome,
    /// The stake as entered.
    #[serde(default)]
    pub raw_stake: RawStake,
    #[serde(default, deserialize_with = "lenient")]
    pub fallback_stake_points: Option<f64>,
    /// Per-market bound configuration.
    #[serde(default, deserialize_with = "lenient")]
    pub min_stake_points: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_stake_points: Option<f64>,
    /// Updating an existing prediction is exempt from daily caps.
    #[serde(default)]
    pub has_existing_prediction: bool,
    /// Market totals, overrides, usage counters, and observer profile.
    #[serde(default)]
    pub market: MarketInput,
}

impl PlacementRequest {
    /// A request with no market data beyond what the engine derives.
    #[must_use]
    pub fn new(outcome: Outcome, raw_stake: impl Into<RawStake>) -> Self {
        Self {
            outcome,
            raw_stake: raw_stake.into(),
            fallback_stake_points: None,
            min_stake_points: None,
            max_stake_points: None,
            has_existing_prediction: false,
            market: MarketInput::default(),
        }
    }

    #[must_use]
    pub fn with_market(mut self, market: MarketInput) -> Self {
        self.market = market;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, min_stake_points: f64, max_stake_points: f64) -> Self {
        self.min_stake_points = Some(min_stake_points);
        self.max_stake_points = Some(max_stake_points);
        self
    }

    #[must_use]
    pub fn updating(mut self) -> Self {
        self.has_existing_prediction = true;
        self
    }
}

/// Everything a caller needs to respond to a placement request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementQuote {
    pub outcome: Outcome,
    pub bounds: StakeBounds,
    pub stake: StakeResolution,
    pub usage: UsageLimitState,
    pub snapshot: MarketSnapshot,
    /// Potential payout on the chosen side for the resolved stake.
    pub potential_payout: Option<u64>,
    /// False when a daily cap blocks the submission.
    pub accepted: bool,
}

/// Applies configured defaults to the engine's pure functions.
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    config: EngineConfig,
}

impl PlacementEngine {
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve per-market bounds, falling back to the configured defaults.
    #[must_use]
    pub fn bounds(
        &self,
        min_stake_points: Option<f64>,
        max_stake_points: Option<f64>,
    ) -> StakeBounds {
        let defaults = self.config.default_bounds;
        let input = BoundsInput::new(min_stake_points, max_stake_points).with_defaults(
            defaults.min_stake_points() as f64,
            defaults.max_stake_points() as f64,
        );
        let bounds = normalize_bounds(&input);

        if let (Some(min), Some(max)) = (min_stake_points, max_stake_points) {
            if max < min {
                warn!(
                    min = min,
                    max = max,
                    resolved = %bounds,
                    "Stake bounds misconfigured, raising max"
                );
            }
        }
        bounds
    }

    /// Quote a placement request.
    #[must_use]
    pub fn quote(&self, request: &PlacementRequest) -> PlacementQuote {
        let bounds = self.bounds(request.min_stake_points, request.max_stake_points);

        let stake =
            resolve_stake_input(&request.raw_stake, bounds, request.fallback_stake_points);
        if stake.adjusted {
            debug!(
                raw = ?request.raw_stake,
                resolved = stake.stake_points,
                bounds = %bounds,
                "Stake input adjusted"
            );
        }

        let market = &request.market;
        let usage = derive_usage_limit_state(&UsageInput {
            has_existing_prediction: request.has_existing_prediction,
            stake_points: stake.stake_points,
            daily_stake_cap_points: market.daily_stake_cap_points,
            daily_stake_used_points: market.daily_stake_used_points,
            daily_submission_cap: market.daily_submission_cap,
            daily_submissions_used: market.daily_submissions_used,
        });

        let snapshot =
            build_market_snapshot(&market.clone().for_stake(stake.stake_points as f64));
        let potential_payout = snapshot.potential_payout(request.outcome);
        let accepted = !usage.is_blocked();

        if accepted {
            info!(
                outcome = %request.outcome,
                stake = stake.stake_points,
                potential_payout = ?potential_payout,
                "Placement quoted"
            );
        } else {
            warn!(
                outcome = %request.outcome,
                stake = stake.stake_points,
                stake_cap_reached = usage.daily_stake_cap_reached,
                submission_cap_reached = usage.daily_submission_cap_reached,
                "Placement blocked by daily cap"
            );
        }

        PlacementQuote {
            outcome: request.outcome,
            bounds,
            stake,
            usage,
            snapshot,
            potential_payout,
            accepted,
        }
    }

    /// Normalize caller thresholds, starting from the configured ones.
    #[must_use]
    pub fn thresholds(&self, raw: &ThresholdsInput) -> ResolutionWindowThresholds {
        let thresholds = normalize_thresholds_with(raw, &self.config.thresholds);
        debug!(?thresholds, "Resolution thresholds normalized");
        thresholds
    }

    /// Classify one window with the configured thresholds.
    #[must_use]
    pub fn classify(&self, window: &ResolutionWindow) -> RiskLevel {
        classify_risk(window, &self.config.thresholds)
    }

    /// Classify every window of an observer with the configured thresholds.
    #[must_use]
    pub fn assess_observer(&self, windows: &[ResolutionWindow]) -> ObserverRiskProfile {
        let profile = assess_windows(windows, &self.config.thresholds);
        if matches!(profile.overall, RiskLevel::Critical | RiskLevel::Watch) {
            info!(overall = %profile.overall, windows = windows.len(), "Observer flagged");
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capped_market() -> MarketInput {
        MarketInput {
            daily_stake_cap_points: Some(100.0),
            daily_stake_used_points: Some(30.0),
            daily_submission_cap: Some(10.0),
            daily_submissions_used: Some(3.0),
            ..MarketInput::with_stakes(30.0, 70.0)
        }
    }

    #[test]
    fn quote_resolves_stake_and_payout() {
        let engine = PlacementEngine::default();
        let request = PlacementRequest::new(Outcome::Merge, "10").with_market(capped_market());

        let quote = engine.quote(&request);

        assert_eq!(quote.bounds, StakeBounds::new(5, 500));
        assert_eq!(quote.stake.stake_points, 10);
        assert!(!quote.stake.adjusted);
        assert_eq!(quote.potential_payout, Some(33));
        assert_eq!(quote.snapshot.daily_stake_remaining_points, Some(70.0));
        assert!(quote.accepted);
    }

    #[test]
    fn quote_checks_caps_with_resolved_stake() {
        let engine = PlacementEngine::default();
        let request = PlacementRequest::new(Outcome::Reject, 80.0).with_market(capped_market());

        let quote = engine.quote(&request);

        assert!(quote.usage.daily_stake_cap_reached);
        assert!(!quote.accepted);
    }

    #[test]
    fn updates_bypass_caps() {
        let engine = PlacementEngine::default();
        let request = PlacementRequest::new(Outcome::Reject, 80.0)
            .with_market(capped_market())
            .updating();

        assert!(engine.quote(&request).accepted);
    }

    #[test]
    fn configured_bounds_apply_when_market_has_none() {
        let engine = PlacementEngine::new(EngineConfig {
            default_bounds: StakeBounds::new(20, 40),
            ..Default::default()
        });

        let quote = engine.quote(&PlacementRequest::new(Outcome::Merge, 100.0));
        assert_eq!(quote.stake.stake_points, 40);
        assert!(quote.stake.adjusted);

        let request = PlacementRequest::new(Outcome::Merge, 100.0).with_bounds(1.0, 200.0);
        let quote = engine.quote(&request);
        assert_eq!(quote.stake.stake_points, 100);
    }

    #[test]
    fn thresholds_fall_back_to_configuration() {
        let configured = ResolutionWindowThresholds {
            min_resolved_predictions: 10,
            ..Default::default()
        };
        let engine = PlacementEngine::new(EngineConfig {
            thresholds: configured,
            ..Default::default()
        });

        assert_eq!(engine.thresholds(&ThresholdsInput::default()), configured);
        assert_eq!(
            engine.classify(&ResolutionWindow::from_counts(None, 5, 5)),
            RiskLevel::Unknown
        );
    }
}
