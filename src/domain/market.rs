//! Two-outcome pari-mutuel market snapshots.
//!
//! [`build_market_snapshot`] turns whatever subset of raw market fields the
//! caller already has into a complete, internally consistent view of the
//! market. Explicit overrides always win over values derived from the stake
//! totals, and quantities that cannot be determined surface as `None`.
//!
//! # Examples
//!
//! ```
//! use reviewpool::domain::{build_market_snapshot, MarketInput};
//!
//! let snapshot = build_market_snapshot(&MarketInput {
//!     merge_stake_points: Some(30.0),
//!     reject_stake_points: Some(70.0),
//!     ..Default::default()
//! });
//!
//! assert_eq!(snapshot.total_stake_points, 100);
//! assert_eq!(snapshot.merge_odds_percent, Some(30));
//! assert_eq!(snapshot.reject_odds_percent, Some(70));
//! ```

use serde::{Deserialize, Serialize};

use super::numeric::{
    clamp_unit, finite, lenient, lenient_text, round_points, to_points, to_signed_points,
};
use super::outcome::{Outcome, TrustTier};

/// Raw market fields as fetched from storage. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketInput {
    /// Points staked on the merge outcome.
    #[serde(deserialize_with = "lenient")]
    pub merge_stake_points: Option<f64>,
    /// Points staked on the reject outcome.
    #[serde(deserialize_with = "lenient")]
    pub reject_stake_points: Option<f64>,
    /// Explicit total stake, overriding the sum of both sides.
    #[serde(deserialize_with = "lenient")]
    pub total_stake_points: Option<f64>,
    /// Explicit displayed pool size.
    #[serde(deserialize_with = "lenient")]
    pub market_pool_points: Option<f64>,
    /// Explicit merge odds ratio.
    #[serde(deserialize_with = "lenient")]
    pub merge_odds: Option<f64>,
    /// Explicit reject odds ratio.
    #[serde(deserialize_with = "lenient")]
    pub reject_odds: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub merge_payout_multiplier: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub reject_payout_multiplier: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub potential_merge_payout: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub potential_reject_payout: Option<f64>,
    /// Hypothetical stake used to derive potential payouts.
    #[serde(deserialize_with = "lenient")]
    pub stake_points_for_potential: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub daily_stake_cap_points: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub daily_stake_used_points: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub daily_submission_cap: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub daily_submissions_used: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub observer_net_points: Option<f64>,
    /// Raw trust tier literal; validated against [`TrustTier`].
    #[serde(deserialize_with = "lenient_text")]
    pub trust_tier: Option<String>,
}

impl MarketInput {
    /// Input with only the two stake totals set.
    #[must_use]
    pub fn with_stakes(merge_stake_points: f64, reject_stake_points: f64) -> Self {
        Self {
            merge_stake_points: Some(merge_stake_points),
            reject_stake_points: Some(reject_stake_points),
            ..Self::default()
        }
    }

    /// Set the hypothetical stake used for potential payouts.
    #[must_use]
    pub fn for_stake(mut self, stake_points: f64) -> Self {
        self.stake_points_for_potential = Some(stake_points);
        self
    }
}

/// A fully derived view of a two-outcome market.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub merge_stake_points: f64,
    pub reject_stake_points: f64,
    pub total_stake_points: u64,
    pub market_pool_points: Option<u64>,
    pub merge_odds_ratio: Option<f64>,
    pub reject_odds_ratio: Option<f64>,
    pub merge_odds_percent: Option<u8>,
    pub reject_odds_percent: Option<u8>,
    pub merge_payout_multiplier: Option<f64>,
    pub reject_payout_multiplier: Option<f64>,
    pub potential_merge_payout: Option<u64>,
    pub potential_reject_payout: Option<u64>,
    pub daily_stake_cap_points: Option<f64>,
    pub daily_stake_used_points: Option<f64>,
    pub daily_stake_remaining_points: Option<f64>,
    pub daily_submission_cap: Option<f64>,
    pub daily_submissions_used: Option<f64>,
    pub daily_submissions_remaining: Option<f64>,
    pub observer_net_points: Option<i64>,
    pub trust_tier: Option<TrustTier>,
    pub has_market_summary: bool,
    pub has_potential_payout: bool,
    pub has_observer_market_profile: bool,
    pub has_usage_caps: bool,
}

impl MarketSnapshot {
    /// Points staked on one side.
    #[must_use]
    pub fn stake_points(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Merge => self.merge_stake_points,
            Outcome::Reject => self.reject_stake_points,
        }
    }

    #[must_use]
    pub fn odds_ratio(&self, outcome: Outcome) -> Option<f64> {
        match outcome {
            Outcome::Merge => self.merge_odds_ratio,
            Outcome::Reject => self.reject_odds_ratio,
        }
    }

    #[must_use]
    pub fn odds_percent(&self, outcome: Outcome) -> Option<u8> {
        match outcome {
            Outcome::Merge => self.merge_odds_percent,
            Outcome::Reject => self.reject_odds_percent,
        }
    }

    #[must_use]
    pub fn payout_multiplier(&self, outcome: Outcome) -> Option<f64> {
        match outcome {
            Outcome::Merge => self.merge_payout_multiplier,
            Outcome::Reject => self.reject_payout_multiplier,
        }
    }

    #[must_use]
    pub fn potential_payout(&self, outcome: Outcome) -> Option<u64> {
        match outcome {
            Outcome::Merge => self.potential_merge_payout,
            Outcome::Reject => self.potential_reject_payout,
        }
    }
}

/// Per-side derivation: odds, percent, multiplier, potential payout.
struct Side {
    ratio: Option<f64>,
    percent: Option<u8>,
    multiplier: Option<f64>,
    potential: Option<u64>,
}

impl Side {
    fn derive(
        stake: f64,
        total: f64,
        odds_override: Option<f64>,
        multiplier_override: Option<f64>,
        potential_override: Option<f64>,
        stake_for_potential: Option<f64>,
    ) -> Self {
        let ratio = finite(odds_override)
            .or_else(|| (total > 0.0).then(|| stake / total))
            .map(clamp_unit);

        // Ratio is in [0, 1], so the percentage always fits in a u8.
        let percent = ratio.map(|r| round_points(r * 100.0) as u8);

        let multiplier = finite(multiplier_override)
            .map(|m| m.max(0.0))
            .or_else(|| {
                ratio
                    .filter(|r| *r > 0.0)
                    .map(|r| 1.0 / r)
                    .filter(|m| m.is_finite())
            });

        let potential = match finite(potential_override) {
            Some(explicit) => Some(to_points(explicit)),
            None => match (stake_for_potential, multiplier) {
                (Some(stake), Some(multiplier)) => Some(to_points(stake * multiplier)),
                _ => None,
            },
        };

        Self {
            ratio,
            percent,
            multiplier,
            potential,
        }
    }
}

/// Unrounded, so it agrees with the usage limiter on fractional counters.
fn remaining(cap: Option<f64>, used: Option<f64>) -> Option<f64> {
    match (cap, used) {
        (Some(cap), Some(used)) => finite(Some(cap - used)).map(|left| left.max(0.0)),
        _ => None,
    }
}

/// Build a complete market snapshot from partial input.
///
/// Total over its input domain: missing or non-finite fields never cause a
/// panic or a NaN; they surface as `None` (or 0 for the stake totals).
#[must_use]
pub fn build_market_snapshot(input: &MarketInput) -> MarketSnapshot {
    let merge_stake = finite(input.merge_stake_points).unwrap_or(0.0).max(0.0);
    let reject_stake = finite(input.reject_stake_points).unwrap_or(0.0).max(0.0);

    // A sum that overflows is as unknown as a missing total.
    let total_stake = finite(input.total_stake_points)
        .or_else(|| finite(Some(merge_stake + reject_stake)))
        .unwrap_or(0.0)
        .max(0.0);

    let pool = match finite(input.market_pool_points) {
        Some(explicit) => Some(to_points(explicit)),
        None => (total_stake > 0.0).then(|| to_points(total_stake)),
    };

    let stake_for_potential = finite(input.stake_points_for_potential);

    let merge = Side::derive(
        merge_stake,
        total_stake,
        input.merge_odds,
        input.merge_payout_multiplier,
        input.potential_merge_payout,
        stake_for_potential,
    );
    let reject = Side::derive(
        reject_stake,
        total_stake,
        input.reject_odds,
        input.reject_payout_multiplier,
        input.potential_reject_payout,
        stake_for_potential,
    );

    let daily_stake_cap = finite(input.daily_stake_cap_points);
    let daily_stake_used = finite(input.daily_stake_used_points);
    let daily_submission_cap = finite(input.daily_submission_cap);
    let daily_submissions_used = finite(input.daily_submissions_used);

    let observer_net_points = finite(input.observer_net_points).map(to_signed_points);
    let trust_tier = input.trust_tier.as_deref().and_then(TrustTier::parse);

    MarketSnapshot {
        merge_stake_points: merge_stake,
        reject_stake_points: reject_stake,
        total_stake_points: to_points(total_stake),
        market_pool_points: pool,
        has_market_summary: pool.is_some() || merge.ratio.is_some() || reject.ratio.is_some(),
        has_potential_payout: merge.potential.is_some() || reject.potential.is_some(),
        has_observer_market_profile: observer_net_points.is_some() || trust_tier.is_some(),
        has_usage_caps: daily_stake_cap.is_some()
            || daily_stake_used.is_some()
            || daily_submission_cap.is_some()
            || daily_submissions_used.is_some(),
        merge_odds_ratio: merge.ratio,
        reject_odds_ratio: reject.ratio,
        merge_odds_percent: merge.percent,
        reject_odds_percent: reject.percent,
        merge_payout_multiplier: merge.multiplier,
        reject_payout_multiplier: reject.multiplier,
        potential_merge_payout: merge.potential,
        potential_reject_payout: reject.potential,
        daily_stake_cap_points: daily_stake_cap,
        daily_stake_used_points: daily_stake_used,
        daily_stake_remaining_points: remaining(daily_stake_cap, daily_stake_used),
        daily_submission_cap,
        daily_submissions_used,
        daily_submissions_remaining: remaining(daily_submission_cap, daily_submissions_used),
        observer_net_points,
        trust_tier,
    }
}
