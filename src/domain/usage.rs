//! Daily usage caps for new stake submissions.

use serde::{Deserialize, Serialize};

use super::numeric::{finite, lenient};

/// Counters and caps needed to decide whether a submission breaches a daily limit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageInput {
    /// The observer already holds a prediction on this market.
    pub has_existing_prediction: bool,
    /// Stake of the pending submission.
    pub stake_points: u64,
    #[serde(deserialize_with = "lenient")]
    pub daily_stake_cap_points: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub daily_stake_used_points: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub daily_submission_cap: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub daily_submissions_used: Option<f64>,
}

/// Which daily caps a new submission would breach.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageLimitState {
    pub daily_stake_cap_reached: bool,
    pub daily_submission_cap_reached: bool,
}

impl UsageLimitState {
    /// True when either cap blocks the submission.
    #[must_use]
    pub const fn is_blocked(&self) -> bool {
        self.daily_stake_cap_reached || self.daily_submission_cap_reached
    }
}

/// Decide whether a submission breaches the daily caps.
///
/// Updates to an existing prediction are exempt. A cap whose counters are
/// unknown is not enforced here. The stake cap blocks only when it would be
/// exceeded; the submission cap blocks once the count already equals the cap.
#[must_use]
pub fn derive_usage_limit_state(input: &UsageInput) -> UsageLimitState {
    if input.has_existing_prediction {
        return UsageLimitState::default();
    }

    let stake_cap = finite(input.daily_stake_cap_points);
    let stake_used = finite(input.daily_stake_used_points);
    let submission_cap = finite(input.daily_submission_cap);
    let submissions_used = finite(input.daily_submissions_used);

    let daily_stake_cap_reached = match (stake_cap, stake_used) {
        (Some(cap), Some(used)) => used + input.stake_points as f64 > cap,
        _ => false,
    };

    let daily_submission_cap_reached = match (submission_cap, submissions_used) {
        (Some(cap), Some(used)) => used >= cap,
        _ => false,
    };

    UsageLimitState {
        daily_stake_cap_reached,
        daily_submission_cap_reached,
    }
}
