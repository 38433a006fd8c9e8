//! Builders for engine inputs used across tests.
//!
//! Keeps market payloads and window statistics short so tests focus on
//! assertions rather than construction boilerplate.

use crate::domain::{
    MarketInput, Outcome, ResolutionWindow, RiskLevel, SettlementInput, UsageInput, WindowSpan,
};

/// A market with the given side totals and nothing else.
pub fn market(merge: f64, reject: f64) -> MarketInput {
    MarketInput::with_stakes(merge, reject)
}

/// A market with both daily caps and their usage counters set.
pub fn capped_market(
    merge: f64,
    reject: f64,
    stake_cap: f64,
    stake_used: f64,
    submission_cap: f64,
    submissions_used: f64,
) -> MarketInput {
    MarketInput {
        daily_stake_cap_points: Some(stake_cap),
        daily_stake_used_points: Some(stake_used),
        daily_submission_cap: Some(submission_cap),
        daily_submissions_used: Some(submissions_used),
        ..MarketInput::with_stakes(merge, reject)
    }
}

/// Usage counters for a new submission of `stake_points`.
pub fn usage(stake_points: u64, stake_cap: f64, stake_used: f64) -> UsageInput {
    UsageInput {
        stake_points,
        daily_stake_cap_points: Some(stake_cap),
        daily_stake_used_points: Some(stake_used),
        ..Default::default()
    }
}

/// A window with a known accuracy rate.
pub fn window(span: WindowSpan, resolved: u32, rate: f64) -> ResolutionWindow {
    ResolutionWindow {
        span: Some(span),
        resolved,
        rate: Some(rate),
        risk_level: None,
    }
}

/// A window carrying an explicit backend classification.
pub fn labelled_window(span: WindowSpan, level: RiskLevel) -> ResolutionWindow {
    ResolutionWindow {
        span: Some(span),
        ..Default::default()
    }
    .with_risk_level(level)
}

/// A settlement for `stake_points` backing `predicted`.
pub fn settlement(
    merge: f64,
    reject: f64,
    predicted: Outcome,
    stake_points: u64,
    resolved: Outcome,
) -> SettlementInput {
    SettlementInput {
        merge_stake_points: Some(merge),
        reject_stake_points: Some(reject),
        predicted,
        stake_points,
        resolved,
    }
}
