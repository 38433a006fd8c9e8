//! Pari-mutuel settlement of a single stake after a review resolves.
//!
//! Winners share the whole pool in proportion to their stake; losers get
//! nothing back. This only computes what the transfer should be; moving
//! points is the caller's job.

use serde::{Deserialize, Serialize};

use super::numeric::{finite, lenient, to_points};
use super::outcome::Outcome;

/// Pool totals and the observer's position at resolution time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementInput {
    #[serde(default, deserialize_with = "lenient")]
    pub merge_stake_points: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub reject_stake_points: Option<f64>,
    /// The side the observer staked on.
    pub predicted: Outcome,
    pub stake_points: u64,
    /// How the review actually resolved.
    pub resolved: Outcome,
}

/// What the observer should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub won: bool,
    pub stake_points: u64,
    pub payout_points: u64,
    /// Payout minus stake; negative for a losing stake.
    pub net_points: i64,
}

/// Settle one stake against the final pool.
///
/// The winning side's total is floored at the observer's own stake, since
/// that stake is part of it.
#[must_use]
pub fn settle_stake(input: &SettlementInput) -> Settlement {
    let stake = input.stake_points;
    let won = input.predicted == input.resolved;

    let side_total = |outcome: Outcome| {
        let raw = match outcome {
            Outcome::Merge => input.merge_stake_points,
            Outcome::Reject => input.reject_stake_points,
        };
        finite(raw).unwrap_or(0.0).max(0.0)
    };

    let payout_points = if won && stake > 0 {
        let winning_total = side_total(input.resolved).max(stake as f64);
        let pool = winning_total + side_total(input.resolved.opposite());
        to_points(stake as f64 * pool / winning_total)
    } else {
        0
    };

    let net_points = i64::try_from(payout_points)
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(stake).unwrap_or(i64::MAX));

    Settlement {
        won,
        stake_points: stake,
        payout_points,
        net_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(predicted: Outcome, stake_points: u64, resolved: Outcome) -> SettlementInput {
        SettlementInput {
            merge_stake_points: Some(30.0),
            reject_stake_points: Some(70.0),
            predicted,
            stake_points,
            resolved,
        }
    }

    #[test]
    fn winner_shares_the_pool() {
        let settlement = settle_stake(&input(Outcome::Merge, 10, Outcome::Merge));
        assert!(settlement.won);
        assert_eq!(settlement.payout_points, 33);
        assert_eq!(settlement.net_points, 23);
    }

    #[test]
    fn loser_forfeits_stake() {
        let settlement = settle_stake(&input(Outcome::Reject, 20, Outcome::Merge));
        assert!(!settlement.won);
        assert_eq!(settlement.payout_points, 0);
        assert_eq!(settlement.net_points, -20);
    }

    #[test]
    fn sole_winner_takes_everything() {
        let settlement = settle_stake(&SettlementInput {
            merge_stake_points: Some(0.0),
            reject_stake_points: Some(90.0),
            ..input(Outcome::Merge, 10, Outcome::Merge)
        });
        assert_eq!(settlement.payout_points, 100);
    }

    #[test]
    fn zero_stake_settles_to_zero() {
        let settlement = settle_stake(&input(Outcome::Merge, 0, Outcome::Merge));
        assert_eq!(settlement.payout_points, 0);
        assert_eq!(settlement.net_points, 0);
    }

    #[test]
    fn missing_totals_refund_a_lone_winner() {
        let settlement = settle_stake(&SettlementInput {
            merge_stake_points: None,
            reject_stake_points: Some(f64::NAN),
            ..input(Outcome::Merge, 15, Outcome::Merge)
        });
        assert_eq!(settlement.payout_points, 15);
        assert_eq!(settlement.net_points, 0);
    }
}
