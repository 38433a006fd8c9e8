//! `snapshot` command: derive and display a market snapshot.

use std::path::Path;

use tabled::Tabled;

use super::input::read_json;
use super::output;
use crate::domain::{build_market_snapshot, MarketInput, MarketSnapshot, Outcome};
use crate::error::Result;

#[derive(Tabled)]
struct SideRow {
    #[tabled(rename = "Side")]
    side: String,
    #[tabled(rename = "Stake")]
    stake: String,
    #[tabled(rename = "Odds")]
    odds: String,
    #[tabled(rename = "Multiplier")]
    multiplier: String,
    #[tabled(rename = "Potential")]
    potential: String,
}

impl SideRow {
    fn new(snapshot: &MarketSnapshot, outcome: Outcome) -> Self {
        Self {
            side: outcome.to_string(),
            stake: snapshot.stake_points(outcome).to_string(),
            odds: output::optional(snapshot.odds_percent(outcome).map(|p| format!("{p}%"))),
            multiplier: output::optional(
                snapshot
                    .payout_multiplier(outcome)
                    .map(|m| format!("{m:.4}x")),
            ),
            potential: output::optional(snapshot.potential_payout(outcome)),
        }
    }
}

/// Print a snapshot in human-readable form.
pub fn render(snapshot: &MarketSnapshot) {
    output::section("Market");
    output::field("total stake", snapshot.total_stake_points);
    output::field("pool", output::optional(snapshot.market_pool_points));
    output::table(vec![
        SideRow::new(snapshot, Outcome::Merge),
        SideRow::new(snapshot, Outcome::Reject),
    ]);
    if output::verbosity() > 0 {
        output::field(
            "merge ratio",
            output::optional(snapshot.merge_odds_ratio.map(|r| format!("{r:.6}"))),
        );
        output::field(
            "reject ratio",
            output::optional(snapshot.reject_odds_ratio.map(|r| format!("{r:.6}"))),
        );
    }

    if snapshot.has_usage_caps {
        output::section("Daily usage");
        output::field(
            "stake",
            format!(
                "{} / {} ({} left)",
                output::optional(snapshot.daily_stake_used_points),
                output::optional(snapshot.daily_stake_cap_points),
                output::optional(snapshot.daily_stake_remaining_points),
            ),
        );
        output::field(
            "submissions",
            format!(
                "{} / {} ({} left)",
                output::optional(snapshot.daily_submissions_used),
                output::optional(snapshot.daily_submission_cap),
                output::optional(snapshot.daily_submissions_remaining),
            ),
        );
    }

    if snapshot.has_observer_market_profile {
        output::section("Observer");
        output::field(
            "net points",
            snapshot
                .observer_net_points
                .map_or_else(|| output::muted("—"), signed),
        );
        output::field("trust tier", output::optional(snapshot.trust_tier));
    }
}

fn signed(points: i64) -> String {
    if points < 0 {
        output::negative(points)
    } else {
        output::positive(format!("+{points}"))
    }
}

/// Run the `snapshot` command.
pub fn run(input: Option<&Path>) -> Result<()> {
    let market: MarketInput = read_json(input)?;
    let snapshot = build_market_snapshot(&market);

    if output::is_json() {
        return output::json_output(&snapshot);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    render(&snapshot);
    if !snapshot.has_market_summary {
        output::warning("no stake in this market yet; odds are undetermined");
    }
    Ok(())
}
