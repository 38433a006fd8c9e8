//! `settle` command: pay out a stake once the review resolves.

use super::command::SettleArgs;
use super::output;
use crate::domain::{settle_stake, SettlementInput};
use crate::error::Result;

/// Run the `settle` command.
pub fn run(args: &SettleArgs) -> Result<()> {
    let settlement = settle_stake(&SettlementInput {
        merge_stake_points: Some(args.merge),
        reject_stake_points: Some(args.reject),
        predicted: args.side,
        stake_points: args.stake,
        resolved: args.outcome,
    });

    if output::is_json() {
        return output::json_output(&settlement);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Settlement");
    output::field("backed", args.side);
    output::field("resolved", args.outcome);
    output::field("stake", settlement.stake_points);
    output::field("payout", output::highlight(settlement.payout_points));
    let net = if settlement.net_points < 0 {
        output::negative(settlement.net_points)
    } else {
        output::positive(format!("+{}", settlement.net_points))
    };
    output::field("net", net);
    if settlement.won {
        output::success("prediction won");
    } else {
        output::warning("prediction lost");
    }
    Ok(())
}
