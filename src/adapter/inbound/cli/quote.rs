//! `quote` command: run a placement request through the engine.

use std::path::Path;

use super::input::read_json;
use super::{output, snapshot};
use crate::app::{PlacementEngine, PlacementRequest};
use crate::error::Result;

/// Run the `quote` command.
pub fn run(engine: &PlacementEngine, input: Option<&Path>) -> Result<()> {
    let request: PlacementRequest = read_json(input)?;
    let quote = engine.quote(&request);

    if output::is_json() {
        return output::json_output(&quote);
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Placement");
    output::field("outcome", quote.outcome);
    output::field("bounds", quote.bounds);
    output::field("stake", output::highlight(quote.stake.stake_points));
    output::field("potential payout", output::optional(quote.potential_payout));
    snapshot::render(&quote.snapshot);

    if quote.stake.adjusted {
        output::warning("stake was adjusted to fit the market's stake bounds");
    }
    if quote.usage.daily_stake_cap_reached {
        output::warning("daily stake cap reached");
    }
    if quote.usage.daily_submission_cap_reached {
        output::warning("daily submission cap reached");
    }
    if quote.accepted {
        output::success("placement accepted");
    } else {
        output::error("placement blocked by a daily cap");
    }
    Ok(())
}
