//! `stake` command: resolve a raw stake against market bounds.

use serde_json::json;

use super::command::StakeArgs;
use super::output;
use crate::app::PlacementEngine;
use crate::domain::{resolve_stake_input, RawStake};
use crate::error::Result;

/// Run the `stake` command.
pub fn run(engine: &PlacementEngine, args: &StakeArgs) -> Result<()> {
    let bounds = engine.bounds(args.min, args.max);
    let raw = RawStake::from(args.raw.as_str());
    let resolution = resolve_stake_input(&raw, bounds, args.fallback);

    if output::is_json() {
        return output::json_output(&json!({
            "bounds": bounds,
            "resolution": resolution,
        }));
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Stake");
    output::field("raw", &args.raw);
    output::field("bounds", bounds);
    output::field("stake", output::highlight(resolution.stake_points));
    if resolution.adjusted {
        output::warning("input was adjusted to fit the market's stake bounds");
    } else {
        output::success("input accepted as entered");
    }
    Ok(())
}
