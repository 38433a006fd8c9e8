//! `risk` command: classify a single resolution window.

use serde_json::json;

use super::command::RiskArgs;
use super::output;
use crate::app::PlacementEngine;
use crate::domain::{ResolutionWindow, RiskLevel};
use crate::error::Result;

fn window(args: &RiskArgs) -> ResolutionWindow {
    let mut window = match args.correct {
        Some(correct) => ResolutionWindow::from_counts(args.span, args.resolved, correct),
        None => ResolutionWindow {
            span: args.span,
            resolved: args.resolved,
            rate: args.rate,
            risk_level: None,
        },
    };
    if let Some(level) = args.level {
        window = window.with_risk_level(level);
    }
    window
}

fn paint_level(level: RiskLevel) -> String {
    match level {
        RiskLevel::Healthy => output::positive(level),
        RiskLevel::Watch => output::highlight(level),
        RiskLevel::Critical => output::negative(level),
        RiskLevel::Unknown => output::muted(level),
    }
}

/// Run the `risk` command.
pub fn run(engine: &PlacementEngine, args: &RiskArgs) -> Result<()> {
    let window = window(args);
    let level = engine.classify(&window);

    if output::is_json() {
        return output::json_output(&json!({
            "window": window,
            "thresholds": engine.config().thresholds,
            "riskLevel": level,
        }));
    }

    let thresholds = engine.config().thresholds;
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Resolution window");
    output::field("span", output::optional(window.span));
    if output::verbosity() > 0 {
        output::field(
            "days",
            output::optional(window.span.map(|span| span.days())),
        );
    }
    output::field("resolved", window.resolved);
    output::field(
        "accuracy",
        output::optional(window.rate.map(|rate| format!("{:.1}%", rate * 100.0))),
    );
    output::field(
        "thresholds",
        format!(
            "critical < {}, watch < {}, min {} resolved",
            thresholds.accuracy_rate.critical_below,
            thresholds.accuracy_rate.watch_below,
            thresholds.min_resolved_predictions,
        ),
    );
    output::field("risk level", paint_level(level));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WindowSpan;

    fn args() -> RiskArgs {
        RiskArgs {
            resolved: 10,
            correct: None,
            rate: None,
            level: None,
            span: Some(WindowSpan::ThirtyDays),
        }
    }

    #[test]
    fn counts_derive_the_rate() {
        let window = window(&RiskArgs {
            correct: Some(4),
            ..args()
        });
        assert_eq!(window.rate, Some(0.4));
    }

    #[test]
    fn explicit_level_is_attached() {
        let window = window(&RiskArgs {
            rate: Some(0.9),
            level: Some(RiskLevel::Critical),
            ..args()
        });
        assert_eq!(window.risk_level, Some(RiskLevel::Critical));
        assert_eq!(PlacementEngine::default().classify(&window), RiskLevel::Critical);
    }
}
