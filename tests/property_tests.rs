//! Property-based tests for engine invariants.

use proptest::prelude::*;
use reviewpool::domain::{
    build_market_snapshot, classify_risk, derive_usage_limit_state, normalize_bounds,
    normalize_thresholds, resolve_stake_input, AccuracyRateInput, BoundsInput, MarketInput,
    Outcome, RawStake, ResolutionWindow, RiskLevel, ThresholdsInput, UsageInput,
};
use reviewpool::testkit::domain::settlement;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn odds_percents_sum_to_about_one_hundred(
        merge in 0.0f64..1_000_000.0,
        reject in 0.0f64..1_000_000.0,
    ) {
        prop_assume!(merge + reject > 0.0);
        let snapshot = build_market_snapshot(&MarketInput::with_stakes(merge, reject));

        let merge_pct = snapshot.odds_percent(Outcome::Merge).map(u32::from);
        let reject_pct = snapshot.odds_percent(Outcome::Reject).map(u32::from);
        let sum = merge_pct.unwrap_or(0) + reject_pct.unwrap_or(0);
        prop_assert!((99..=101).contains(&sum), "sum was {sum}");
    }

    #[test]
    fn snapshot_never_yields_non_finite_values(
        merge in proptest::num::f64::ANY,
        reject in proptest::num::f64::ANY,
        odds in proptest::option::of(proptest::num::f64::ANY),
        stake in proptest::option::of(proptest::num::f64::ANY),
    ) {
        let snapshot = build_market_snapshot(&MarketInput {
            merge_odds: odds,
            stake_points_for_potential: stake,
            ..MarketInput::with_stakes(merge, reject)
        });

        for outcome in [Outcome::Merge, Outcome::Reject] {
            if let Some(ratio) = snapshot.odds_ratio(outcome) {
                prop_assert!((0.0..=1.0).contains(&ratio));
            }
            if let Some(multiplier) = snapshot.payout_multiplier(outcome) {
                prop_assert!(multiplier.is_finite() && multiplier >= 0.0);
            }
            prop_assert!(snapshot.stake_points(outcome).is_finite());
        }
    }

    #[test]
    fn resolved_stake_is_always_within_bounds(
        raw in proptest::num::f64::ANY,
        min in proptest::option::of(-1_000.0f64..100_000.0),
        max in proptest::option::of(-1_000.0f64..100_000.0),
        fallback in proptest::option::of(proptest::num::f64::ANY),
    ) {
        let bounds = normalize_bounds(&BoundsInput::new(min, max));
        prop_assert!(bounds.min_stake_points() >= 1);
        prop_assert!(bounds.min_stake_points() <= bounds.max_stake_points());

        let resolution = resolve_stake_input(&RawStake::Number(raw), bounds, fallback);
        prop_assert!(bounds.contains(resolution.stake_points));
    }

    #[test]
    fn resolving_a_resolved_stake_is_a_no_op(
        raw in "[ -~]{0,12}",
        min in 1u64..1_000,
        span in 0u64..1_000,
    ) {
        let bounds = normalize_bounds(&BoundsInput::new(Some(min as f64), Some((min + span) as f64)));
        let first = resolve_stake_input(&RawStake::from(raw.as_str()), bounds, None);
        let second = resolve_stake_input(&RawStake::from(first.stake_points), bounds, None);

        prop_assert_eq!(second.stake_points, first.stake_points);
        prop_assert!(!second.adjusted);
    }

    #[test]
    fn normalized_thresholds_are_ordered(
        critical in proptest::option::of(-2.0f64..2.0),
        watch in proptest::option::of(-2.0f64..2.0),
        min_resolved in proptest::option::of(-10.0f64..1_000.0),
    ) {
        let thresholds = normalize_thresholds(&ThresholdsInput {
            accuracy_rate: AccuracyRateInput {
                critical_below: critical,
                watch_below: watch,
            },
            min_resolved_predictions: min_resolved,
        });

        let rate = thresholds.accuracy_rate;
        prop_assert!(0.0 <= rate.critical_below);
        prop_assert!(rate.critical_below <= rate.watch_below);
        prop_assert!(rate.watch_below <= 1.0);
        prop_assert!((1..=500).contains(&thresholds.min_resolved_predictions));
    }

    #[test]
    fn winning_stake_never_loses_points(
        merge in 0.0f64..100_000.0,
        reject in 0.0f64..100_000.0,
        stake in 0u64..10_000,
    ) {
        let won = reviewpool::domain::settle_stake(
            &settlement(merge, reject, Outcome::Merge, stake, Outcome::Merge),
        );
        prop_assert!(won.net_points >= 0);

        let lost = reviewpool::domain::settle_stake(
            &settlement(merge, reject, Outcome::Merge, stake, Outcome::Reject),
        );
        prop_assert_eq!(lost.payout_points, 0);
        prop_assert_eq!(lost.net_points, -(stake as i64));
    }

    #[test]
    fn percents_sum_or_stay_unknown_for_any_finite_stakes(
        merge in 0.0f64..f64::MAX,
        reject in 0.0f64..f64::MAX,
    ) {
        let snapshot = build_market_snapshot(&MarketInput::with_stakes(merge, reject));

        match (snapshot.odds_percent(Outcome::Merge), snapshot.odds_percent(Outcome::Reject)) {
            (Some(m), Some(r)) => {
                let sum = u32::from(m) + u32::from(r);
                prop_assert!((99..=101).contains(&sum), "sum was {sum}");
            }
            (None, None) => prop_assert!(snapshot.market_pool_points.is_none()),
            other => prop_assert!(false, "one-sided odds {other:?}"),
        }
    }

    #[test]
    fn snapshot_is_idempotent(
        merge in proptest::option::of(proptest::num::f64::ANY),
        reject in proptest::option::of(proptest::num::f64::ANY),
        cap in proptest::option::of(-1_000.0f64..1_000.0),
        used in proptest::option::of(-1_000.0f64..1_000.0),
        stake in proptest::option::of(0.0f64..10_000.0),
        tier in proptest::option::of("[a-z]{0,12}"),
    ) {
        let input = MarketInput {
            merge_stake_points: merge,
            reject_stake_points: reject,
            daily_stake_cap_points: cap,
            daily_stake_used_points: used,
            stake_points_for_potential: stake,
            trust_tier: tier,
            ..Default::default()
        };

        prop_assert_eq!(build_market_snapshot(&input), build_market_snapshot(&input));
    }

    #[test]
    fn stake_resolution_is_idempotent(
        raw in "[ -~]{0,12}",
        min in proptest::option::of(proptest::num::f64::ANY),
        max in proptest::option::of(proptest::num::f64::ANY),
        fallback in proptest::option::of(proptest::num::f64::ANY),
    ) {
        let input = BoundsInput::new(min, max);
        let bounds = normalize_bounds(&input);
        prop_assert_eq!(bounds, normalize_bounds(&input));

        let raw = RawStake::from(raw.as_str());
        prop_assert_eq!(
            resolve_stake_input(&raw, bounds, fallback),
            resolve_stake_input(&raw, bounds, fallback)
        );
    }

    #[test]
    fn usage_limit_state_is_idempotent(
        has_existing_prediction in any::<bool>(),
        stake_points in 0u64..100_000,
        stake_cap in proptest::option::of(proptest::num::f64::ANY),
        stake_used in proptest::option::of(proptest::num::f64::ANY),
        submission_cap in proptest::option::of(proptest::num::f64::ANY),
        submissions_used in proptest::option::of(proptest::num::f64::ANY),
    ) {
        let input = UsageInput {
            has_existing_prediction,
            stake_points,
            daily_stake_cap_points: stake_cap,
            daily_stake_used_points: stake_used,
            daily_submission_cap: submission_cap,
            daily_submissions_used: submissions_used,
        };

        prop_assert_eq!(derive_usage_limit_state(&input), derive_usage_limit_state(&input));
    }

    #[test]
    fn risk_classification_is_idempotent(
        critical in proptest::option::of(proptest::num::f64::ANY),
        watch in proptest::option::of(proptest::num::f64::ANY),
        min_resolved in proptest::option::of(proptest::num::f64::ANY),
        resolved in 0u32..1_000,
        rate in proptest::option::of(proptest::num::f64::ANY),
        level in proptest::option::of(proptest::sample::select(RiskLevel::ALL.to_vec())),
    ) {
        let raw = ThresholdsInput {
            accuracy_rate: AccuracyRateInput {
                critical_below: critical,
                watch_below: watch,
            },
            min_resolved_predictions: min_resolved,
        };
        let thresholds = normalize_thresholds(&raw);
        prop_assert_eq!(thresholds, normalize_thresholds(&raw));

        let window = ResolutionWindow {
            span: None,
            resolved,
            rate,
            risk_level: level,
        };
        prop_assert_eq!(
            classify_risk(&window, &thresholds),
            classify_risk(&window, &thresholds)
        );
    }
}
