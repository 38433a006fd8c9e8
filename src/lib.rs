//! Reviewpool - pari-mutuel settlement and risk engine for review-outcome markets.
//!
//! Observers stake points on whether a pull request will be merged or
//! rejected. All stakes on one review form a pool that is split among the
//! winning side in proportion to stake.
//!
//! # Modules
//!
//! - [`domain`] - Pure engine: market snapshots, stake resolution, daily
//!   usage limits, settlement, and resolution-window risk classification
//! - [`app`] - Configuration and the [`app::PlacementEngine`] that chains the
//!   pure functions with configured defaults and logging
//! - [`adapter`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Builders for tests
//!
//! # Example
//!
//! ```
//! use reviewpool::domain::{build_market_snapshot, MarketInput, Outcome};
//!
//! let snapshot = build_market_snapshot(&MarketInput::with_stakes(30.0, 70.0).for_stake(10.0));
//! assert_eq!(snapshot.odds_percent(Outcome::Merge), Some(30));
//! assert_eq!(snapshot.potential_payout(Outcome::Merge), Some(33));
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;

#[cfg(feature = "testkit")]
pub mod testkit;
