//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via the `testkit` feature (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for engine inputs: markets, windows, usage.
//! - [`config`] - Canonical engine configurations and TOML fixtures.

pub mod config;
pub mod domain;
