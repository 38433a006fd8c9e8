//! Errors raised when an enumerated literal is parsed strictly.
//!
//! The engine itself never fails: its lenient entry points map unknown
//! literals to `None` or [`RiskLevel::Unknown`](super::RiskLevel::Unknown).
//! These errors surface only through the strict `FromStr` implementations
//! used at the CLI boundary.
//!
//! # Examples
//!
//! ```
//! use reviewpool::domain::error::DomainError;
//! use reviewpool::domain::TrustTier;
//!
//! let result = "legendary".parse::<TrustTier>();
//! assert!(matches!(result, Err(DomainError::UnknownTrustTier { .. })));
//! ```

use thiserror::Error;

/// A literal that does not belong to its closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Trust tier is not one of the recognized tiers.
    #[error("unknown trust tier '{value}'")]
    UnknownTrustTier {
        /// The rejected literal.
        value: String,
    },

    /// Risk level is not one of `healthy`, `watch`, `critical`, `unknown`.
    #[error("unknown risk level '{value}'")]
    UnknownRiskLevel {
        /// The rejected literal.
        value: String,
    },

    /// Outcome is neither `merge` nor `reject`.
    #[error("unknown outcome '{value}', expected 'merge' or 'reject'")]
    UnknownOutcome {
        /// The rejected literal.
        value: String,
    },

    /// Window span is neither `7d` nor `30d`.
    #[error("unknown resolution window '{value}', expected '7d' or '30d'")]
    UnknownWindowSpan {
        /// The rejected literal.
        value: String,
    },
}
