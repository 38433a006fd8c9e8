//! Closed enumerations shared across the engine: review outcomes and trust tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// The two ways a pending review can resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The change is merged.
    Merge,
    /// The change is rejected.
    Reject,
}

impl Outcome {
    /// The literal used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Reject => "reject",
        }
    }

    /// The other side of the market.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Merge => Self::Reject,
            Self::Reject => Self::Merge,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merge" => Ok(Self::Merge),
            "reject" => Ok(Self::Reject),
            other => Err(DomainError::UnknownOutcome {
                value: other.to_string(),
            }),
        }
    }
}

/// Reputation classification of an observer.
///
/// The set is closed: any other literal coming from upstream is treated as
/// "no tier" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustTier {
    Newcomer,
    Established,
    Trusted,
    Veteran,
}

impl TrustTier {
    /// Every recognized tier, lowest first.
    pub const ALL: [Self; 4] = [
        Self::Newcomer,
        Self::Established,
        Self::Trusted,
        Self::Veteran,
    ];

    /// The literal used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newcomer => "newcomer",
            Self::Established => "established",
            Self::Trusted => "trusted",
            Self::Veteran => "veteran",
        }
    }

    /// Lenient parse: an exact literal match, else `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.as_str() == value)
    }
}

impl fmt::Display for TrustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrustTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::UnknownTrustTier {
            value: s.to_string(),
        })
    }
}
