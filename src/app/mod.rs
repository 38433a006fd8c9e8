//! Application layer: configuration and request composition.

mod config;
mod placement;

pub use config::{Config, EngineConfig, LoggingConfig, ResolutionConfig, StakeConfig};
pub use placement::{PlacementEngine, PlacementQuote, PlacementRequest};
