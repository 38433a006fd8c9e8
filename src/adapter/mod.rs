//! Adapters around the pure engine.

pub mod inbound;
