//! Inbound adapters: surfaces that drive the engine.

pub mod cli;
