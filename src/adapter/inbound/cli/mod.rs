//! CLI module graph.

pub mod command;
pub mod config;
pub mod diagnostic;
pub mod input;
pub mod output;
pub mod quote;
pub mod risk;
pub mod run;
pub mod settle;
pub mod snapshot;
pub mod stake;
