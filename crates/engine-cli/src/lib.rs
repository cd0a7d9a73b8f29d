//! engine-cli
//!
//! Replay front-end for the matching engine: owns configuration, logging
//! setup, and the script loop. All matching happens in `engine-core`.

pub mod config;
pub mod replay;

pub use config::Config;
pub use replay::{replay, run_demo, ReplayStats};
