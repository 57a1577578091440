//! Minimax console - terminal driver for the minimax engine
//!
//! Owns the live game, asks players for moves and prints the transcript.
//! The engine itself never does I/O; everything user-facing lives here.
//!
//! # Modes
//!
//! - **Self-play**: the engine plays both sides, sharing one cache
//! - **Play**: a human enters moves against the engine
//! - **Analyze**: score every move on a given board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod modes;
pub mod orchestrator;
pub mod players;

pub use analyze::AnalysisReport;
pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use modes::{SelfPlayOptions, SeriesSummary, run_analyze, run_human_game, run_self_play};
pub use orchestrator::Orchestrator;
