//! Match play between agents
//!
//! This module provides:
//! - Agent adapters (minimax engine, random baseline, scripted moves)
//! - Observer adapters (progress bar, metrics)
//! - A match runner that plays series of games and tallies results

pub mod agents;
pub mod observers;
pub mod runner;

pub use agents::{MinimaxAgent, RandomAgent, ScriptedAgent};
pub use observers::{MetricsObserver, ProgressObserver};
pub use runner::{MatchConfig, MatchResult, MatchRunner};

pub use crate::ports::{Agent, Observer};
