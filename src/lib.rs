//! Noughts and crosses against a minimax opponent
//!
//! This crate provides:
//! - The 3x3 board model with line-based win detection
//! - Minimax search with alpha-beta pruning and an optional depth limit
//! - Agents and a match runner for playing series of games
//! - A console front-end (`oxo` binary)

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use app::EngineConfig;
pub use error::{Error, Result};
pub use search::{DepthLimit, Difficulty, SearchEngine, choose_move};
pub use tictactoe::{Board, Cell, Game, GameOutcome, Mark};
