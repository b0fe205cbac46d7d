//! Adversarial search for the computer player
//!
//! Depth-first minimax with alpha-beta pruning over a [`Board`], scoring
//! finished games by how quickly they are won or lost and, under a
//! [`DepthLimit`], scoring cut-off positions with a small positional bias.
//!
//! [`Board`]: crate::tictactoe::Board

pub mod depth;
pub mod engine;
pub mod eval;
pub mod minimax;

pub use depth::{DepthLimit, Difficulty};
pub use engine::{Analysis, SearchEngine, choose_move};
pub use eval::{MAX_POSITIONAL_SCORE, WIN_SCORE, positional_score, terminal_score};
pub use minimax::{Minimax, SearchResult, SearchStats};
