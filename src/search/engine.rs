//! Move selection for the computer player

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    depth::DepthLimit,
    minimax::{Minimax, SearchStats},
};
use crate::{
    Error, Result,
    app::EngineConfig,
    tictactoe::{Board, CENTER, Mark},
};

/// Everything the engine decided about one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The move to play (always an empty cell of the analyzed board)
    pub chosen_move: usize,
    /// Search score from the computer's perspective, `None` when the opening
    /// shortcut answered without searching
    pub score: Option<i32>,
    /// Whether the move came from the center-first opening rule
    pub opening_shortcut: bool,
    pub stats: SearchStats,
}

/// Chooses moves for the configured computer mark
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: EngineConfig,
}

impl SearchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for the computer on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalPosition`] if the board is already won or full.
    pub fn choose_move(&self, board: &Board) -> Result<usize> {
        self.analyze(board).map(|analysis| analysis.chosen_move)
    }

    /// Choose a move and report the score and search counters behind it.
    ///
    /// The search runs on a private copy of `board`; the caller's board is
    /// never modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalPosition`] if the board is already won or full.
    pub fn analyze(&self, board: &Board) -> Result<Analysis> {
        if board.is_terminal() {
            return Err(Error::TerminalPosition {
                board: board.to_string(),
            });
        }

        if self.config.opening_shortcut && board.is_empty_at(CENTER) {
            debug!(computer = %self.config.computer, "center is free, skipping search");
            return Ok(Analysis {
                chosen_move: CENTER,
                score: None,
                opening_shortcut: true,
                stats: SearchStats::default(),
            });
        }

        let mut working = *board;
        let mut search = Minimax::new(self.config.computer, self.config.depth_limit);
        let result = search.search(&mut working);
        debug_assert_eq!(&working, board, "search must restore the board");

        // A depth limit of zero plies cuts the root off before any move is
        // tried; the first legal move stands in.
        let chosen_move = match result.best_move {
            Some(pos) => pos,
            None => board
                .legal_moves()
                .first()
                .copied()
                .ok_or_else(|| Error::TerminalPosition {
                    board: board.to_string(),
                })?,
        };

        let stats = search.stats();
        debug!(
            computer = %self.config.computer,
            depth_limit = %self.config.depth_limit,
            chosen_move,
            score = result.score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            terminal_leaves = stats.terminal_leaves,
            depth_limit_leaves = stats.depth_limit_leaves,
            "search finished"
        );

        Ok(Analysis {
            chosen_move,
            score: Some(result.score),
            opening_shortcut: false,
            stats,
        })
    }
}

/// Choose the computer's move on `board` with the default opening rule.
///
/// `computer` is the mark being maximized for; its opponent is assumed to
/// reply optimally.
///
/// # Errors
///
/// Returns [`Error::TerminalPosition`] if the board is already won or full.
///
/// # Examples
///
/// ```
/// use oxo::{
///     search::{DepthLimit, choose_move},
///     tictactoe::{Board, Mark},
/// };
///
/// let board = Board::new();
/// assert_eq!(choose_move(&board, Mark::O, DepthLimit::Unlimited).unwrap(), 4);
/// ```
pub fn choose_move(board: &Board, computer: Mark, depth_limit: DepthLimit) -> Result<usize> {
    let config = EngineConfig::new(computer).with_depth_limit(depth_limit);
    SearchEngine::new(config).choose_move(board)
}
