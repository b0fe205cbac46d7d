//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Mark};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub mark: Mark,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Mark),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play can continue
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A game in progress: one board, strict alternation, and its history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    first: Mark,
    to_move: Mark,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start an empty game with `first` to move
    pub fn new(first: Mark) -> Self {
        Game {
            board: Board::new(),
            first,
            to_move: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play the side to move at `position`.
    ///
    /// Returns the outcome once the move ends the game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] after the game has ended and
    /// [`crate::Error::InvalidMove`] for occupied or out-of-range positions.
    /// A rejected move leaves the game unchanged.
    pub fn play(&mut self, position: usize) -> Result<Option<GameOutcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.board.apply(position, self.to_move)?;
        self.moves.push(Move {
            position,
            mark: self.to_move,
        });
        self.to_move = self.to_move.opponent();
        self.outcome = GameOutcome::of(&self.board);

        Ok(self.outcome)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first(&self) -> Mark {
        self.first
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
