//! Observer port - abstraction for watching a series of games
//!
//! Observers are composed on a [`MatchRunner`](crate::pipeline::MatchRunner)
//! to collect data without coupling the game loop to output formats.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Mark},
};

/// Observer trait for monitoring a match
///
/// # Event Sequence
///
/// 1. `on_series_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - For each move in the game
///    - `on_game_end(game_num, outcome)`
/// 3. `on_series_end()` - Once at the end
///
/// Every method has a no-op default.
pub trait Observer: Send {
    fn on_series_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move is chosen and before it is applied.
    ///
    /// `board` is the position the move was chosen from.
    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _mark: Mark,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A shared observer, so the caller can read it back after the runner is done
///
/// A poisoned lock still forwards events; observers hold plain counters.
impl<O: Observer> Observer for Arc<Mutex<O>> {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        lock(self).on_series_start(total_games)
    }

    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        lock(self).on_game_start(game_num)
    }

    fn on_move(
        &mut self,
        game_num: usize,
        step_num: usize,
        board: &Board,
        mark: Mark,
        position: usize,
    ) -> Result<()> {
        lock(self).on_move(game_num, step_num, board, mark, position)
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        lock(self).on_game_end(game_num, outcome)
    }

    fn on_series_end(&mut self) -> Result<()> {
        lock(self).on_series_end()
    }
}

fn lock<O>(shared: &Mutex<O>) -> MutexGuard<'_, O> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}
