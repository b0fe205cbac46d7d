//! Agent port - abstraction over anything that picks moves
//!
//! This port lets the match runner treat the minimax engine, random
//! baselines, scripted move lists, and a human at the console the same way.

use crate::{
    Result,
    tictactoe::{Board, Mark},
};

/// A source of moves for one side of a game
///
/// # Examples
///
/// ```
/// use oxo::{
///     ports::Agent,
///     tictactoe::{Board, Mark},
/// };
///
/// struct FirstEmpty;
///
/// impl Agent for FirstEmpty {
///     fn select_move(&mut self, board: &Board, _mark: Mark) -> oxo::Result<usize> {
///         board.legal_moves().first().copied().ok_or(oxo::Error::GameOver)
///     }
///
///     fn name(&self) -> &str {
///         "first-empty"
///     }
/// }
///
/// let mut agent = FirstEmpty;
/// assert_eq!(agent.select_move(&Board::new(), Mark::X).unwrap(), 0);
/// ```
pub trait Agent: Send {
    /// Select a move for `mark` on `board`.
    ///
    /// The returned position (0-8) must be an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is finished or the agent has no move to
    /// offer.
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize>;

    /// Get the agent's name.
    ///
    /// Used for identification in results and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// The default implementation does nothing, suitable for deterministic
    /// agents.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
