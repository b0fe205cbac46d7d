//! Agent adapters
//!
//! - [`MinimaxAgent`]: the search engine
//! - [`RandomAgent`]: uniform over legal moves
//! - [`ScriptedAgent`]: replays a fixed list of choices

use std::collections::VecDeque;

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    app::EngineConfig,
    ports::Agent,
    search::SearchEngine,
    tictactoe::{Board, Mark},
};

/// Minimax engine wrapper
///
/// The engine is configured for one mark but the agent may be asked to play
/// either side; the configured mark is swapped per call.
pub struct MinimaxAgent {
    config: EngineConfig,
    name: String,
}

impl MinimaxAgent {
    pub fn new(config: EngineConfig, name: String) -> Self {
        Self { config, name }
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, mark: Mark) -> Result<usize> {
        SearchEngine::new(self.config.with_computer(mark)).choose_move(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random legal moves
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    /// Create a new random agent
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a new random agent with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _mark: Mark) -> Result<usize> {
        let moves = board.legal_moves();
        if moves.is_empty() || board.is_terminal() {
            return Err(Error::TerminalPosition {
                board: board.to_string(),
            });
        }
        let index = self.rng.random_range(0..moves.len());
        Ok(moves[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Replays a fixed sequence of move choices
///
/// Stands in for the console in tests. Running out of moves is reported as
/// [`Error::InvalidConfiguration`].
pub struct ScriptedAgent {
    name: String,
    moves: VecDeque<usize>,
}

impl ScriptedAgent {
    pub fn new(name: String, moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            name,
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, _board: &Board, _mark: Mark) -> Result<usize> {
        self.moves
            .pop_front()
            .ok_or_else(|| Error::InvalidConfiguration {
                message: format!("scripted agent '{}' ran out of moves", self.name),
            })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_is_reproducible() {
        let board = Board::from_string("X...O....").unwrap();
        let mut a = RandomAgent::with_seed("a".to_string(), 7);
        let mut b = RandomAgent::new("b".to_string());
        b.set_rng_seed(7).unwrap();

        for _ in 0..20 {
            let left = a.select_move(&board, Mark::X).unwrap();
            let right = b.select_move(&board, Mark::X).unwrap();
            assert_eq!(left, right);
            assert!(board.is_empty_at(left));
        }
    }

    #[test]
    fn test_random_agent_rejects_finished_board() {
        let mut agent = RandomAgent::with_seed("r".to_string(), 1);
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert!(agent.select_move(&board, Mark::O).is_err());
    }

    #[test]
    fn test_minimax_agent_plays_either_mark() {
        let mut agent = MinimaxAgent::new(EngineConfig::default(), "minimax".to_string());
        // O O .
        // X X .
        // . . .
        let board = Board::from_string("OO. XX. ...").unwrap();
        assert_eq!(agent.select_move(&board, Mark::O).unwrap(), 2);
        assert_eq!(agent.select_move(&board, Mark::X).unwrap(), 5);
    }

    #[test]
    fn test_scripted_agent_replays_in_order() {
        let mut agent = ScriptedAgent::new("script".to_string(), [0, 8]);
        let board = Board::new();
        assert_eq!(agent.select_move(&board, Mark::X).unwrap(), 0);
        assert_eq!(agent.remaining(), 1);
        assert_eq!(agent.select_move(&board, Mark::X).unwrap(), 8);
        assert!(matches!(
            agent.select_move(&board, Mark::X),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
