//! Match runner: repeated games between two agents

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    Result,
    ports::{Agent, Observer},
    tictactoe::{Game, GameOutcome, Mark},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed; the agent gets `seed`, the opponent `seed + 1`
    pub seed: Option<u64>,

    /// Mark played by the agent being evaluated
    pub agent_mark: Mark,

    /// Which mark opens every game
    pub first_player: Mark,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            agent_mark: Mark::O,
            first_player: Mark::X,
        }
    }
}

/// Result of a match, counted from the agent's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub draw_rate: f64,
    pub loss_rate: f64,
}

impl MatchResult {
    /// Create a new match result
    pub fn new(total_games: usize, wins: usize, draws: usize, losses: usize) -> Self {
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a series of games between an agent and an opponent
pub struct MatchRunner {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl MatchRunner {
    /// Create a new match runner
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the runner
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Run the configured number of games
    pub fn run(&mut self, agent: &mut dyn Agent, opponent: &mut dyn Agent) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            agent.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }

        let mut wins = 0;
        let mut draws = 0;
        let mut losses = 0;

        for observer in &mut self.observers {
            observer.on_series_start(self.config.games)?;
        }

        for game_num in 0..self.config.games {
            let game = self.play_game(game_num, agent, opponent)?;
            let outcome = game.outcome().unwrap_or(GameOutcome::Draw);

            match outcome {
                GameOutcome::Win(winner) if winner == self.config.agent_mark => wins += 1,
                GameOutcome::Win(_) => losses += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_series_end()?;
        }

        Ok(MatchResult::new(self.config.games, wins, draws, losses))
    }

    /// Play one game to completion and return it with its history
    pub fn play_game(
        &mut self,
        game_num: usize,
        agent: &mut dyn Agent,
        opponent: &mut dyn Agent,
    ) -> Result<Game> {
        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        let mut game = Game::new(self.config.first_player);
        let mut step_num = 0;

        while !game.is_over() {
            let mark = game.to_move();
            let player: &mut dyn Agent = if mark == self.config.agent_mark {
                agent
            } else {
                opponent
            };

            let position = player.select_move(game.board(), mark)?;
            trace!(game_num, step_num, %mark, position, player = player.name(), "move");

            for observer in &mut self.observers {
                observer.on_move(game_num, step_num, game.board(), mark, position)?;
            }

            game.play(position)?;
            step_num += 1;
        }

        Ok(game)
    }
}
