//! Observer adapters
//!
//! - [`ProgressObserver`]: progress bar with a running W/D/L tally
//! - [`MetricsObserver`]: outcome counts and game lengths

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Mark},
};

/// Tally of outcomes from one mark's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    wins: usize,
    draws: usize,
    losses: usize,
}

impl Tally {
    fn record(&mut self, outcome: GameOutcome, perspective: Mark) {
        match outcome {
            GameOutcome::Win(winner) if winner == perspective => self.wins += 1,
            GameOutcome::Win(_) => self.losses += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Progress bar observer
pub struct ProgressObserver {
    perspective: Mark,
    progress_bar: Option<ProgressBar>,
    tally: Tally,
}

impl ProgressObserver {
    /// Create a progress observer counting wins for `perspective`
    pub fn new(perspective: Mark) -> Self {
        Self {
            perspective,
            progress_bar: None,
            tally: Tally::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "{} D:{} L:{}",
            self.tally.wins, self.tally.draws, self.tally.losses
        )
    }
}

impl Observer for ProgressObserver {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome, self.perspective);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Metrics observer - Tracks outcomes and game lengths
pub struct MetricsObserver {
    perspective: Mark,
    tally: Tally,
    total_games: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    /// Create a metrics observer counting wins for `perspective`
    pub fn new(perspective: Mark) -> Self {
        Self {
            perspective,
            tally: Tally::default(),
            total_games: 0,
            move_counts: Vec::new(),
        }
    }

    pub fn wins(&self) -> usize {
        self.tally.wins
    }

    pub fn draws(&self) -> usize {
        self.tally.draws
    }

    pub fn losses(&self) -> usize {
        self.tally.losses
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    /// Get average game length in plies
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    /// Plies played in each game so far
    pub fn game_lengths(&self) -> &[usize] {
        &self.move_counts
    }
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        _mark: Mark,
        _position: usize,
    ) -> Result<()> {
        if let Some(last) = self.move_counts.last_mut() {
            *last += 1;
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.tally.record(outcome, self.perspective);
        self.total_games += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_observer_counts() {
        let mut observer = MetricsObserver::new(Mark::O);
        let board = Board::new();

        observer.on_game_start(0).unwrap();
        for step in 0..5 {
            observer.on_move(0, step, &board, Mark::X, step).unwrap();
        }
        observer.on_game_end(0, GameOutcome::Win(Mark::X)).unwrap();

        observer.on_game_start(1).unwrap();
        for step in 0..9 {
            observer.on_move(1, step, &board, Mark::X, step).unwrap();
        }
        observer.on_game_end(1, GameOutcome::Draw).unwrap();

        assert_eq!(observer.total_games(), 2);
        assert_eq!(observer.losses(), 1);
        assert_eq!(observer.draws(), 1);
        assert_eq!(observer.wins(), 0);
        assert_eq!(observer.game_lengths(), &[5, 9]);
        assert!((observer.avg_game_length() - 7.0).abs() < f64::EPSILON);
    }
}
