//! Matches between agents, observers and saved results

use std::sync::{Arc, Mutex};

use oxo::{
    Difficulty, EngineConfig, Error, Result,
    pipeline::{
        MatchConfig, MatchResult, MatchRunner, MetricsObserver, MinimaxAgent, Observer,
        RandomAgent, ScriptedAgent,
    },
    tictactoe::{Board, GameOutcome, Mark},
};
use tempfile::tempdir;

/// Records the observer callbacks as short strings
struct Recorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                events: Arc::clone(&events),
            },
            events,
        )
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Observer for Recorder {
    fn on_series_start(&mut self, total_games: usize) -> Result<()> {
        self.push(format!("series {total_games}"));
        Ok(())
    }

    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        self.push(format!("start {game_num}"));
        Ok(())
    }

    fn on_move(
        &mut self,
        _game_num: usize,
        _step_num: usize,
        _board: &Board,
        mark: Mark,
        position: usize,
    ) -> Result<()> {
        self.push(format!("{mark}{position}"));
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        self.push(format!("end {game_num} {outcome:?}"));
        Ok(())
    }

    fn on_series_end(&mut self) -> Result<()> {
        self.push("done".to_string());
        Ok(())
    }
}

fn engine() -> MinimaxAgent {
    MinimaxAgent::new(EngineConfig::default(), "Minimax".to_string())
}

#[test]
fn test_engine_never_loses_to_random_play() {
    for first_player in [Mark::X, Mark::O] {
        let config = MatchConfig {
            games: 50,
            seed: Some(7),
            agent_mark: Mark::O,
            first_player,
        };
        let mut runner = MatchRunner::new(config);
        let mut opponent = RandomAgent::new("Random".to_string());

        let result = runner.run(&mut engine(), &mut opponent).unwrap();

        assert_eq!(result.total_games, 50);
        assert_eq!(result.losses, 0, "lost with {first_player} opening");
        assert_eq!(result.wins + result.draws, 50);
    }
}

#[test]
fn test_seeded_matches_repeat_exactly() {
    let run = || {
        let config = MatchConfig {
            games: 30,
            seed: Some(11),
            agent_mark: Mark::X,
            first_player: Mark::X,
        };
        let mut agent = RandomAgent::new("A".to_string());
        let mut opponent = RandomAgent::new("B".to_string());
        MatchRunner::new(config)
            .run(&mut agent, &mut opponent)
            .unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_scripted_game_and_observer_events() {
    // X: 0, 1, 6, 5, 8. The engine centers, then blocks on 2 and 3, and
    // takes the first of the two drawn cells left.
    let mut human = ScriptedAgent::new("Human".to_string(), [0, 1, 6, 5, 8]);
    let (recorder, events) = Recorder::new();
    let config = MatchConfig {
        games: 1,
        seed: None,
        agent_mark: Mark::O,
        first_player: Mark::X,
    };

    let result = MatchRunner::new(config)
        .with_observer(Box::new(recorder))
        .run(&mut engine(), &mut human)
        .unwrap();

    assert_eq!(result.draws, 1);
    assert_eq!(human.remaining(), 0);
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            "series 1", "start 0", "X0", "O4", "X1", "O2", "X6", "O3", "X5", "O7", "X8",
            "end 0 Draw", "done",
        ]
    );
}

#[test]
fn test_play_game_returns_the_history() {
    let mut human = ScriptedAgent::new("Human".to_string(), [0, 1, 6, 5, 8]);
    let mut runner = MatchRunner::new(MatchConfig {
        games: 1,
        ..MatchConfig::default()
    });

    let game = runner.play_game(0, &mut engine(), &mut human).unwrap();

    let positions: Vec<usize> = game.moves().iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);
    assert_eq!(game.outcome(), Some(GameOutcome::Draw));
    assert!(game.board().is_full());
}

#[test]
fn test_scripted_agent_running_dry_stops_the_match() {
    let mut human = ScriptedAgent::new("Human".to_string(), [0]);
    let mut runner = MatchRunner::new(MatchConfig {
        games: 1,
        ..MatchConfig::default()
    });

    let err = runner.run(&mut engine(), &mut human).unwrap_err();
    assert!(matches!(err, Error::InvalidConfiguration { .. }));
}

#[test]
fn test_illegal_scripted_move_is_rejected() {
    // The engine takes the center, so replaying it is an occupied cell.
    let mut human = ScriptedAgent::new("Human".to_string(), [0, 4]);
    let mut runner = MatchRunner::new(MatchConfig {
        games: 1,
        ..MatchConfig::default()
    });

    let err = runner.run(&mut engine(), &mut human).unwrap_err();
    assert!(matches!(err, Error::InvalidMove { position: 4, .. }));
}

#[test]
fn test_metrics_follow_played_games() {
    let mut agent = MinimaxAgent::new(
        EngineConfig::default().with_difficulty(Difficulty::Easy),
        "Easy".to_string(),
    );
    let mut opponent = RandomAgent::with_seed("Random".to_string(), 3);
    let mut runner = MatchRunner::new(MatchConfig {
        games: 20,
        seed: None,
        agent_mark: Mark::X,
        first_player: Mark::X,
    });

    let mut metrics = MetricsObserver::new(Mark::X);
    let mut losses = 0;
    for game_num in 0..20 {
        let game = runner.play_game(game_num, &mut agent, &mut opponent).unwrap();
        let outcome = game.outcome().unwrap();
        if outcome == GameOutcome::Win(Mark::O) {
            losses += 1;
        }

        metrics.on_game_start(game_num).unwrap();
        for (step, mv) in game.moves().iter().enumerate() {
            metrics
                .on_move(game_num, step, game.board(), mv.mark, mv.position)
                .unwrap();
        }
        metrics.on_game_end(game_num, outcome).unwrap();
    }

    assert_eq!(metrics.total_games(), 20);
    assert_eq!(metrics.losses(), losses);
    assert_eq!(metrics.wins() + metrics.draws() + metrics.losses(), 20);
    // X opens, so the shortest game is an X win on the fifth ply.
    assert!(metrics.game_lengths().iter().all(|&n| (5..=9).contains(&n)));
}

#[test]
fn test_shared_metrics_are_readable_after_the_match() {
    let metrics = Arc::new(Mutex::new(MetricsObserver::new(Mark::O)));
    let mut human = ScriptedAgent::new("Human".to_string(), [0, 1, 6, 5, 8]);
    let config = MatchConfig {
        games: 1,
        seed: None,
        agent_mark: Mark::O,
        first_player: Mark::X,
    };

    let result = MatchRunner::new(config)
        .with_observer(Box::new(Arc::clone(&metrics)))
        .run(&mut engine(), &mut human)
        .unwrap();

    let metrics = metrics.lock().unwrap();
    assert_eq!(metrics.total_games(), result.total_games);
    assert_eq!(metrics.draws(), 1);
    assert_eq!(metrics.game_lengths(), &[9]);
    assert!((metrics.avg_game_length() - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_result_save_and_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("result.json");

    let result = MatchResult::new(10, 3, 6, 1);
    result.save(&path).unwrap();

    let loaded = MatchResult::load(&path).unwrap();
    assert_eq!(
        (loaded.total_games, loaded.wins, loaded.draws, loaded.losses),
        (10, 3, 6, 1)
    );
    assert!((loaded.draw_rate - result.draw_rate).abs() < 1e-12);
    assert!((loaded.loss_rate - 0.1).abs() < 1e-12);
}

#[test]
fn test_loading_a_missing_result_fails() {
    let dir = tempdir().unwrap();
    let err = MatchResult::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
