//! Evaluate command - Play the engine against an opponent for many games

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::{
    app::EngineConfig,
    cli::{
        config::apply_overrides,
        output::{print_kv, print_section, print_stats_table},
    },
    pipeline::{
        Agent, MatchConfig, MatchResult, MatchRunner, MetricsObserver, MinimaxAgent,
        ProgressObserver, RandomAgent,
    },
    search::Difficulty,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate the engine against an opponent")]
pub struct EvaluateArgs {
    /// Opponent to evaluate against
    #[arg(long, short = 'o', value_enum, default_value_t = OpponentKind::Random)]
    pub opponent: OpponentKind,

    /// Number of evaluation games
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Engine difficulty (1/easy, 2/medium, 3/hard)
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Difficulty of a minimax opponent (defaults to hard)
    #[arg(long)]
    pub opponent_difficulty: Option<Difficulty>,

    /// Which side makes the first move
    #[arg(long, value_enum, default_value_t = Opener::Opponent)]
    pub first: Opener,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to a JSON file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentKind {
    Random,
    Minimax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Opener {
    Computer,
    Opponent,
}

pub fn execute(args: EvaluateArgs, config: EngineConfig) -> Result<()> {
    let config = apply_overrides(config, None, args.difficulty);
    let mut engine = MinimaxAgent::new(config, "Minimax".to_string());

    let mut opponent: Box<dyn Agent> = match args.opponent {
        OpponentKind::Random => Box::new(RandomAgent::new("Random".to_string())),
        OpponentKind::Minimax => {
            let difficulty = args.opponent_difficulty.unwrap_or_default();
            Box::new(MinimaxAgent::new(
                config.with_difficulty(difficulty),
                format!("Minimax ({difficulty})"),
            ))
        }
    };

    let first_player = match args.first {
        Opener::Computer => config.computer,
        Opener::Opponent => config.human(),
    };

    print_section("Evaluation Configuration");
    print_kv(
        "Engine",
        &format!("{} ({})", config.computer, config.depth_limit),
    );
    print_kv("Opponent", opponent.name());
    print_kv("First move", &first_player.to_string());
    print_kv("Games", &args.games.to_string());

    let match_config = MatchConfig {
        games: args.games,
        seed: args.seed,
        agent_mark: config.computer,
        first_player,
    };

    let mut runner = MatchRunner::new(match_config);
    if !args.no_progress {
        runner = runner.with_observer(Box::new(ProgressObserver::new(config.computer)));
    }
    let metrics = Arc::new(Mutex::new(MetricsObserver::new(config.computer)));
    runner = runner.with_observer(Box::new(Arc::clone(&metrics)));

    let result = runner.run(&mut engine, opponent.as_mut())?;
    let avg_length = metrics
        .lock()
        .map_err(|_| anyhow::anyhow!("Metrics observer lock poisoned"))?
        .avg_game_length();

    print_section("Evaluation Results");
    let total = result.total_games.to_string();
    let wins = format!("{} ({:.1}%)", result.wins, result.win_rate * 100.0);
    let draws = format!("{} ({:.1}%)", result.draws, result.draw_rate * 100.0);
    let losses = format!("{} ({:.1}%)", result.losses, result.loss_rate * 100.0);
    let avg_length = format!("{avg_length:.2} plies");
    print_stats_table(&[
        ("Total games", total.as_str()),
        ("Wins", wins.as_str()),
        ("Draws", draws.as_str()),
        ("Losses", losses.as_str()),
        ("Avg game length", avg_length.as_str()),
    ]);

    if let Some(path) = &args.export {
        export_results(&result, &args, &config, path)?;
        println!("\n✓ Results exported to: {}", path.display());
    }

    Ok(())
}

/// Export evaluation results to JSON
fn export_results(
    result: &MatchResult,
    args: &EvaluateArgs,
    config: &EngineConfig,
    path: &PathBuf,
) -> Result<()> {
    use std::fs::File;

    #[derive(Serialize)]
    struct EvaluationExport<'a> {
        engine: &'a EngineConfig,
        opponent: OpponentKind,
        first: Opener,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
        result: &'a MatchResult,
    }

    let export = EvaluationExport {
        engine: config,
        opponent: args.opponent,
        first: args.first,
        seed: args.seed,
        result,
    };

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &export)?;
    Ok(())
}
