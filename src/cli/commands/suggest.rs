//! Suggest command - Ask the engine for a move on a given board

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::EngineConfig,
    cli::{
        config::apply_overrides,
        output::{format_number, print_kv, print_section, render_board},
    },
    search::{Difficulty, SearchEngine},
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Show the engine's move for a board")]
pub struct SuggestArgs {
    /// Board as 9 cells, row-major: X, O, and '.' for empty
    /// (whitespace and '|' are ignored, e.g. "X.O|.X.|...")
    pub board: String,

    /// Mark the engine plays (`x` or `o`)
    #[arg(long, short = 'c')]
    pub computer: Option<Mark>,

    /// Difficulty (1/easy, 2/medium, 3/hard)
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Print the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SuggestArgs, config: EngineConfig) -> Result<()> {
    let board = Board::from_string(&args.board)?;
    let config = apply_overrides(config, args.computer, args.difficulty);

    let counts = board.mark_counts();
    if counts.x.abs_diff(counts.o) > 1 {
        tracing::warn!(
            x = counts.x,
            o = counts.o,
            "mark counts differ by more than one; moves did not alternate"
        );
    }

    let analysis = SearchEngine::new(config)
        .analyze(&board)
        .with_context(|| format!("No move to suggest for '{}'", args.board))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    print_section("Engine Suggestion");
    print!("{}", render_board(&board));
    print_kv("Computer", &config.computer.to_string());
    print_kv("Depth limit", &config.depth_limit.to_string());
    print_kv(
        "Move",
        &format!(
            "{} (index {})",
            analysis.chosen_move + 1,
            analysis.chosen_move
        ),
    );
    match analysis.score {
        Some(score) => print_kv("Score", &score.to_string()),
        None => print_kv("Score", "n/a (center opening)"),
    }
    print_kv("Nodes searched", &format_number(analysis.stats.nodes));
    print_kv("Pruned branches", &format_number(analysis.stats.cutoffs));

    Ok(())
}
