//! oxo CLI - Noughts and crosses against a minimax opponent
//!
//! This CLI provides:
//! - An interactive game in the terminal
//! - Move suggestions for arbitrary positions
//! - Batch evaluation of the engine against other agents

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oxo::cli::{
    commands::{evaluate, play, suggest},
    config::{init_logging, load_engine_config},
};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Noughts and crosses against a minimax opponent", long_about = None)]
struct Cli {
    /// JSON engine configuration (computer mark, depth limit, opening shortcut)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log search statistics to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine in the terminal
    Play(play::PlayArgs),

    /// Show the engine's move for a board
    Suggest(suggest::SuggestArgs),

    /// Evaluate the engine against an opponent
    Evaluate(evaluate::EvaluateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_engine_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Play(args) => play::execute(args, config),
        Commands::Suggest(args) => suggest::execute(args, config),
        Commands::Evaluate(args) => evaluate::execute(args, config),
    }
}
