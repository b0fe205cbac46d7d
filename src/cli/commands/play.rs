//! Play command - Interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};

use crate::{
    app::EngineConfig,
    cli::output::render_board,
    search::{Difficulty, SearchEngine},
    tictactoe::{Game, GameOutcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the engine in the terminal")]
pub struct PlayArgs {
    /// Difficulty (1/easy, 2/medium, 3/hard); asked interactively when omitted
    #[arg(long, short = 'd')]
    pub difficulty: Option<Difficulty>,

    /// Who makes the first move; asked interactively when omitted
    #[arg(long, value_enum)]
    pub first: Option<FirstMover>,

    /// Play a single game without offering a rematch
    #[arg(long)]
    pub once: bool,
}

/// Which side opens the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstMover {
    Human,
    Computer,
}

pub fn execute(args: PlayArgs, config: EngineConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), config);
    session.run(args.difficulty, args.first, !args.once)?;
    Ok(())
}

/// A console session: one or more games between a person and the engine
pub struct Session<R, W> {
    input: R,
    output: W,
    config: EngineConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: EngineConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Play games until the person declines a rematch (or after one game when
    /// `repeat` is false). Returns the outcome of every finished game.
    pub fn run(
        &mut self,
        difficulty: Option<Difficulty>,
        first: Option<FirstMover>,
        repeat: bool,
    ) -> Result<Vec<GameOutcome>> {
        let mut outcomes = Vec::new();

        loop {
            outcomes.push(self.play_game(difficulty, first)?);

            if !repeat {
                break;
            }
            let again = self.prompt("\nPlay again? (Y/N): ")?;
            if !matches!(again.as_deref().map(str::trim), Some("y" | "Y")) {
                writeln!(self.output, "Thanks for playing!")?;
                break;
            }
        }

        Ok(outcomes)
    }

    fn play_game(
        &mut self,
        difficulty: Option<Difficulty>,
        first: Option<FirstMover>,
    ) -> Result<GameOutcome> {
        let human = self.config.human();
        let computer = self.config.computer;

        writeln!(self.output, "\n=== Tic-Tac-Toe - Minimax with Alpha-Beta ===")?;
        writeln!(self.output, "You are {human}. AI is {computer}.\n")?;

        let difficulty = match difficulty {
            Some(difficulty) => difficulty,
            None => self.ask_difficulty()?,
        };
        let first = match first {
            Some(first) => first,
            None => self.ask_first()?,
        };

        let engine = SearchEngine::new(self.config.with_difficulty(difficulty));
        let mut game = Game::new(match first {
            FirstMover::Human => human,
            FirstMover::Computer => computer,
        });

        let outcome = loop {
            write!(self.output, "{}", render_board(game.board()))?;
            if let Some(outcome) = game.outcome() {
                break outcome;
            }

            if game.to_move() == human {
                let position = self.ask_move(&game)?;
                game.play(position)?;
            } else {
                writeln!(self.output, "AI thinking...")?;
                let position = engine.choose_move(game.board())?;
                game.play(position)?;
                writeln!(self.output, "AI played at position {}", position + 1)?;
            }
        };

        let message = match outcome {
            GameOutcome::Win(winner) if winner == human => "You win!",
            GameOutcome::Win(_) => "AI wins!",
            GameOutcome::Draw => "It's a draw.",
        };
        writeln!(self.output, "{message}")?;

        Ok(outcome)
    }

    fn ask_difficulty(&mut self) -> Result<Difficulty> {
        loop {
            let answer = self.require("Choose difficulty (1=Easy, 2=Medium, 3=Hard): ")?;
            // The menu takes only its numbers; names are for the command line.
            if let "1" | "2" | "3" = answer.trim() {
                return Ok(answer.parse()?);
            }
        }
    }

    fn ask_first(&mut self) -> Result<FirstMover> {
        loop {
            let answer = self.require("Do you want to start? (Y/N): ")?;
            match answer.trim().to_ascii_uppercase().as_str() {
                "Y" => return Ok(FirstMover::Human),
                "N" => return Ok(FirstMover::Computer),
                _ => {}
            }
        }
    }

    /// Read cells numbered 1-9 until the person names an empty one
    fn ask_move(&mut self, game: &Game) -> Result<usize> {
        loop {
            let answer = self.require("Your move (1-9): ")?;
            // Any integer parses; only 1-9 names a cell.
            let cell: i64 = match answer.trim().parse() {
                Ok(cell) => cell,
                Err(_) => {
                    writeln!(self.output, "Please enter a valid number 1-9.")?;
                    continue;
                }
            };
            let position = match usize::try_from(cell) {
                Ok(cell @ 1..=9) => cell - 1,
                _ => {
                    writeln!(self.output, "Enter a number from 1 to 9.")?;
                    continue;
                }
            };
            if !game.board().is_empty_at(position) {
                writeln!(self.output, "That cell is taken. Try another.")?;
                continue;
            }
            return Ok(position);
        }
    }

    /// Prompt and read one line; `None` when input is exhausted
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn require(&mut self, message: &str) -> Result<String> {
        self.prompt(message)?
            .ok_or_else(|| anyhow!("Input closed before the game finished"))
    }
}
