//! Arcade - terminal front end for the tic-tac-toe engine.

#![warn(missing_docs)]

mod cli;
mod status;

use anyhow::{Context, Result, bail};
use arcade_tictactoe::{
    Board, EngineConfig, GameState, Minimax, Mode, Player, Position, SearchReport,
};
use clap::Parser;
use cli::{Cli, Command, ModeArg};
use status::status_line;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play { mode } => run_play(&config, mode),
        Command::BestMove { board, computer } => run_best_move(&config, &board, computer),
        Command::SelfPlay => run_self_play(&config),
    }
}

/// Reads the config file if one was given, otherwise uses defaults.
fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => Ok(EngineConfig::from_file(path)?),
        None => {
            debug!("No config file given, using defaults");
            Ok(EngineConfig::default())
        }
    }
}

/// Interactive game on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: &EngineConfig, mode: ModeArg) -> Result<()> {
    let mode = match mode {
        ModeArg::TwoPlayer => Mode::TwoPlayer,
        ModeArg::VsComputer => config.vs_computer(),
    };
    let mut game = config.new_game(mode)?;
    info!(%mode, "Starting game");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        writeln!(stdout, "\n{}\n", game.board().display(game.rules().width()))?;
        writeln!(stdout, "{}", status_line(&game))?;

        if game.outcome().is_terminal() {
            write!(stdout, "New game? [y/N] ")?;
            stdout.flush()?;
            match lines.next().transpose()? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                    game = game.reset();
                    continue;
                }
                _ => return Ok(()),
            }
        }

        if game.is_computers_turn() {
            game = game.request_computer_move()?;
            continue;
        }

        write!(stdout, "> ")?;
        stdout.flush()?;
        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };

        match line.trim() {
            "q" | "quit" => return Ok(()),
            "r" | "reset" => {
                game = game.reset();
                continue;
            }
            input => {
                let Some(index) = parse_square(input, &game) else {
                    writeln!(stdout, "Unrecognized square '{}'", input)?;
                    continue;
                };
                match game.request_move(index) {
                    Ok(next) => game = next,
                    Err(e) => {
                        warn!(error = %e, index, "Move rejected");
                        writeln!(stdout, "{}", e)?;
                    }
                }
            }
        }
    }
}

/// Square index, or a named square on the standard board.
fn parse_square(input: &str, game: &GameState) -> Option<usize> {
    if let Ok(index) = input.parse::<usize>() {
        return Some(index);
    }
    let standard = game.rules().squares() == 9 && game.rules().width() == 3;
    standard
        .then(|| Position::from_label_or_number(input))
        .flatten()
        .map(Position::to_index)
}

/// Prints the engine's choice for a single board.
#[instrument(skip(config))]
fn run_best_move(config: &EngineConfig, board: &str, computer: Option<Player>) -> Result<()> {
    let computer = computer.unwrap_or(*config.computer());
    let report = analyze_board(config, board, computer)?;

    println!(
        "{} plays square {} (score {}, {} nodes)",
        computer, report.index, report.score, report.nodes
    );
    Ok(())
}

/// Parses `board` and searches it for `computer`, refusing finished games.
fn analyze_board(config: &EngineConfig, board: &str, computer: Player) -> Result<SearchReport> {
    let rules = config.rules()?;
    let mut board: Board = board.parse().context("Failed to parse board")?;
    if board.square_count() != rules.squares() {
        bail!(
            "Board has {} squares, config expects {}",
            board.square_count(),
            rules.squares()
        );
    }

    let outcome = rules.outcome(&board);
    if outcome.is_terminal() {
        bail!("Game is already over ({})", outcome);
    }

    let report = Minimax::new(&rules, computer)
        .with_win_base(config.effective_win_base())?
        .analyze(&mut board)?;
    Ok(report)
}

/// Engine against itself until the game ends.
#[instrument(skip(config))]
fn run_self_play(config: &EngineConfig) -> Result<()> {
    let mut game = config.new_game(Mode::TwoPlayer)?;

    while !game.outcome().is_terminal() {
        let report = game.search(game.active_player())?;
        debug!(player = %game.active_player(), index = report.index, "Engine move");
        game = game.request_move(report.index)?;
    }

    println!("{}\n", game.board().display(game.rules().width()));
    println!("{}", game.outcome());
    info!(moves = game.history().len(), outcome = %game.outcome(), "Self-play finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_board_finds_block() {
        let config = EngineConfig::default();
        let report = analyze_board(&config, "O__ XX_ ___", Player::O).unwrap();
        assert_eq!(report.index, 5);
    }

    #[test]
    fn test_analyze_board_rejects_won_game() {
        // X owns the top row with squares still open.
        let config = EngineConfig::default();
        let err = analyze_board(&config, "XXX OO_ ___", Player::O).unwrap_err();
        assert!(err.to_string().contains("already over"));
    }

    #[test]
    fn test_analyze_board_rejects_wrong_size() {
        let err = analyze_board(&EngineConfig::default(), "X_O_", Player::O).unwrap_err();
        assert!(err.to_string().contains("config expects 9"));
    }
}
