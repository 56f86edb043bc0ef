//! Command-line interface for arcade.

use arcade_tictactoe::Player;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arcade - tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an engine config TOML file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on the terminal
    Play {
        /// Who controls the marks
        #[arg(short, long, value_enum, default_value_t = ModeArg::VsComputer)]
        mode: ModeArg,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Board squares: X, O and _ or - for empty (separators allowed)
        #[arg(short, long)]
        board: String,

        /// Mark to search for (defaults to the configured computer mark)
        #[arg(long)]
        computer: Option<Player>,
    },

    /// Let the engine play both sides
    SelfPlay,
}

/// Game mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans share the terminal
    TwoPlayer,
    /// Play against the engine
    VsComputer,
}
