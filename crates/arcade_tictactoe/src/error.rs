//! Error types for the board model, search engine and turn coordinator.

use crate::types::{Outcome, Player};
use derive_more::{Display, Error};
use tracing::instrument;

/// A move that cannot be placed on the board at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidMove {
    /// The index does not name a square on this board.
    #[display("Square {} is out of range for a board of {} squares", index, squares)]
    OutOfRange {
        /// Requested square.
        index: usize,
        /// Number of squares on the board.
        squares: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for InvalidMove {}

/// A well-formed move requested at the wrong time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// The game has reached a terminal outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The move names a player who is not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A human move was requested while the computer is on turn.
    #[display("The computer ({}) is on turn", _0)]
    ComputersTurn(Player),
}

impl std::error::Error for IllegalMove {}

/// Errors surfaced by the engine's public operations.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// Index out of range or square occupied.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// Wrong turn or terminal game.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),

    /// Computer move requested outside the computer's turn.
    #[display("It's not the computer's turn")]
    NotComputersTurn,

    /// Search invoked on a full board.
    #[display("No moves available")]
    NoMovesAvailable,

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::InvalidMove(err) => Some(err),
            EngineError::IllegalMove(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidMove> for EngineError {
    fn from(err: InvalidMove) -> Self {
        EngineError::InvalidMove(err)
    }
}

impl From<IllegalMove> for EngineError {
    fn from(err: IllegalMove) -> Self {
        EngineError::IllegalMove(err)
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unrecognized square symbol '{}' at offset {}", symbol, offset)]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Byte offset in the input.
        offset: usize,
    },

    /// The input contained no squares.
    #[display("Board text contains no squares")]
    NoSquares,
}

impl std::error::Error for ParseBoardError {}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
