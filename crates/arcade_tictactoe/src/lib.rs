//! Arcade tic-tac-toe engine.
//!
//! Board model, exhaustive minimax search and turn coordination for the
//! tic-tac-toe "vs Computer" mode. The crate draws nothing and reads no input;
//! a front end owns the [`GameState`] value, calls
//! [`GameState::request_move`] or [`GameState::request_computer_move`], and
//! reads back the board and [`Outcome`].
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`WinPatternSet`], [`Rules`]
//! - **Search engine**: [`Minimax`]
//! - **Turn coordinator**: [`GameState`], guarded by [`MoveContract`]
//!
//! # Example
//!
//! ```
//! use arcade_tictactoe::{GameState, Mode, Outcome, Player};
//!
//! # fn main() -> Result<(), arcade_tictactoe::EngineError> {
//! let game = GameState::standard(Mode::VsComputer { computer: Player::O });
//! let game = game.request_move(4)?;
//! let game = game.request_computer_move()?;
//!
//! assert!(matches!(game.last_move().map(|m| m.index), Some(0 | 2 | 6 | 8)));
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod error;
mod invariants;
mod position;
mod rules;
mod search;
mod session;
mod types;

pub use action::Move;
pub use config::EngineConfig;
pub use contracts::{Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use error::{ConfigError, EngineError, IllegalMove, InvalidMove, ParseBoardError};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use position::Position;
pub use rules::{Geometry, MAX_SQUARES, Rules, STANDARD_LINES, WinPatternSet, is_draw};
pub use search::{Minimax, Score, SearchReport, default_win_base, validate_win_base};
pub use session::{GameState, Mode};
pub use types::{Board, Outcome, Player, Square};
