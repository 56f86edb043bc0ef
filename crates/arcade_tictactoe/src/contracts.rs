//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::action::Move;
use crate::error::{EngineError, IllegalMove, InvalidMove};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::session::GameState;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached a terminal outcome.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`IllegalMove::GameOver`] on a won or drawn board.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), EngineError> {
        let outcome = game.outcome();
        if outcome.is_terminal() {
            Err(IllegalMove::GameOver(outcome).into())
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`IllegalMove::WrongPlayer`] if the mover is not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), EngineError> {
        if mov.player != game.active_player() {
            Err(IllegalMove::WrongPlayer(mov.player).into())
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square exists and is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`InvalidMove`] for an out-of-range or occupied square.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), EngineError> {
        let squares = game.board().square_count();
        if mov.index >= squares {
            Err(InvalidMove::OutOfRange {
                index: mov.index,
                squares,
            }
            .into())
        } else if !game.board().is_vacant(mov.index) {
            Err(InvalidMove::Occupied(mov.index).into())
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: game live, player on turn, square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), EngineError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game not over
/// - Player's turn
/// - Square in range and empty
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), EngineError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), EngineError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
