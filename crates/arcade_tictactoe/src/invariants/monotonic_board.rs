//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::session::GameState;

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must succeed square by
/// square and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = game.rules().empty_board();

        for mov in game.history() {
            if reconstructed.place(mov.index, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Move, Player, Square};

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::standard(Mode::TwoPlayer);
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = GameState::standard(Mode::TwoPlayer)
            .request_move(0)
            .and_then(|g| g.request_move(4))
            .and_then(|g| g.request_move(2))
            .and_then(|g| g.request_move(6))
            .expect("legal moves");
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::standard(Mode::TwoPlayer).request_move(4).unwrap();
        *game.board_mut() = "____O____".parse().unwrap();
        assert_eq!(game.board().get(4), Some(Square::Occupied(Player::O)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_square_in_history_violates() {
        let mut game = GameState::standard(Mode::TwoPlayer).request_move(4).unwrap();
        game.history_mut().push(Move::new(Player::O, 4));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
