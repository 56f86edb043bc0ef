//! History consistency invariant: every mark on the board has a move.

use super::Invariant;
use crate::session::GameState;
use crate::types::Player;

/// Invariant: each player's mark count equals their moves in the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let played = game.history().iter().filter(|m| m.player == player).count();
            played == game.board().count(player)
        })
    }

    fn description() -> &'static str {
        "History is consistent with the marks on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_empty_game_holds() {
        let game = GameState::standard(Mode::TwoPlayer);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_after_moves_holds() {
        let game = GameState::standard(Mode::TwoPlayer)
            .request_move(4)
            .and_then(|g| g.request_move(0))
            .unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut game = GameState::standard(Mode::TwoPlayer).request_move(4).unwrap();
        game.board_mut().place(8, Player::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
