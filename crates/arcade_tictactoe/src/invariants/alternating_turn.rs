//! Alternating turn invariant: marks alternate starting with the first player.

use super::Invariant;
use crate::session::GameState;

/// Invariant: Players alternate turns.
///
/// The history starts with the first player and never repeats a mover. While
/// the game is live the active player is the one who did not move last; once
/// it is over the active player stays on the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.active_player() == game.first_player();
        };

        if history[0].player != game.first_player() {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = if game.outcome().is_terminal() {
            last.player
        } else {
            last.player.opponent()
        };
        game.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
