//! Status line shown above the board.

use arcade_tictactoe::{GameState, Mode, Outcome};

/// Describes whose turn it is or how the game ended.
pub fn status_line(game: &GameState) -> String {
    match (game.outcome(), game.mode()) {
        (Outcome::Draw, _) => "It's a draw!".to_string(),
        (Outcome::Won(winner), Mode::VsComputer { computer }) if winner == computer => {
            "Computer wins!".to_string()
        }
        (Outcome::Won(_), Mode::VsComputer { .. }) => "You win!".to_string(),
        (Outcome::Won(winner), Mode::TwoPlayer) => format!("Player {} wins!", winner),
        (Outcome::InProgress, Mode::VsComputer { .. }) if game.is_computers_turn() => {
            "Computer thinking...".to_string()
        }
        (Outcome::InProgress, Mode::VsComputer { .. }) => {
            format!("Your turn ({})", game.active_player())
        }
        (Outcome::InProgress, Mode::TwoPlayer) => {
            format!("Player {}'s turn", game.active_player())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_tictactoe::{Move, Player, Rules};

    #[test]
    fn test_opening_lines() {
        let vs = GameState::standard(Mode::VsComputer {
            computer: Player::O,
        });
        assert_eq!(status_line(&vs), "Your turn (X)");
        assert_eq!(status_line(&vs.with_mode(Mode::TwoPlayer)), "Player X's turn");
    }

    #[test]
    fn test_winner_lines() {
        let moves = [
            Move::new(Player::X, 0),
            Move::new(Player::O, 4),
            Move::new(Player::X, 1),
            Move::new(Player::O, 6),
            Move::new(Player::X, 2),
        ];
        let vs = GameState::replay(
            Rules::standard(),
            Mode::VsComputer {
                computer: Player::O,
            },
            Player::X,
            &moves,
        )
        .unwrap();
        assert_eq!(status_line(&vs), "You win!");

        let two = GameState::replay(Rules::standard(), Mode::TwoPlayer, Player::X, &moves).unwrap();
        assert_eq!(status_line(&two), "Player X wins!");
    }
}
