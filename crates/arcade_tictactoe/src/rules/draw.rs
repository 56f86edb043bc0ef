//! Draw detection logic.

use super::win::WinPatternSet;
use crate::types::Board;

/// A full board on which nobody owns a line.
///
/// Win absence is checked first: a full board with a complete line is a win.
pub fn is_draw(board: &Board, patterns: &WinPatternSet) -> bool {
    patterns.winner(board).is_none() && board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::standard(), &WinPatternSet::standard()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::standard();
        board.place(4, Player::X).unwrap();
        assert!(!board.is_full());
        assert!(!is_draw(&board, &WinPatternSet::standard()));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X O / O X O
        let board: Board = "XOX OXO OXO".parse().unwrap();
        let patterns = WinPatternSet::standard();
        assert!(is_draw(&board, &patterns));
        assert!(!patterns.is_win_for(&board, Player::X));
        assert!(!patterns.is_win_for(&board, Player::O));
    }

    #[test]
    fn test_full_winning_board_is_not_draw() {
        // X X X / O O X / X O O
        let board: Board = "XXX OOX XOO".parse().unwrap();
        assert!(board.is_full());
        assert!(!is_draw(&board, &WinPatternSet::standard()));
    }

    #[test]
    fn test_not_draw_if_not_full() {
        let board: Board = "XO_ OX_ ___".parse().unwrap();
        assert!(!is_draw(&board, &WinPatternSet::standard()));
    }
}
