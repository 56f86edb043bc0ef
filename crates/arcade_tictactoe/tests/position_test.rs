//! Tests for named squares.

use arcade_tictactoe::{Board, Player, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_from_label() {
    assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("Top left"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number("BOTTOM_RIGHT"), Some(Position::BottomRight));
    assert_eq!(Position::from_label_or_number(" 7 "), Some(Position::BottomCenter));
    assert_eq!(Position::from_label_or_number("top"), None);
    assert_eq!(Position::from_label_or_number(""), None);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::standard();
    board.place(0, Player::X).unwrap();
    board.place(4, Player::O).unwrap();

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
