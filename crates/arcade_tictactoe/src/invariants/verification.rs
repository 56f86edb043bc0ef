//! Formal verification of board placement using the Kani model checker.
//!
//! These harnesses check placement for every square index and mark on the
//! standard board.

#[cfg(kani)]
mod proofs {
    use crate::{Board, Player, Square};

    fn any_player() -> Player {
        if kani::any() { Player::X } else { Player::O }
    }

    /// Proves: a successful placement fills exactly the requested square.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_place_fills_one_square() {
        let index: usize = kani::any();
        let player = any_player();
        let mut board = Board::standard();

        if board.place(index, player).is_ok() {
            assert!(index < 9);
            assert_eq!(board.get(index), Some(Square::Occupied(player)));
            assert_eq!(board.empty_indices().count(), 8);
        }
    }

    /// Proves: placing on an occupied square leaves the board unchanged.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_occupied_square_rejected() {
        let index: usize = kani::any();
        kani::assume(index < 9);
        let mut board = Board::standard();
        board.place(index, any_player()).unwrap();
        let before = board.clone();

        assert!(board.place(index, any_player()).is_err());
        assert_eq!(board, before);
    }
}
