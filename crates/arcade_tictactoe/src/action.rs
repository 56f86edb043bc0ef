//! First-class action types.
//!
//! Moves are domain events, not side effects. They can be validated before
//! application and replayed from history.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A player placing their mark on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The square receiving the mark.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the square of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> square {}", self.player, self.index)
    }
}
