//! Win detection logic.

use super::Geometry;
use crate::error::ConfigError;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rows, columns and diagonals of the standard 3x3 board.
#[rustfmt::skip]
pub const STANDARD_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Step directions as (row, column) deltas: across, down, diagonal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The winning lines of a board. Every line has the same arity.
///
/// Deserialized sets go through the same shape checks as
/// [`WinPatternSet::new`]; [`Rules`](super::Rules) then checks the squares
/// against the board size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PatternData")]
pub struct WinPatternSet {
    arity: usize,
    patterns: Vec<Vec<usize>>,
}

#[derive(Deserialize)]
struct PatternData {
    arity: usize,
    patterns: Vec<Vec<usize>>,
}

impl TryFrom<PatternData> for WinPatternSet {
    type Error = ConfigError;

    fn try_from(data: PatternData) -> Result<Self, Self::Error> {
        let set = Self::new(data.patterns, usize::MAX)?;
        if set.arity != data.arity {
            return Err(ConfigError::new(format!(
                "Win patterns have {} squares, declared arity is {}",
                set.arity, data.arity
            )));
        }
        Ok(set)
    }
}

impl WinPatternSet {
    /// Builds a pattern set from explicit lines for a board of `squares` squares.
    ///
    /// # Errors
    ///
    /// Fails if there are no lines, if a line is empty, if lines differ in
    /// length, or if a line names a square off the board.
    #[instrument(skip(patterns), fields(lines = patterns.len()))]
    pub fn new(patterns: Vec<Vec<usize>>, squares: usize) -> Result<Self, ConfigError> {
        let Some(arity) = patterns.first().map(Vec::len) else {
            return Err(ConfigError::new("Win pattern set must contain at least one line"));
        };
        if arity == 0 {
            return Err(ConfigError::new("Win patterns must name at least one square"));
        }
        for line in &patterns {
            if line.len() != arity {
                return Err(ConfigError::new(format!(
                    "Win pattern {:?} has {} squares, expected {}",
                    line,
                    line.len(),
                    arity
                )));
            }
            if let Some(index) = line.iter().find(|&&i| i >= squares) {
                return Err(ConfigError::new(format!(
                    "Win pattern {:?} names square {} on a board of {} squares",
                    line, index, squares
                )));
            }
        }
        Ok(Self { arity, patterns })
    }

    /// The eight lines of the standard board.
    pub fn standard() -> Self {
        Self {
            arity: 3,
            patterns: STANDARD_LINES.iter().map(|line| line.to_vec()).collect(),
        }
    }

    /// Every horizontal, vertical and diagonal run of `line_length` squares.
    #[instrument]
    pub fn for_geometry(geometry: &Geometry) -> Self {
        let (width, height, length) = (
            geometry.width(),
            geometry.height(),
            geometry.line_length(),
        );
        let mut patterns = Vec::new();

        for (d_row, d_col) in DIRECTIONS {
            for row in 0..height {
                for col in 0..width {
                    let line: Option<Vec<usize>> = (0..length)
                        .map(|step| {
                            let r = row as isize + d_row * step as isize;
                            let c = col as isize + d_col * step as isize;
                            let on_board =
                                r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width;
                            on_board.then(|| r as usize * width + c as usize)
                        })
                        .collect();
                    if let Some(line) = line {
                        patterns.push(line);
                    }
                }
            }
        }

        Self {
            arity: length,
            patterns,
        }
    }

    /// Number of squares in each line.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The lines themselves.
    pub fn patterns(&self) -> &[Vec<usize>] {
        &self.patterns
    }

    /// True iff some line is entirely `player`'s mark.
    pub fn is_win_for(&self, board: &Board, player: Player) -> bool {
        let mark = Some(Square::Occupied(player));
        self.patterns
            .iter()
            .any(|line| line.iter().all(|&i| board.get(i) == mark))
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self, board: &Board) -> Option<Player> {
        for line in &self.patterns {
            let Some((&first, rest)) = line.split_first() else {
                continue;
            };
            if let Some(Square::Occupied(player)) = board.get(first)
                && rest.iter().all(|&i| board.get(i) == Some(Square::Occupied(player)))
            {
                return Some(player);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().expect("valid board")
    }

    #[test]
    fn test_no_winner_empty_board() {
        let patterns = WinPatternSet::standard();
        assert_eq!(patterns.winner(&Board::standard()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let patterns = WinPatternSet::standard();
        let b = board("XXX OO_ ___");
        assert_eq!(patterns.winner(&b), Some(Player::X));
        assert!(patterns.is_win_for(&b, Player::X));
        assert!(!patterns.is_win_for(&b, Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let patterns = WinPatternSet::standard();
        let b = board("OX_ XO_ __O");
        assert_eq!(patterns.winner(&b), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let patterns = WinPatternSet::standard();
        let b = board("XX_ ___ ___");
        assert_eq!(patterns.winner(&b), None);
        assert!(!patterns.is_win_for(&b, Player::X));
    }

    #[test]
    fn test_geometry_reproduces_standard_lines() {
        let geometry = Geometry::standard();
        assert_eq!(WinPatternSet::for_geometry(&geometry), WinPatternSet::standard());
    }

    #[test]
    fn test_rejects_mixed_arity() {
        let result = WinPatternSet::new(vec![vec![0, 1, 2], vec![3, 4]], 9);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_off_board_square() {
        let result = WinPatternSet::new(vec![vec![0, 1, 9]], 9);
        assert!(result.is_err());
    }
}
