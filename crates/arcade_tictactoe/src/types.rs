//! Core domain types for tic-tac-toe.

use crate::error::{InvalidMove, ParseBoardError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first by default).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Board of squares in row-major order.
///
/// Squares only ever move from `Empty` to `Occupied` through [`Board::place`].
/// The search engine is the one exception: it occupies and vacates squares on
/// its own working copy and leaves that copy as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `squares` squares.
    pub fn new(squares: usize) -> Self {
        Self {
            squares: vec![Square::Empty; squares],
        }
    }

    /// Creates an empty 3x3 board.
    pub fn standard() -> Self {
        Self::new(9)
    }

    /// Creates a board from explicit squares.
    pub fn from_squares(squares: Vec<Square>) -> Self {
        Self { squares }
    }

    /// Number of squares on the board.
    pub fn square_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square exists and is empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// On error the board is left untouched.
    pub fn place(&mut self, index: usize, player: Player) -> Result<(), InvalidMove> {
        match self.squares.get_mut(index) {
            None => Err(InvalidMove::OutOfRange {
                index,
                squares: self.squares.len(),
            }),
            Some(Square::Occupied(_)) => Err(InvalidMove::Occupied(index)),
            Some(square) => {
                *square = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// Returns a copy of the board with `player`'s mark placed at `index`.
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board, InvalidMove> {
        let mut next = self.clone();
        next.place(index, player)?;
        Ok(next)
    }

    /// Unchecked placement for the search's working board.
    pub(crate) fn occupy(&mut self, index: usize, player: Player) {
        debug_assert!(self.is_vacant(index), "search occupied a taken square");
        self.squares[index] = Square::Occupied(player);
    }

    /// Undoes [`Board::occupy`].
    pub(crate) fn vacate(&mut self, index: usize) {
        debug_assert!(!self.is_vacant(index), "search vacated an empty square");
        self.squares[index] = Square::Empty;
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a grid `width` squares wide.
    ///
    /// Empty squares show their index so a human can name them.
    pub fn display(&self, width: usize) -> String {
        let width = width.max(1);
        let rows: Vec<String> = self
            .squares
            .chunks(width)
            .enumerate()
            .map(|(row, chunk)| {
                chunk
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * width + col).to_string(),
                        Square::Occupied(player) => player.symbol().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        let divider = if width == 1 {
            "+".to_string()
        } else {
            vec!["-"; width].join("+")
        };
        rows.join(&format!("\n{}\n", divider))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parses `X`, `O` (any case) and `_`, `.`, `-` or a digit for an empty square.
///
/// Whitespace, `,`, `|` and `+` are separators. A line made only of `-` and
/// `+` is a row divider and is skipped, so the output of [`Board::display`]
/// parses back to the same board.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::new();
        let mut line_start = 0;
        for line in s.split_inclusive('\n') {
            let offset_base = line_start;
            line_start += line.len();
            if is_divider(line) {
                continue;
            }
            for (offset, symbol) in line.char_indices() {
                match symbol {
                    'X' | 'x' => squares.push(Square::Occupied(Player::X)),
                    'O' | 'o' => squares.push(Square::Occupied(Player::O)),
                    '_' | '.' | '-' => squares.push(Square::Empty),
                    c if c.is_ascii_digit() => squares.push(Square::Empty),
                    c if c.is_whitespace() || matches!(c, ',' | '|' | '+') => {}
                    _ => {
                        return Err(ParseBoardError::UnknownSymbol {
                            symbol,
                            offset: offset_base + offset,
                        });
                    }
                }
            }
        }
        if squares.is_empty() {
            return Err(ParseBoardError::NoSquares);
        }
        Ok(Self { squares })
    }
}

/// True for a `-+-+-` style line between displayed rows. Every divider holds
/// a `+`, so a row of `-` squares is never mistaken for one.
fn is_divider(line: &str) -> bool {
    let line = line.trim();
    line.contains('+') && line.chars().all(|c| matches!(c, '-' | '+' | ' '))
}

/// Outcome of a game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
