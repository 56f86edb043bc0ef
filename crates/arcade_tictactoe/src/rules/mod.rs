//! Game rules.
//!
//! Pure functions and value types for evaluating a board: which lines win,
//! whether the board is full, and the outcome they add up to. Rules are
//! separated from board storage so the search engine and the turn
//! coordinator share one definition of a terminal state.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{STANDARD_LINES, WinPatternSet};

use crate::error::ConfigError;
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Largest board the exhaustive search is allowed to run on.
pub const MAX_SQUARES: usize = 9;

/// Rectangular board shape and the length of a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    width: usize,
    height: usize,
    line_length: usize,
}

impl Geometry {
    /// Creates a validated geometry.
    ///
    /// # Errors
    ///
    /// Rejects empty boards, boards larger than [`MAX_SQUARES`], and line
    /// lengths below two or longer than both sides.
    #[instrument]
    pub fn new(width: usize, height: usize, line_length: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::new(format!(
                "Board dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if width * height > MAX_SQUARES {
            return Err(ConfigError::new(format!(
                "A {}x{} board has {} squares; exhaustive search supports at most {}",
                width,
                height,
                width * height,
                MAX_SQUARES
            )));
        }
        if line_length < 2 || line_length > width.max(height) {
            return Err(ConfigError::new(format!(
                "Line length {} does not fit a {}x{} board",
                line_length, width, height
            )));
        }
        Ok(Self {
            width,
            height,
            line_length,
        })
    }

    /// The 3x3, three-in-a-row board.
    pub fn standard() -> Self {
        Self {
            width: 3,
            height: 3,
            line_length: 3,
        }
    }

    /// Squares per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Squares in a winning line.
    pub fn line_length(&self) -> usize {
        self.line_length
    }

    /// Total number of squares.
    pub fn squares(&self) -> usize {
        self.width * self.height
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Board size plus its win patterns; fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulesData")]
pub struct Rules {
    squares: usize,
    width: usize,
    patterns: WinPatternSet,
}

impl Rules {
    /// Standard tic-tac-toe.
    pub fn standard() -> Self {
        Self {
            squares: 9,
            width: 3,
            patterns: WinPatternSet::standard(),
        }
    }

    /// Rules for a rectangular geometry.
    pub fn from_geometry(geometry: &Geometry) -> Self {
        Self {
            squares: geometry.squares(),
            width: geometry.width(),
            patterns: WinPatternSet::for_geometry(geometry),
        }
    }

    /// Rules with hand-written win patterns.
    ///
    /// `width` is only used for display.
    ///
    /// # Errors
    ///
    /// Fails if the board exceeds [`MAX_SQUARES`] or the patterns do not fit it.
    #[instrument(skip(patterns))]
    pub fn custom(
        squares: usize,
        width: usize,
        patterns: Vec<Vec<usize>>,
    ) -> Result<Self, ConfigError> {
        if squares == 0 || squares > MAX_SQUARES {
            return Err(ConfigError::new(format!(
                "Board must have between 1 and {} squares, got {}",
                MAX_SQUARES, squares
            )));
        }
        Ok(Self {
            squares,
            width: width.max(1),
            patterns: WinPatternSet::new(patterns, squares)?,
        })
    }

    /// Number of squares on the board.
    pub fn squares(&self) -> usize {
        self.squares
    }

    /// Squares per displayed row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The win patterns.
    pub fn patterns(&self) -> &WinPatternSet {
        &self.patterns
    }

    /// A fresh board of the right size.
    pub fn empty_board(&self) -> Board {
        Board::new(self.squares)
    }

    /// True iff `player` owns a complete line.
    pub fn is_win_for(&self, board: &Board, player: Player) -> bool {
        self.patterns.is_win_for(board, player)
    }

    /// Full board with no complete line.
    pub fn is_draw(&self, board: &Board) -> bool {
        is_draw(board, &self.patterns)
    }

    /// Derives the outcome of `board`. Wins take precedence over a full board.
    pub fn outcome(&self, board: &Board) -> Outcome {
        if let Some(winner) = self.patterns.winner(board) {
            Outcome::Won(winner)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

#[derive(Deserialize)]
struct RulesData {
    squares: usize,
    width: usize,
    patterns: WinPatternSet,
}

impl TryFrom<RulesData> for Rules {
    type Error = ConfigError;

    fn try_from(data: RulesData) -> Result<Self, Self::Error> {
        Rules::custom(data.squares, data.width, data.patterns.patterns().to_vec())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}
