//! Exhaustive minimax search.
//!
//! The engine scores positions from the computer's point of view:
//! `+(win_base - depth)` for a computer win, `-(win_base - depth)` for a loss
//! and `0` for a draw. Subtracting the depth makes faster wins and slower
//! losses score better, and `win_base` must exceed the deepest possible ply so
//! that every win still outranks every draw.
//!
//! The search walks a single working board, placing a mark, recursing and
//! vacating the square again before the next candidate.

use crate::error::{ConfigError, EngineError};
use crate::rules::Rules;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Position score from the computer's perspective.
pub type Score = i32;

/// Default `win_base` for a board: one more than the number of squares.
pub fn default_win_base(squares: usize) -> Score {
    squares as Score + 1
}

/// Rejects a `win_base` that would let a deep win score at or below a draw.
///
/// The deepest ply on a board of `squares` squares is `squares`, so the base
/// must exceed it.
pub fn validate_win_base(win_base: Score, squares: usize) -> Result<(), ConfigError> {
    if win_base <= squares as Score {
        return Err(ConfigError::new(format!(
            "win_base {} must exceed the square count {}",
            win_base, squares
        )));
    }
    Ok(())
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen square.
    pub index: usize,
    /// Minimax score of the chosen square.
    pub score: Score,
    /// Positions visited, root candidates included.
    pub nodes: u64,
}

/// Minimax search for one computer mark under a fixed set of rules.
#[derive(Debug, Clone)]
pub struct Minimax<'a> {
    rules: &'a Rules,
    computer: Player,
    win_base: Score,
    nodes: u64,
}

impl<'a> Minimax<'a> {
    /// Creates a search playing `computer` with the default `win_base`.
    pub fn new(rules: &'a Rules, computer: Player) -> Self {
        Self {
            rules,
            computer,
            win_base: default_win_base(rules.squares()),
            nodes: 0,
        }
    }

    /// Overrides the win score base.
    ///
    /// # Errors
    ///
    /// Fails unless `win_base` exceeds the board's square count.
    pub fn with_win_base(mut self, win_base: Score) -> Result<Self, ConfigError> {
        validate_win_base(win_base, self.rules.squares())?;
        self.win_base = win_base;
        Ok(self)
    }

    /// The mark this search plays.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Score base for a win at depth zero.
    pub fn win_base(&self) -> Score {
        self.win_base
    }

    /// Positions visited since this search was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores `board` with `maximizing` telling whether the computer moves next.
    ///
    /// `board` is restored before returning.
    pub fn minimax(&mut self, board: &mut Board, depth: Score, maximizing: bool) -> Score {
        self.nodes += 1;
        let opponent = self.computer.opponent();

        if self.rules.is_win_for(board, self.computer) {
            return self.win_base - depth;
        }
        if self.rules.is_win_for(board, opponent) {
            return depth - self.win_base;
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing { self.computer } else { opponent };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        // Collected first: the board is mutated while the candidates are walked.
        let candidates: Vec<usize> = board.empty_indices().collect();
        for index in candidates {
            board.occupy(index, mover);
            let score = self.minimax(board, depth + 1, !maximizing);
            board.vacate(index);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Finds the best square for the computer along with its score.
    ///
    /// Candidates are tried in ascending index order and only a strictly
    /// better score replaces the running best, so the lowest index wins ties.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoMovesAvailable`] if the board is full.
    #[instrument(skip(self, board), fields(computer = %self.computer))]
    pub fn analyze(&mut self, board: &mut Board) -> Result<SearchReport, EngineError> {
        let start_nodes = self.nodes;
        let mut best: Option<(usize, Score)> = None;

        let candidates: Vec<usize> = board.empty_indices().collect();
        for index in candidates {
            board.occupy(index, self.computer);
            let score = self.minimax(board, 0, false);
            board.vacate(index);
            trace!(index, score, "Scored candidate");

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, score) = best.ok_or(EngineError::NoMovesAvailable)?;
        let report = SearchReport {
            index,
            score,
            nodes: self.nodes - start_nodes,
        };
        debug!(index, score, nodes = report.nodes, "Search complete");
        Ok(report)
    }

    /// Returns the index of the best square for the computer.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoMovesAvailable`] if the board is full.
    pub fn best_move(&mut self, board: &mut Board) -> Result<usize, EngineError> {
        Ok(self.analyze(board)?.index)
    }
}
