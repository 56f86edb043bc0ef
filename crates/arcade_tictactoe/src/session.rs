//! Turn coordination.
//!
//! [`GameState`] is a plain value the caller owns and threads through
//! [`GameState::request_move`] and [`GameState::request_computer_move`]. Both
//! return a new state and leave the input untouched, so a failed request
//! needs no rollback.

use crate::action::Move;
use crate::contracts::{Contract, GameNotOver, MoveContract};
use crate::error::{ConfigError, EngineError, IllegalMove};
use crate::rules::Rules;
use crate::search::{Minimax, Score, SearchReport, default_win_base, validate_win_base};
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who controls each mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    TwoPlayer,
    /// A human plays against the search engine.
    VsComputer {
        /// The mark the engine plays.
        computer: Player,
    },
}

impl Mode {
    /// The engine's mark, if the engine plays.
    pub fn computer(&self) -> Option<Player> {
        match self {
            Mode::TwoPlayer => None,
            Mode::VsComputer { computer } => Some(*computer),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::TwoPlayer => write!(f, "2 Players"),
            Mode::VsComputer { computer } => write!(f, "vs Computer ({})", computer),
        }
    }
}

/// Complete game state.
///
/// The outcome is never stored; [`GameState::outcome`] derives it from the
/// board on every call.
///
/// Deserialization replays the saved history and rejects a state whose board,
/// turn or `win_base` disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    rules: Rules,
    board: Board,
    mode: Mode,
    first_player: Player,
    active_player: Player,
    history: Vec<Move>,
    win_base: Score,
}

impl GameState {
    /// Starts a game on an empty board.
    #[instrument(skip(rules), fields(squares = rules.squares()))]
    pub fn new(rules: Rules, mode: Mode, first_player: Player) -> Self {
        debug!("Starting new game");
        Self {
            board: rules.empty_board(),
            win_base: default_win_base(rules.squares()),
            rules,
            mode,
            first_player,
            active_player: first_player,
            history: Vec::new(),
        }
    }

    /// Standard 3x3 game with X moving first.
    pub fn standard(mode: Mode) -> Self {
        Self::new(Rules::standard(), mode, Player::X)
    }

    /// Overrides the score base the engine uses.
    ///
    /// # Errors
    ///
    /// Fails unless `win_base` exceeds the board's square count.
    pub fn with_win_base(mut self, win_base: Score) -> Result<Self, ConfigError> {
        validate_win_base(win_base, self.rules.squares())?;
        self.win_base = win_base;
        Ok(self)
    }

    /// Returns the rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the player on turn, or the last mover once the game is over.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns the engine's score base.
    pub fn win_base(&self) -> Score {
        self.win_base
    }

    /// Derives the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        self.rules.outcome(&self.board)
    }

    /// True while the game is live and the engine holds the active mark.
    pub fn is_computers_turn(&self) -> bool {
        self.mode.computer() == Some(self.active_player) && !self.outcome().is_terminal()
    }

    /// Empty squares, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.outcome().is_terminal() {
            return Vec::new();
        }
        self.board.empty_indices().collect()
    }

    /// Applies a human move for the active player.
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::GameOver`] once the game is over
    /// - [`IllegalMove::ComputersTurn`] while the engine is on turn
    /// - [`EngineError::InvalidMove`] for an out-of-range or occupied square
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn request_move(&self, index: usize) -> Result<GameState, EngineError> {
        GameNotOver::check(self)?;
        if self.is_computers_turn() {
            return Err(IllegalMove::ComputersTurn(self.active_player).into());
        }
        self.apply(Move::new(self.active_player, index))
    }

    /// Lets the engine choose and play a square.
    ///
    /// The chosen square is available afterwards as [`GameState::last_move`].
    ///
    /// # Errors
    ///
    /// - [`IllegalMove::GameOver`] once the game is over
    /// - [`EngineError::NotComputersTurn`] in two-player mode or on the human's turn
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn request_computer_move(&self) -> Result<GameState, EngineError> {
        GameNotOver::check(self)?;
        let computer = match self.mode.computer() {
            Some(computer) if computer == self.active_player => computer,
            _ => return Err(EngineError::NotComputersTurn),
        };

        let report = self.search(computer)?;
        info!(
            index = report.index,
            score = report.score,
            nodes = report.nodes,
            "Computer chose square"
        );
        self.apply(Move::new(computer, report.index))
    }

    /// Runs the engine for `player` without changing the game.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoMovesAvailable`] on a full board.
    #[instrument(skip(self))]
    pub fn search(&self, player: Player) -> Result<SearchReport, EngineError> {
        let mut working = self.board.clone();
        let report = Minimax::new(&self.rules, player)
            .with_win_base(self.win_base)
            .map_err(|e| EngineError::InvariantViolation(e.message))?
            .analyze(&mut working)?;
        debug_assert_eq!(working, self.board, "search leaked a move into the board");
        Ok(report)
    }

    /// Starts over with the same rules and mode.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        self.with_mode(self.mode)
    }

    /// Switches mode, which always starts a new game.
    #[instrument(skip(self))]
    pub fn with_mode(&self, mode: Mode) -> GameState {
        GameState {
            win_base: self.win_base,
            ..Self::new(self.rules.clone(), mode, self.first_player)
        }
    }

    /// Rebuilds a game from its move history.
    ///
    /// Moves are checked against the same contract as live play, but the
    /// mode's computer mark does not gate them.
    ///
    /// # Errors
    ///
    /// Returns the first move that breaks the contract.
    #[instrument(skip(rules, moves), fields(moves = moves.len()))]
    pub fn replay(
        rules: Rules,
        mode: Mode,
        first_player: Player,
        moves: &[Move],
    ) -> Result<GameState, EngineError> {
        moves
            .iter()
            .try_fold(Self::new(rules, mode, first_player), |game, action| {
                game.apply(*action)
            })
    }

    /// Validates, applies and post-checks a single move.
    fn apply(&self, action: Move) -> Result<GameState, EngineError> {
        MoveContract::pre(self, &action)?;

        let mut next = self.clone();
        next.board.place(action.index, action.player)?;
        next.history.push(action);

        let outcome = next.outcome();
        if !outcome.is_terminal() {
            next.active_player = action.player.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%action, %outcome, "Move applied");
        Ok(next)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut Vec<Move> {
        &mut self.history
    }
}

/// Wire form of [`GameState`], checked before it becomes one.
#[derive(Deserialize)]
struct SavedGame {
    rules: Rules,
    board: Board,
    mode: Mode,
    first_player: Player,
    active_player: Player,
    history: Vec<Move>,
    win_base: Score,
}

impl TryFrom<SavedGame> for GameState {
    type Error = ConfigError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let replayed =
            GameState::replay(saved.rules, saved.mode, saved.first_player, &saved.history);
        let game = replayed
            .map_err(|e| ConfigError::new(format!("Saved history does not replay: {}", e)))?
            .with_win_base(saved.win_base)?;
        if game.board != saved.board {
            return Err(ConfigError::new("Saved board does not match its move history"));
        }
        if game.active_player != saved.active_player {
            return Err(ConfigError::new(format!(
                "Saved active player {} does not match its move history",
                saved.active_player
            )));
        }
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard(Mode::VsComputer {
            computer: Player::O,
        })
    }
}
