//! Engine configuration.

use crate::error::ConfigError;
use crate::rules::{Geometry, Rules};
use crate::search::{Score, default_win_base, validate_win_base};
use crate::session::{GameState, Mode};
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board shape, mark assignment and scoring for a session.
///
/// Every field has a default, so an empty TOML file describes standard
/// tic-tac-toe with the computer playing O.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Squares per row.
    #[serde(default = "default_width")]
    width: usize,

    /// Number of rows.
    #[serde(default = "default_height")]
    height: usize,

    /// Marks in a row needed to win.
    #[serde(default = "default_line_length")]
    line_length: usize,

    /// Mark the engine plays in vs-computer mode.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Mark that moves first.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Score base for a win; defaults to one more than the square count.
    #[serde(default)]
    win_base: Option<Score>,
}

fn default_width() -> usize {
    3
}

fn default_height() -> usize {
    3
}

fn default_line_length() -> usize {
    3
}

fn default_computer() -> Player {
    Player::O
}

fn default_first_player() -> Player {
    Player::X
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            line_length: default_line_length(),
            computer: default_computer(),
            first_player: default_first_player(),
            win_base: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            width = config.width,
            height = config.height,
            computer = %config.computer,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the engine's mark.
    pub fn with_computer(mut self, computer: Player) -> Self {
        self.computer = computer;
        self
    }

    /// Checks the geometry and the win base.
    ///
    /// # Errors
    ///
    /// Fails on an invalid geometry or a `win_base` that does not exceed the
    /// deepest possible search ply.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let geometry = self.geometry()?;
        match self.win_base {
            Some(win_base) => validate_win_base(win_base, geometry.squares()),
            None => Ok(()),
        }
    }

    /// The validated board geometry.
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.width, self.height, self.line_length)
    }

    /// Rules for the configured geometry.
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        Ok(Rules::from_geometry(&self.geometry()?))
    }

    /// `win_base` if set, otherwise the default for the board size.
    pub fn effective_win_base(&self) -> Score {
        self.win_base
            .unwrap_or_else(|| default_win_base(self.width * self.height))
    }

    /// Vs-computer mode with the configured computer mark.
    pub fn vs_computer(&self) -> Mode {
        Mode::VsComputer {
            computer: self.computer,
        }
    }

    /// Starts a game in `mode` under this configuration.
    #[instrument(skip(self))]
    pub fn new_game(&self, mode: Mode) -> Result<GameState, ConfigError> {
        self.validate()?;
        GameState::new(self.rules()?, mode, self.first_player)
            .with_win_base(self.effective_win_base())
    }
}
