use std::path::Path;
use std::str::FromStr;

use log::warn;
use ratatui::style::Color;

use crate::error::{ConfigError, SetupError};
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, GameEngine, MAX_CELLS, MIN_SIDE, Player};

/// Board dimensions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
        }
    }
}

/// Display attributes for both seats.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: Player,
    pub second: Player,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: Player::new("red"),
            second: Player::new("yellow"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.width < MIN_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.width must be >= {MIN_SIDE}"
            )));
        }
        if self.board.height < MIN_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.height must be >= {MIN_SIDE}"
            )));
        }
        let cells = self.board.width.checked_mul(self.board.height);
        if cells.is_none_or(|cells| cells > MAX_CELLS) {
            return Err(ConfigError::Validation(format!(
                "board.width * board.height must be <= {MAX_CELLS}"
            )));
        }

        for (seat, player) in [("first", &self.players.first), ("second", &self.players.second)] {
            if player.color.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{seat}.color must not be empty"
                )));
            }
            if Color::from_str(&player.color).is_err() {
                return Err(ConfigError::Validation(format!(
                    "players.{seat}.color '{}' is not a recognised color",
                    player.color
                )));
            }
        }
        if self
            .players
            .first
            .color
            .eq_ignore_ascii_case(&self.players.second.color)
        {
            return Err(ConfigError::Validation(
                "players.first.color and players.second.color must differ".into(),
            ));
        }

        Ok(())
    }

    /// The two configured players, first seat first.
    pub fn players(&self) -> [Player; 2] {
        [self.players.first.clone(), self.players.second.clone()]
    }

    /// Start a game with the configured board size and players.
    pub fn new_engine(&self) -> Result<GameEngine, SetupError> {
        GameEngine::new(self.board.width, self.board.height, self.players())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
