use std::path::PathBuf;

/// Reasons a drop request is rejected. A rejected drop never changes the
/// game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: isize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("board must be at least 4x4, got {width}x{height}")]
    BoardTooSmall { width: usize, height: usize },

    #[error("board must have at most {max} cells, got {width}x{height}", max = crate::game::MAX_CELLS)]
    BoardTooLarge { width: usize, height: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
