use serde::{Deserialize, Serialize};

use super::board::Cell;

/// Seat of a player. The engine only ever reasons about these two ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }

    /// Position in the players pair
    pub fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// Single-character marker used by the plain-text board
    pub fn symbol(self) -> char {
        match self {
            PlayerId::First => 'X',
            PlayerId::Second => 'O',
        }
    }
}

/// Display attributes of a player. Never consulted by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Player {
    pub fn new(color: impl Into<String>) -> Self {
        Player {
            color: color.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Get player name for display, falling back to the color
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.color)
    }
}
