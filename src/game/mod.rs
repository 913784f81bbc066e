//! Core Connect Four game logic: board representation, player types, and the
//! engine that owns a game and applies drops.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS, MIN_SIDE, Position};
pub use engine::GameEngine;
pub use player::{Player, PlayerId};
pub use state::{DropOutcome, GameState, GameStatus, MoveResult, Placement};

pub use crate::error::{MoveError, SetupError};
