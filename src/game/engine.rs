use log::{debug, info};

use super::state::{DropOutcome, GameState, GameStatus, MoveResult, Placement};
use super::{Board, Player};
use crate::error::{MoveError, SetupError};

/// Owns one game and applies the only state transition: dropping a piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Start a game on a `width` x `height` board. Both sides must be at
    /// least 4 and the board at most `MAX_CELLS` cells.
    pub fn new(width: usize, height: usize, players: [Player; 2]) -> Result<Self, SetupError> {
        Ok(Self::start(Board::new(width, height)?, players))
    }

    /// Start a game on the conventional 7x6 board
    pub fn standard(players: [Player; 2]) -> Self {
        Self::start(Board::standard(), players)
    }

    /// A new game with the same board size and players as this one
    pub fn fresh(&self) -> Self {
        Self::start(self.state.board.cleared(), self.state.players.clone())
    }

    fn start(board: Board, players: [Player; 2]) -> Self {
        info!(
            "new {}x{} game: {} vs {}",
            board.width(),
            board.height(),
            players[0].name(),
            players[1].name()
        );
        GameEngine {
            state: GameState::initial(board, players),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// Every precondition is checked before the board is touched, so an
    /// `Err` leaves the state exactly as it was.
    pub fn drop_piece(&mut self, column: isize) -> Result<MoveResult, MoveError> {
        let result = self.try_drop(column);
        if let Err(err) = &result {
            debug!("rejected drop into column {}: {}", column, err);
        }
        result
    }

    fn try_drop(&mut self, column: isize) -> Result<MoveResult, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let width = self.state.board.width();
        let col = usize::try_from(column)
            .ok()
            .filter(|&c| c < width)
            .ok_or(MoveError::InvalidColumn { column, width })?;

        let player = self.state.current_player;
        let row = self.state.board.drop_piece(col, player.to_cell())?;
        self.state.move_count += 1;
        debug!(
            "{} dropped into column {} (row {})",
            self.state.player(player).name(),
            col,
            row
        );

        let outcome = if let Some(cells) = self.state.board.find_win(player) {
            self.state.status = GameStatus::Won(player);
            info!(
                "{} wins after {} moves",
                self.state.player(player).name(),
                self.state.move_count
            );
            DropOutcome::Win { player, cells }
        } else if self.state.board.is_full() {
            self.state.status = GameStatus::Tied;
            info!("tie after {} moves", self.state.move_count);
            DropOutcome::Tie
        } else {
            self.state.current_player = player.other();
            DropOutcome::Continue
        };

        Ok(MoveResult {
            placement: Placement { row, col, player },
            outcome,
        })
    }

    /// Throw away the current game and start over with the same board size
    /// and players.
    pub fn reset(&mut self) {
        *self = self.fresh();
    }
}
