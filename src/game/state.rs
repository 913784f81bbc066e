use super::{Board, Player, PlayerId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(PlayerId),
    Tied,
}

/// Where a successful drop landed. Each one is a single cell update for the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub player: PlayerId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No winner yet; the turn passed to the other player.
    Continue,
    Win {
        player: PlayerId,
        cells: [Position; 4],
    },
    Tie,
}

impl DropOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DropOutcome::Continue)
    }
}

/// Result of an accepted drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub placement: Placement,
    pub outcome: DropOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) players: [Player; 2],
    pub(super) current_player: PlayerId,
    pub(super) status: GameStatus,
    pub(super) move_count: usize,
}

impl GameState {
    /// Create initial game state
    pub(super) fn initial(board: Board, players: [Player; 2]) -> Self {
        GameState {
            board,
            players,
            current_player: PlayerId::First, // First player starts
            status: GameStatus::InProgress,
            move_count: 0,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Display attributes for a seat
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Number of pieces dropped so far
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }
}
