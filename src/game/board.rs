use std::fmt;

use super::player::PlayerId;
use crate::error::{MoveError, SetupError};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Smallest side length that can still hold a line of four.
pub const MIN_SIDE: usize = 4;

/// Largest number of cells a board may have.
pub const MAX_CELLS: usize = 400;

/// Candidate line directions as (row step, column step): horizontal,
/// vertical, down-right diagonal, down-left diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// A grid coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major, `height * width` cells.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of `width` columns by `height` rows
    pub fn new(width: usize, height: usize) -> Result<Self, SetupError> {
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(SetupError::BoardTooSmall { width, height });
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(SetupError::BoardTooLarge { width, height })?;
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; len],
        })
    }

    /// Create the conventional 7x6 board
    pub fn standard() -> Self {
        Board {
            width: DEFAULT_COLS,
            height: DEFAULT_ROWS,
            cells: vec![Cell::Empty; DEFAULT_COLS * DEFAULT_ROWS],
        }
    }

    /// An empty board with the same dimensions
    pub fn cleared(&self) -> Self {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.width * self.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Cell lookup with signed coordinates; `None` when off the board.
    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.height)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.width)?;
        Some(self.get(row, col))
    }

    /// Lowest empty row in a column, scanning from the bottom up
    pub fn row_for_column(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: isize::try_from(col).unwrap_or(isize::MAX),
                width: self.width,
            });
        }

        let row = self
            .row_for_column(col)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row * self.width + col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Scan the whole grid for four of `player`'s pieces in a line.
    ///
    /// Every cell anchors four candidate lines (horizontal, vertical and both
    /// downward diagonals). The first line, in row-major anchor order, whose
    /// four coordinates are all on the board and all held by `player` is
    /// returned.
    pub fn find_win(&self, player: PlayerId) -> Option<[Position; 4]> {
        let target = Cell::Occupied(player);

        for y in 0..self.height {
            for x in 0..self.width {
                for (dy, dx) in DIRECTIONS {
                    if self.line_matches(y, x, dy, dx, target) {
                        return Some(std::array::from_fn(|i| {
                            let i = i as isize;
                            Position::new(
                                (y as isize + dy * i) as usize,
                                (x as isize + dx * i) as usize,
                            )
                        }));
                    }
                }
            }
        }

        None
    }

    /// Check if `player` holds four in a row anywhere on the board
    pub fn has_win(&self, player: PlayerId) -> bool {
        self.find_win(player).is_some()
    }

    fn line_matches(&self, y: usize, x: usize, dy: isize, dx: isize, target: Cell) -> bool {
        (0..4).all(|i| {
            self.cell_at(y as isize + dy * i, x as isize + dx * i) == Some(target)
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                let symbol = match self.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Occupied(player) => player.symbol(),
                };
                write!(f, " {symbol} ")?;
            }
            writeln!(f, "|")?;
        }
        write!(f, " ")?;
        for col in 0..self.width {
            write!(f, "{col:^3}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Cell = Cell::Occupied(PlayerId::First);
    const YELLOW: Cell = Cell::Occupied(PlayerId::Second);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_rejects_small_board() {
        assert_eq!(
            Board::new(3, 6),
            Err(SetupError::BoardTooSmall { width: 3, height: 6 })
        );
        assert!(Board::new(7, 3).is_err());
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_rejects_large_board() {
        assert_eq!(
            Board::new(1 << 33, 1 << 33),
            Err(SetupError::BoardTooLarge {
                width: 1 << 33,
                height: 1 << 33
            })
        );
        assert!(Board::new(100_000, 100_000).is_err());
        assert!(Board::new(21, 20).is_err());
        assert!(Board::new(20, 20).is_ok());
        assert!(Board::new(4, 100).is_ok());
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        // Drop first piece in column 3
        let row = board.drop_piece(3, RED).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), RED);

        // Drop second piece in same column
        let row = board.drop_piece(3, YELLOW).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), YELLOW);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();

        // Fill column 0
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(0, RED).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.row_for_column(0), None);
        assert_eq!(board.drop_piece(0, YELLOW), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::standard();
        assert_eq!(
            board.drop_piece(7, RED),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        for col in 0..DEFAULT_COLS {
            for _ in 0..DEFAULT_ROWS {
                board.drop_piece(col, RED).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::standard();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, RED).unwrap();
        }
        assert_eq!(
            board.find_win(PlayerId::First),
            Some([
                Position::new(5, 0),
                Position::new(5, 1),
                Position::new(5, 2),
                Position::new(5, 3),
            ])
        );
        assert!(!board.has_win(PlayerId::Second));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::standard();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, YELLOW).unwrap();
        }
        assert_eq!(
            board.find_win(PlayerId::Second),
            Some([
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(4, 3),
                Position::new(5, 3),
            ])
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::standard();
        // Create diagonal / pattern
        board.drop_piece(0, RED).unwrap();

        board.drop_piece(1, YELLOW).unwrap();
        board.drop_piece(1, RED).unwrap();

        board.drop_piece(2, YELLOW).unwrap();
        board.drop_piece(2, YELLOW).unwrap();
        board.drop_piece(2, RED).unwrap();

        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        assert!(!board.has_win(PlayerId::First));
        board.drop_piece(3, RED).unwrap();

        // Anchored at the top end, walking down-left
        assert_eq!(
            board.find_win(PlayerId::First),
            Some([
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 1),
                Position::new(5, 0),
            ])
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::standard();
        // Create diagonal \ pattern
        board.drop_piece(6, RED).unwrap();

        board.drop_piece(5, YELLOW).unwrap();
        board.drop_piece(5, RED).unwrap();

        board.drop_piece(4, YELLOW).unwrap();
        board.drop_piece(4, YELLOW).unwrap();
        board.drop_piece(4, RED).unwrap();

        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, YELLOW).unwrap();
        board.drop_piece(3, RED).unwrap();

        assert_eq!(
            board.find_win(PlayerId::First),
            Some([
                Position::new(2, 3),
                Position::new(3, 4),
                Position::new(4, 5),
                Position::new(5, 6),
            ])
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::standard();
        for col in 0..3 {
            board.drop_piece(col, RED).unwrap();
        }
        assert!(!board.has_win(PlayerId::First)); // Only 3 in a row
    }

    #[test]
    fn test_line_does_not_wrap_around_edge() {
        // Pieces at the right edge of one row and the left edge of the next
        // are adjacent in memory but not on the board.
        let mut board = Board::new(4, 4).unwrap();
        for col in 0..2 {
            board.drop_piece(col, RED).unwrap();
        }
        for col in 2..4 {
            board.drop_piece(col, YELLOW).unwrap();
            board.drop_piece(col, RED).unwrap();
        }
        assert_eq!(board.get(2, 3), RED);
        assert_eq!(board.get(3, 0), RED);
        assert!(!board.has_win(PlayerId::First));
    }

    #[test]
    fn test_non_square_boards() {
        let mut tall = Board::new(4, 9).unwrap();
        for _ in 0..4 {
            tall.drop_piece(0, RED).unwrap();
        }
        assert!(tall.has_win(PlayerId::First));

        let mut wide = Board::new(9, 4).unwrap();
        for col in 5..9 {
            wide.drop_piece(col, YELLOW).unwrap();
        }
        assert_eq!(
            wide.find_win(PlayerId::Second).map(|cells| cells[0]),
            Some(Position::new(3, 5))
        );
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(4, 4).unwrap();
        board.drop_piece(1, RED).unwrap();
        board.drop_piece(1, YELLOW).unwrap();
        let expected = concat!(
            "| .  .  .  . |\n",
            "| .  .  .  . |\n",
            "| .  O  .  . |\n",
            "| .  X  .  . |\n",
            "  0  1  2  3 \n",
        );
        assert_eq!(board.to_string(), expected);
    }
}
