//! Board state and the inverse tic-tac-toe rules engine.

use crate::error::{BoardError, BoardErrorKind};
use crate::rules::{self, Axis};
use crate::types::{Cell, GameStatus, Marker, Square};
use tracing::{debug, instrument};

/// Largest number of squares a board may hold.
pub const MAX_CELLS: usize = 1 << 24;

/// Rectangular inverse tic-tac-toe board.
///
/// Completing a run of `losing_length` or more of your own markers along
/// any axis loses the game. Once the game is over the board rejects every
/// further placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    row_count: usize,
    col_count: usize,
    losing_length: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
    /// Squares still empty, kept in step with `squares`.
    empty_count: usize,
    status: GameStatus,
}

impl Board {
    /// Creates an empty board.
    ///
    /// Both dimensions must be positive and fit in an `i32` cell
    /// coordinate, and the board may hold at most [`MAX_CELLS`] squares.
    /// `losing_length` must lie in `1..=min(row_count, col_count)`.
    #[instrument]
    pub fn new(
        row_count: usize,
        col_count: usize,
        losing_length: usize,
    ) -> Result<Self, BoardError> {
        let fits = |n: usize| n > 0 && i32::try_from(n).is_ok();
        let cell_count = row_count
            .checked_mul(col_count)
            .filter(|&n| n <= MAX_CELLS && fits(row_count) && fits(col_count));
        let Some(cell_count) = cell_count else {
            return Err(BoardErrorKind::InvalidDimensions {
                row_count,
                col_count,
            }
            .into());
        };
        if losing_length == 0 || losing_length > row_count.min(col_count) {
            return Err(BoardErrorKind::InvalidLosingLength {
                losing_length,
                row_count,
                col_count,
            }
            .into());
        }

        debug!("Created empty board");
        Ok(Self {
            row_count,
            col_count,
            losing_length,
            squares: vec![Square::Empty; cell_count],
            empty_count: cell_count,
            status: GameStatus::InProgress,
        })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Run length that loses the game.
    pub fn losing_length(&self) -> usize {
        self.losing_length
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        let row = usize::try_from(cell.row).ok().filter(|&r| r < self.row_count)?;
        let col = usize::try_from(cell.col).ok().filter(|&c| c < self.col_count)?;
        Some(row * self.col_count + col)
    }

    /// True if `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Gets the square at `cell`, or `None` if it is off the board.
    pub fn square(&self, cell: Cell) -> Option<Square> {
        self.index(cell).map(|i| self.squares[i])
    }

    /// True iff `cell` is on the board and holds no marker.
    pub fn is_cell_empty(&self, cell: Cell) -> bool {
        self.square(cell) == Some(Square::Empty)
    }

    /// Number of squares still empty.
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// True if no empty square is left.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        // Dimensions were checked to fit in i32 at construction.
        let cols = self.col_count as i32;
        (0..self.row_count as i32)
            .flat_map(move |row| (0..cols).map(move |col| Cell::new(row, col)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |&cell| self.is_cell_empty(cell))
    }

    /// Whether placing `marker` at `cell` would complete a run of at least
    /// the losing length through `cell` on any axis.
    ///
    /// The square at `cell` is treated as already holding `marker`.
    /// Off-board cells never lose.
    #[instrument(level = "trace", skip(self))]
    pub fn would_lose(&self, marker: Marker, cell: Cell) -> bool {
        self.losing_axis(marker, cell).is_some()
    }

    /// The first axis on which placing `marker` at `cell` would lose.
    pub fn losing_axis(&self, marker: Marker, cell: Cell) -> Option<Axis> {
        if !self.contains(cell) {
            return None;
        }
        rules::losing_axis(self, marker, cell)
    }

    /// Places `marker` at `cell` if the move is legal.
    ///
    /// Returns `false` without touching the board when the game is over,
    /// the cell is off the board, or the cell is occupied. Otherwise the
    /// marker is placed, the status is updated and `true` is returned even
    /// if the placement ended the game.
    #[instrument(level = "debug", skip(self), fields(status = ?self.status))]
    pub fn try_place_marker(&mut self, marker: Marker, cell: Cell) -> bool {
        if self.status.is_over() {
            return false;
        }
        let Some(index) = self.index(cell) else {
            return false;
        };
        if self.squares[index] != Square::Empty {
            return false;
        }

        self.squares[index] = Square::Occupied(marker);
        self.empty_count -= 1;

        if let Some(axis) = self.losing_axis(marker, cell) {
            self.status = GameStatus::won_by(marker.opponent());
            debug!(%axis, status = ?self.status, "Losing line completed");
        } else if self.is_full() {
            self.status = GameStatus::Tie;
            debug!("Board full, game tied");
        }
        true
    }

    /// Returns the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.squares.chunks(self.col_count).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty_and_in_progress() {
        let board = Board::new(4, 6, 3).unwrap();
        assert_eq!(board.squares().len(), 24);
        assert_eq!(board.empty_count(), 24);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_cells_are_row_major() {
        let board = Board::new(2, 3, 1).unwrap();
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[3], Cell::new(1, 0));
        assert_eq!(cells.last(), Some(&Cell::new(1, 2)));
    }

    #[test]
    fn test_is_cell_empty_is_bounds_safe() {
        let board = Board::new(3, 3, 3).unwrap();
        assert!(board.is_cell_empty(Cell::new(2, 2)));
        assert!(!board.is_cell_empty(Cell::new(3, 0)));
        assert!(!board.is_cell_empty(Cell::new(0, -1)));
    }

    #[test]
    fn test_would_lose_off_board_is_false() {
        let board = Board::new(3, 3, 1).unwrap();
        assert!(board.would_lose(Marker::X, Cell::new(0, 0)));
        assert!(!board.would_lose(Marker::X, Cell::new(-1, 0)));
    }

    #[test]
    fn test_display_renders_grid() {
        let mut board = Board::new(2, 3, 2).unwrap();
        board.try_place_marker(Marker::X, Cell::new(0, 0));
        board.try_place_marker(Marker::O, Cell::new(1, 2));
        assert_eq!(board.to_string(), "X..\n..O");
    }

    #[test]
    fn test_losing_length_one_loses_on_first_move() {
        let mut board = Board::new(2, 2, 1).unwrap();
        assert!(board.try_place_marker(Marker::O, Cell::new(1, 1)));
        assert_eq!(board.status(), GameStatus::XWon);
    }
}
