//! Keyboard cursor movement and mouse-to-cell translation.

use crossterm::event::KeyCode;
use inverse_tictactoe::Cell;

/// Terminal columns per board cell.
pub const CELL_WIDTH: u16 = 3;
/// Terminal rows per board cell.
pub const CELL_HEIGHT: u16 = 1;

/// Moves the cursor one cell with the arrow keys, clamped to the board.
pub fn move_cursor(cursor: Cell, key: KeyCode, rows: usize, cols: usize) -> Cell {
    let last_row = rows.saturating_sub(1) as i32;
    let last_col = cols.saturating_sub(1) as i32;

    match key {
        KeyCode::Up => Cell::new((cursor.row - 1).max(0), cursor.col),
        KeyCode::Down => Cell::new((cursor.row + 1).min(last_row), cursor.col),
        KeyCode::Left => Cell::new(cursor.row, (cursor.col - 1).max(0)),
        KeyCode::Right => Cell::new(cursor.row, (cursor.col + 1).min(last_col)),
        _ => cursor,
    }
}

/// Where the grid was drawn on screen during the last frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Terminal column of the top-left cell.
    pub x: u16,
    /// Terminal row of the top-left cell.
    pub y: u16,
    /// Number of board rows drawn.
    pub rows: u16,
    /// Number of board columns drawn.
    pub cols: u16,
}

impl BoardLayout {
    /// Cell under the terminal position `(column, row)`, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Cell> {
        let col = column.checked_sub(self.x)? / CELL_WIDTH;
        let row = row.checked_sub(self.y)? / CELL_HEIGHT;
        (row < self.rows && col < self.cols).then(|| Cell::new(i32::from(row), i32::from(col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps_to_board() {
        let corner = Cell::new(0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Up, 3, 3), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left, 3, 3), corner);
        assert_eq!(move_cursor(corner, KeyCode::Right, 3, 3), Cell::new(0, 1));

        let far = Cell::new(2, 2);
        assert_eq!(move_cursor(far, KeyCode::Down, 3, 3), far);
        assert_eq!(move_cursor(far, KeyCode::Right, 3, 3), far);
        assert_eq!(move_cursor(far, KeyCode::Char('x'), 3, 3), far);
    }

    #[test]
    fn test_cell_at_maps_terminal_positions() {
        let layout = BoardLayout {
            x: 10,
            y: 5,
            rows: 4,
            cols: 4,
        };
        assert_eq!(layout.cell_at(10, 5), Some(Cell::new(0, 0)));
        assert_eq!(layout.cell_at(12, 5), Some(Cell::new(0, 0)));
        assert_eq!(layout.cell_at(13, 6), Some(Cell::new(1, 1)));
        assert_eq!(layout.cell_at(21, 8), Some(Cell::new(3, 3)));
        assert_eq!(layout.cell_at(22, 8), None);
        assert_eq!(layout.cell_at(9, 5), None);
        assert_eq!(layout.cell_at(10, 9), None);
    }
}
