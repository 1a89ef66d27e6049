//! Losing-line detection for inverse tic-tac-toe.

use super::super::{Board, Cell, Marker, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A line direction along which a run can form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Axis {
    /// Left to right along a row.
    #[display("horizontal")]
    Horizontal,
    /// Top to bottom along a column.
    #[display("vertical")]
    Vertical,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Axis {
    /// Step `(d_row, d_col)` in the positive direction of this axis.
    ///
    /// The negative direction is the negated step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::MainDiagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts `marker` squares walking away from `origin` (exclusive),
/// stopping at the first other square, the board edge, the coordinate
/// limits, or `max_steps`.
fn count_direction(
    board: &Board,
    marker: Marker,
    origin: Cell,
    (d_row, d_col): (i32, i32),
    max_steps: usize,
) -> usize {
    let mut count = 0;
    let mut next = origin.offset(d_row, d_col);
    while let Some(cell) = next {
        if count == max_steps || board.square(cell) != Some(Square::Occupied(marker)) {
            break;
        }
        count += 1;
        next = cell.offset(d_row, d_col);
    }
    count
}

/// Length of the run of `marker` through `origin` along `axis`.
///
/// `origin` counts as holding `marker` whatever it currently holds, so the
/// result is the run a placement there would produce. Each direction walks
/// at most `max_steps` squares, which bounds the cost when only a threshold
/// matters.
pub fn count_run(
    board: &Board,
    marker: Marker,
    origin: Cell,
    axis: Axis,
    max_steps: usize,
) -> usize {
    let (d_row, d_col) = axis.delta();
    1 + count_direction(board, marker, origin, (d_row, d_col), max_steps)
        + count_direction(board, marker, origin, (-d_row, -d_col), max_steps)
}

/// Returns the first axis on which `marker` at `origin` makes a run of at
/// least the board's losing length, or `None` if the placement is safe.
#[instrument(level = "trace", skip(board))]
pub fn losing_axis(board: &Board, marker: Marker, origin: Cell) -> Option<Axis> {
    let losing_length = board.losing_length();
    let reach = losing_length.saturating_sub(1);
    Axis::iter().find(|&axis| count_run(board, marker, origin, axis, reach) >= losing_length)
}
