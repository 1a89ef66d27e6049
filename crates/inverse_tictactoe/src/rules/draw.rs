//! Tie detection logic for inverse tic-tac-toe.

use super::super::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board where the last placement did not complete a losing line
/// is a tie. Reads the board's running empty count, so the check does not
/// depend on board size.
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}
