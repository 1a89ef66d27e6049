//! Board construction errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// Reason a board could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Row or column count is zero, or the board would be too large.
    #[display(
        "Invalid dimensions: {row_count}x{col_count} (both must be positive, at most {} squares)",
        crate::board::MAX_CELLS
    )]
    InvalidDimensions {
        /// Requested row count.
        row_count: usize,
        /// Requested column count.
        col_count: usize,
    },

    /// Losing length is zero or does not fit on the board.
    #[display(
        "Invalid losing length {losing_length} for {row_count}x{col_count} board (must be 1..={})",
        row_count.min(col_count)
    )]
    InvalidLosingLength {
        /// Requested losing length.
        losing_length: usize,
        /// Requested row count.
        row_count: usize,
        /// Requested column count.
        col_count: usize,
    },
}

/// Board construction error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What was wrong with the requested board.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<BoardErrorKind> for BoardError {
    #[track_caller]
    fn from(kind: BoardErrorKind) -> Self {
        Self::new(kind)
    }
}
