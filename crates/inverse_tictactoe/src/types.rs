//! Core domain types for inverse tic-tac-toe.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// Player marker.
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
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Marker X (moves first).
    X,
    /// Marker O.
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A zero-based (row, column) coordinate on the board.
///
/// Coordinates are signed so that requests outside the grid can be
/// expressed and rejected by the board rather than by the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: i32,
    /// Column index, counted from the left.
    pub col: i32,
}

impl Cell {
    /// Returns the cell reached by stepping `(d_row, d_col)` from this one,
    /// or `None` if either coordinate would overflow.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Some(Self::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Single-character symbol used by text renderings.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Marker::X) => 'X',
            Square::Occupied(Marker::O) => 'O',
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// X won because O completed a losing line.
    XWon,
    /// O won because X completed a losing line.
    OWon,
    /// Board filled up without a losing line.
    Tie,
}

impl GameStatus {
    /// Status for a game the given marker has won.
    pub fn won_by(marker: Marker) -> Self {
        match marker {
            Marker::X => GameStatus::XWon,
            Marker::O => GameStatus::OWon,
        }
    }

    /// Returns the winning marker, if any.
    pub fn winner(self) -> Option<Marker> {
        match self {
            GameStatus::XWon => Some(Marker::X),
            GameStatus::OWon => Some(Marker::O),
            GameStatus::InProgress | GameStatus::Tie => None,
        }
    }

    /// True once the game has reached a terminal status.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
