//! Greedy opponent that avoids completing a losing line.

use crate::board::Board;
use crate::types::{Cell, Marker};
use derive_new::new;
use std::cell::RefCell;
use tracing::{debug, info, instrument};

/// Deterministic bot bound to a shared board and a fixed marker.
///
/// The bot takes the first cell in row-major order that does not lose.
/// It does no lookahead, and when every empty cell loses it takes the
/// first empty cell anyway.
#[derive(Debug, Clone, Copy, new)]
pub struct Bot<'a> {
    board: &'a RefCell<Board>,
    marker: Marker,
}

impl Bot<'_> {
    /// Marker this bot plays.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Picks the cell [`Bot::make_a_move`] would play, without placing it.
    ///
    /// Returns `None` if the game is over or the board is full.
    #[instrument(level = "debug", skip(self), fields(marker = %self.marker))]
    pub fn choose_cell(&self) -> Option<Cell> {
        let board = self.board.borrow();
        if board.status().is_over() {
            return None;
        }

        if let Some(cell) = board
            .empty_cells()
            .find(|&cell| !board.would_lose(self.marker, cell))
        {
            debug!(%cell, "Safe cell found");
            return Some(cell);
        }

        let forced = board.empty_cells().next();
        if let Some(cell) = forced {
            info!(%cell, "No safe cell left, placing on first empty cell");
        }
        forced
    }

    /// Chooses a cell and places this bot's marker there.
    ///
    /// Returns the cell played, or `None` if no move was possible.
    #[instrument(skip(self), fields(marker = %self.marker))]
    pub fn make_a_move(&self) -> Option<Cell> {
        let cell = self.choose_cell()?;
        let placed = self.board.borrow_mut().try_place_marker(self.marker, cell);
        placed.then_some(cell)
    }
}
