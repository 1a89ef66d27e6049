//! Headless bot-versus-bot games.

use crate::config::GameConfig;
use derive_getters::Getters;
use derive_new::new;
use inverse_tictactoe::{Board, BoardError, Bot, Cell, GameStatus, Marker};
use serde::Serialize;
use std::cell::RefCell;
use tracing::{info, instrument};

/// A marker placed at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct Move {
    /// Marker that was placed.
    pub marker: Marker,
    /// Where it was placed.
    pub cell: Cell,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.cell)
    }
}

/// Summary of a finished bot-versus-bot game.
#[derive(Debug, Clone, Serialize, Getters)]
pub struct SimulationReport {
    /// Number of board rows.
    rows: usize,
    /// Number of board columns.
    cols: usize,
    /// Run length that loses the game.
    losing_length: usize,
    /// Moves in the order they were played.
    moves: Vec<Move>,
    /// Final status.
    status: GameStatus,
    /// Final grid, one string per row.
    grid: Vec<String>,
}

/// Plays two bots against each other until neither can move.
///
/// The X bot moves first.
#[instrument(skip(config), fields(rows = config.rows(), cols = config.cols()))]
pub fn simulate(config: &GameConfig) -> Result<SimulationReport, BoardError> {
    let board = RefCell::new(config.new_board()?);
    let bots = [Bot::new(&board, Marker::X), Bot::new(&board, Marker::O)];

    let mut moves = Vec::new();
    for bot in bots.iter().cycle() {
        match bot.make_a_move() {
            Some(cell) => moves.push(Move::new(bot.marker(), cell)),
            None => break,
        }
    }

    let board: Board = board.into_inner();
    info!(moves = moves.len(), status = ?board.status(), "Simulation finished");

    Ok(SimulationReport {
        rows: board.row_count(),
        cols: board.col_count(),
        losing_length: board.losing_length(),
        moves,
        status: board.status(),
        grid: board.to_string().lines().map(str::to_string).collect(),
    })
}
