//! A single game between a human and the bot, or two humans.

use crate::config::GameConfig;
use inverse_tictactoe::{Board, BoardError, Bot, Cell, GameStatus, Marker};
use std::cell::{Ref, RefCell};
use tracing::{debug, info, instrument};

/// Result of a human move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The board refused the placement (off the board, occupied, or game over).
    Rejected,
    /// The placement was accepted.
    Placed {
        /// Cell the human played.
        cell: Cell,
        /// Cell the bot answered with, if it moved.
        reply: Option<Cell>,
    },
}

/// Game session owning the board for one game.
///
/// X always moves first. With a bot opponent the bot answers each
/// accepted human move immediately, and opens the game when it plays X.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: RefCell<Board>,
    to_move: Marker,
    last_move: Option<(Marker, Cell)>,
}

impl GameSession {
    /// Starts a new game with the given settings.
    #[instrument(skip(config), fields(rows = config.rows(), cols = config.cols()))]
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let board = config.new_board()?;
        let mut session = Self {
            config,
            board: RefCell::new(board),
            to_move: Marker::X,
            last_move: None,
        };
        session.bot_reply();
        info!("Game session started");
        Ok(session)
    }

    /// Settings this session was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Borrows the current board.
    pub fn board(&self) -> Ref<'_, Board> {
        self.board.borrow()
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.board.borrow().status()
    }

    /// Marker whose turn it is.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Most recent accepted placement.
    pub fn last_move(&self) -> Option<(Marker, Cell)> {
        self.last_move
    }

    /// Places the marker whose turn it is at `cell`, then lets the bot reply.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, cell: Cell) -> TurnOutcome {
        let marker = self.to_move;
        if !self.board.borrow_mut().try_place_marker(marker, cell) {
            debug!("Placement rejected");
            return TurnOutcome::Rejected;
        }
        self.last_move = Some((marker, cell));
        self.to_move = marker.opponent();

        let reply = self.bot_reply();
        TurnOutcome::Placed { cell, reply }
    }

    /// Lets the bot move if it is the bot's turn.
    fn bot_reply(&mut self) -> Option<Cell> {
        let bot_marker = self.config.bot_marker()?;
        if self.to_move != bot_marker {
            return None;
        }
        let cell = Bot::new(&self.board, bot_marker).make_a_move()?;
        debug!(%cell, marker = %bot_marker, "Bot moved");
        self.last_move = Some((bot_marker, cell));
        self.to_move = bot_marker.opponent();
        Some(cell)
    }

    /// Discards the board and starts a fresh game with the same settings.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), BoardError> {
        self.board = RefCell::new(self.config.new_board()?);
        self.to_move = Marker::X;
        self.last_move = None;
        self.bot_reply();
        info!("Game restarted");
        Ok(())
    }

    /// Text describing the state of the game for display.
    pub fn status_message(&self) -> String {
        match game_over_text(self.status()) {
            Some(text) => text.to_string(),
            None => format!("{} to move", self.to_move),
        }
    }
}

/// User-facing text for a finished game, or `None` while it is in progress.
pub fn game_over_text(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::XWon => Some("X has won!"),
        GameStatus::OWon => Some("O has won!"),
        GameStatus::Tie => Some("It's a tie!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_text() {
        assert_eq!(game_over_text(GameStatus::XWon), Some("X has won!"));
        assert_eq!(game_over_text(GameStatus::OWon), Some("O has won!"));
        assert_eq!(game_over_text(GameStatus::Tie), Some("It's a tie!"));
        assert_eq!(game_over_text(GameStatus::InProgress), None);
    }
}
