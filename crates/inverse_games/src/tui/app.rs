//! Application state and input handling.

use super::input::{BoardLayout, move_cursor};
use crossterm::event::KeyCode;
use inverse_games::{GameSession, TurnOutcome};
use inverse_tictactoe::{BoardError, Cell};
use tracing::{debug, info};

/// What the event loop should do after handling an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Cell,
    notice: Option<String>,
    layout: Option<BoardLayout>,
}

impl App {
    /// Creates the application around a started session.
    pub fn new(session: GameSession) -> Self {
        let cursor = {
            let board = session.board();
            Cell::new((board.row_count() / 2) as i32, (board.col_count() / 2) as i32)
        };
        Self {
            session,
            cursor,
            notice: None,
            layout: None,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Cell {
        self.cursor
    }

    /// One-line message about the last input, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Records where the board was drawn so clicks can be mapped to cells.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = Some(layout);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Control, BoardError> {
        let game_over = self.session.status().is_over();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Ok(Control::Quit);
            }
            KeyCode::Char('r') => self.restart()?,
            KeyCode::Char(' ') if game_over => self.restart()?,
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                let board = self.session.board();
                self.cursor = move_cursor(self.cursor, key, board.row_count(), board.col_count());
            }
            _ => {}
        }
        Ok(Control::Continue)
    }

    /// Handles a left click at terminal position `(column, row)`.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(cell) = self.layout.and_then(|layout| layout.cell_at(column, row)) else {
            return;
        };
        self.cursor = cell;
        self.place(cell);
    }

    fn place(&mut self, cell: Cell) {
        let placed_by = self.session.to_move();
        self.notice = match self.session.play(cell) {
            TurnOutcome::Rejected => Some(format!("Can't place at {}", cell)),
            TurnOutcome::Placed {
                reply: Some(reply), ..
            } => Some(format!("Bot played {}", reply)),
            TurnOutcome::Placed { .. } => {
                debug!(%cell, marker = %placed_by, "Move applied");
                None
            }
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) -> Result<(), BoardError> {
        debug!("Restarting game");
        self.session.restart()?;
        self.notice = Some("Game restarted".to_string());
        Ok(())
    }
}
