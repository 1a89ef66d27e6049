//! Inverse tic-tac-toe rules engine.
//!
//! In inverse tic-tac-toe, completing a line of the configured losing
//! length with your own markers loses the game.
//!
//! # Architecture
//!
//! - **Board**: owns the grid, validates placements, tracks the game status
//! - **Bot**: greedy opponent that plays the first cell that does not lose
//! - **Rules**: run counting along the four axes and tie detection
//!
//! # Example
//!
//! ```
//! use inverse_tictactoe::{Board, Bot, Cell, GameStatus, Marker};
//! use std::cell::RefCell;
//!
//! let board = RefCell::new(Board::new(3, 3, 3)?);
//! assert!(board.borrow_mut().try_place_marker(Marker::X, Cell::new(1, 1)));
//!
//! let bot = Bot::new(&board, Marker::O);
//! assert_eq!(bot.make_a_move(), Some(Cell::new(0, 0)));
//! assert_eq!(board.borrow().status(), GameStatus::InProgress);
//! # Ok::<(), inverse_tictactoe::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod bot;
mod error;
pub mod rules;
mod types;

pub use board::{Board, MAX_CELLS};
pub use bot::Bot;
pub use error::{BoardError, BoardErrorKind};
pub use rules::Axis;
pub use types::{Cell, GameStatus, Marker, Square};
