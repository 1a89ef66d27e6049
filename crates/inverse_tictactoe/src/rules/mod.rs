//! Game rules for inverse tic-tac-toe.
//!
//! Pure functions that evaluate a board according to the inverse rules.
//! Rules are kept apart from grid storage so the board and the bot can
//! share them.

pub mod draw;
pub mod line;

pub use draw::is_full;
pub use line::{Axis, count_run, losing_axis};
