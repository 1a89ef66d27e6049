//! Inverse Games library - front end for the inverse tic-tac-toe engine
//!
//! # Architecture
//!
//! - **Config**: board and player settings loaded from TOML
//! - **Session**: one game between a human and the bot (or two humans)
//! - **Simulate**: headless bot-versus-bot games
//!
//! The rules themselves live in the `inverse_tictactoe` crate.
//!
//! # Example
//!
//! ```
//! use inverse_games::{GameConfig, GameSession, TurnOutcome};
//! use inverse_tictactoe::Cell;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = GameSession::new(GameConfig::default())?;
//! let outcome = session.play(Cell::new(4, 4));
//! assert!(matches!(outcome, TurnOutcome::Placed { reply: Some(_), .. }));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod session;
mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, Opponent};

// Crate-level exports - Session management
pub use session::{GameSession, TurnOutcome, game_over_text};

// Crate-level exports - Headless games
pub use simulate::{Move, SimulationReport, simulate};
