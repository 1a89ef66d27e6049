//! Command-line interface for inverse_games.

use clap::{Args, Parser, Subcommand};
use inverse_games::{ConfigError, GameConfig, Opponent};
use inverse_tictactoe::Marker;
use std::path::PathBuf;
use tracing::instrument;

/// Inverse Games - tic-tac-toe where completing a line loses
#[derive(Parser, Debug)]
#[command(name = "inverse_games")]
#[command(about = "Inverse tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Board and player settings
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Play two bots against each other and print the result
    Simulate {
        /// Board and player settings
        #[command(flatten)]
        settings: SettingsArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Settings shared by every subcommand. Flags override the config file.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Path to the game configuration file
    #[arg(short, long, default_value = "inverse_games.toml")]
    pub config: PathBuf,

    /// Number of board rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of board columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// Run length that loses the game
    #[arg(short, long)]
    pub losing_length: Option<usize>,

    /// Marker played by the human (X moves first)
    #[arg(long)]
    pub human: Option<Marker>,

    /// Who plays the other marker
    #[arg(long, value_enum)]
    pub opponent: Option<Opponent>,
}

impl SettingsArgs {
    /// Loads the config file (or defaults), applies flag overrides and validates.
    #[instrument(skip(self), fields(config_path = %self.config.display()))]
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load_or_default(&self.config)?;
        if let Some(rows) = self.rows {
            config = config.with_rows(rows);
        }
        if let Some(cols) = self.cols {
            config = config.with_cols(cols);
        }
        if let Some(losing_length) = self.losing_length {
            config = config.with_losing_length(losing_length);
        }
        if let Some(human) = self.human {
            config = config.with_human_marker(human);
        }
        if let Some(opponent) = self.opponent {
            config = config.with_opponent(opponent);
        }
        config.validate()?;
        Ok(config)
    }
}
