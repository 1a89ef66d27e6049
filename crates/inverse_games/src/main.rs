//! Inverse Games - Unified CLI
//!
//! Terminal play and headless bot games for inverse tic-tac-toe.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SettingsArgs};
use inverse_games::game_over_text;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { settings } => run_play(&settings),
        Command::Simulate { settings, json } => run_simulate(&settings, json),
    }
}

/// Run the terminal UI
fn run_play(settings: &SettingsArgs) -> Result<()> {
    let config = settings.resolve().context("Invalid game settings")?;
    tui::run_tui(config)
}

/// Run a bot-versus-bot game and print the result
#[instrument(skip(settings))]
fn run_simulate(settings: &SettingsArgs, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = settings.resolve().context("Invalid game settings")?;
    info!(?config, "Starting bot simulation");

    let report = inverse_games::simulate(&config).context("Failed to create board")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for row in report.grid() {
            println!("{}", row);
        }
        println!();
        let result = game_over_text(*report.status()).unwrap_or("Game still in progress");
        println!("{} ({} moves)", result, report.moves().len());
    }

    Ok(())
}
