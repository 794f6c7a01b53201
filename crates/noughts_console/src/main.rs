//! Noughts - play noughts and crosses in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts_console::logging::{self, BOOTSTRAP_FILTER};
use noughts_console::{BoardRenderer, Cli, Command, run_interactive, run_replay};
use noughts_engine::GameEngine;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = logging::load_config(
        cli.config.as_deref(),
        logging::env_filter(BOOTSTRAP_FILTER),
        std::io::stderr,
    )?;
    logging::init(&config);

    let renderer = BoardRenderer::new(&config);
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    match cli.command() {
        Command::Play => {
            info!("Starting interactive game");
            let mut game = GameEngine::new();
            let input = std::io::stdin().lock();
            let status = run_interactive(&mut game, &renderer, input, &mut output)?;
            info!(%status, "Session finished");
        }
        Command::Replay { moves } => {
            let game = run_replay(&moves, &renderer, &mut output)?;
            info!(status = %game.status(), "Replay finished");
        }
    }

    Ok(())
}
