//! Command-line interface for the noughts console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts and crosses in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play noughts and crosses on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game interactively on stdin/stdout
    Play,

    /// Apply a scripted sequence of moves and print the result
    Replay {
        /// Moves as `row,col`, alternating from Cross
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
