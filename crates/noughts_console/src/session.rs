//! Interactive and scripted play over any reader/writer pair.

use crate::input::{self, Command, HELP};
use crate::render::BoardRenderer;
use anyhow::{Context, Result, anyhow};
use noughts_engine::{GameEngine, GameStatus};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Plays one game, reading moves from `input` and drawing to `output`.
///
/// Each move is made with the mark whose turn it is. Refused moves and
/// unreadable input are reported and the prompt repeats. Returns the status
/// when the game ends, the player quits, or input runs out.
#[instrument(skip_all)]
pub fn run_interactive<R, W>(
    game: &mut GameEngine,
    renderer: &BoardRenderer,
    input: R,
    output: &mut W,
) -> Result<GameStatus>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}\n", renderer.render(game.board()))?;
    let mut lines = input.lines();

    while let Some(mark) = game.to_move() {
        write!(output, "{}> ", renderer.describe(game.status()))?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed before the game ended");
            writeln!(output)?;
            return Ok(game.status());
        };
        let line = line.context("Failed to read input")?;

        match input::parse(&line) {
            Ok(Command::Place { row, column }) => match game.place_mark(mark, row, column) {
                Ok(_) => writeln!(output, "\n{}\n", renderer.render(game.board()))?,
                Err(e) => {
                    debug!(error = %e, "Move refused");
                    writeln!(output, "Illegal move: {}", e)?;
                }
            },
            Ok(Command::Help) => writeln!(output, "{}", HELP)?,
            Ok(Command::Quit) => {
                info!("Player quit");
                return Ok(game.status());
            }
            Err(e) => writeln!(output, "{}", e)?,
        }
    }

    writeln!(output, "{}", renderer.describe(game.status()))?;
    Ok(game.status())
}

/// Applies `moves` (each `row,col`) with alternating marks starting from
/// Cross, then prints the board and status.
///
/// # Errors
///
/// Fails on the first move that cannot be parsed or is refused.
#[instrument(skip(renderer, output))]
pub fn run_replay<W: Write>(
    moves: &[String],
    renderer: &BoardRenderer,
    output: &mut W,
) -> Result<GameEngine> {
    let mut game = GameEngine::new();

    for (n, text) in moves.iter().enumerate() {
        let (row, column) = input::parse_coords(text)
            .ok_or_else(|| anyhow!("Move {} ({:?}) is not `row,col`", n + 1, text))?;
        let mark = game
            .to_move()
            .ok_or_else(|| anyhow!("Move {} ({}) comes after the game ended", n + 1, text))?;
        game.place_mark(mark, row, column).map_err(|e| {
            warn!(move_number = n + 1, error = %e, "Replay stopped");
            anyhow!("Move {} ({}) refused: {}", n + 1, text, e)
        })?;
    }

    writeln!(output, "{}\n", renderer.render(game.board()))?;
    writeln!(output, "{}", renderer.describe(game.status()))?;
    Ok(game)
}
