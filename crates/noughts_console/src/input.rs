//! Parsing of player input lines.

use derive_more::{Display, Error};
use noughts_engine::Position;
use tracing::instrument;

/// What a line of input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current mark at `(row, column)`.
    ///
    /// Coordinates are passed through unchecked so the engine reports
    /// out-of-range values itself.
    Place {
        /// Row, 0-based.
        row: usize,
        /// Column, 0-based.
        column: usize,
    },
    /// Show usage.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Enter a move, 'help' or 'quit'")]
    Empty,
    /// The line matched no known form.
    #[display("Can't read {input:?} as a move; try 'help'")]
    Unrecognized {
        /// The offending input.
        input: String,
    },
}

/// Usage text shown for `help`.
pub const HELP: &str = "\
Moves:
  <row> <col>   0-based, e.g. `1 2` or `1,2`
  <1-9>         cell number, counted left to right from the top
  <label>       e.g. `center`, `top-left`, `bottom right`
Other:
  help          show this text
  quit          leave the game";

/// Parses a line of input.
#[instrument]
pub fn parse(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match line.to_ascii_lowercase().as_str() {
        "help" | "h" | "?" => return Ok(Command::Help),
        "quit" | "q" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    if let Some((row, column)) = parse_coords(line) {
        return Ok(Command::Place { row, column });
    }

    Position::from_label_or_number(line)
        .map(|pos| Command::Place {
            row: pos.row(),
            column: pos.column(),
        })
        .ok_or_else(|| InputError::Unrecognized {
            input: line.to_string(),
        })
}

/// Parses `row col`, `row,col` or `row, col`.
pub fn parse_coords(s: &str) -> Option<(usize, usize)> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some((row, column)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_forms() {
        for line in ["1 2", "1,2", " 1, 2 ", "1\t2"] {
            assert_eq!(parse(line), Ok(Command::Place { row: 1, column: 2 }), "{line:?}");
        }
    }

    #[test]
    fn test_out_of_range_coordinates_pass_through() {
        assert_eq!(parse("5 0"), Ok(Command::Place { row: 5, column: 0 }));
    }

    #[test]
    fn test_cell_numbers_and_labels() {
        assert_eq!(parse("5"), Ok(Command::Place { row: 1, column: 1 }));
        assert_eq!(parse("top right"), Ok(Command::Place { row: 0, column: 2 }));
        assert_eq!(parse("Bottom-Left"), Ok(Command::Place { row: 2, column: 0 }));
    }

    #[test]
    fn test_help_and_quit() {
        assert_eq!(parse("HELP"), Ok(Command::Help));
        assert_eq!(parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(parse("   "), Err(InputError::Empty));
        assert!(matches!(parse("1 2 3"), Err(InputError::Unrecognized { .. })));
        assert!(matches!(parse("somewhere"), Err(InputError::Unrecognized { .. })));
        assert!(matches!(parse("0"), Err(InputError::Unrecognized { .. })));
    }
}
