//! Text rendering of the board.

use crate::config::ConsoleConfig;
use noughts_engine::{Board, Cell, GameStatus, Mark, Position};
use unicode_width::UnicodeWidthChar;

/// Draws boards and statuses with the configured glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRenderer {
    cross: char,
    naught: char,
    empty: char,
    show_positions: bool,
}

impl BoardRenderer {
    /// Creates a renderer from console settings.
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            cross: *config.cross_glyph(),
            naught: *config.naught_glyph(),
            empty: *config.empty_glyph(),
            show_positions: *config.show_positions(),
        }
    }

    /// Glyph for a mark.
    pub fn glyph(&self, mark: Mark) -> char {
        match mark {
            Mark::Cross => self.cross,
            Mark::Naught => self.naught,
        }
    }

    fn cell_glyph(&self, pos: Position, cell: Cell) -> char {
        match cell {
            Cell::Occupied(mark) => self.glyph(mark),
            Cell::Empty if self.show_positions => {
                char::from_digit(pos.to_index() as u32 + 1, 10).unwrap_or(self.empty)
            }
            Cell::Empty => self.empty,
        }
    }

    /// Terminal columns per cell: the widest configured glyph.
    fn cell_width(&self) -> usize {
        [self.cross, self.naught, self.empty]
            .into_iter()
            .map(glyph_width)
            .max()
            .unwrap_or(1)
    }

    /// Renders the board as three lines of glyphs separated by `|`, with a
    /// line of `-` between rows as wide as a row.
    ///
    /// Every cell is padded to the widest glyph so wide glyphs stay aligned.
    pub fn render(&self, board: &Board) -> String {
        let width = self.cell_width();
        let separator = "-".repeat(width * 3 + 2);

        Position::ALL
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|pos| pad(self.cell_glyph(*pos, board.cell(*pos)), width))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", separator))
    }

    /// One-line description of a status using the configured glyphs.
    pub fn describe(&self, status: GameStatus) -> String {
        if let Some(mark) = status.to_move() {
            format!("{} ({}) to move", mark, self.glyph(mark))
        } else if let Some(mark) = status.winner() {
            format!("{} ({}) wins!", mark, self.glyph(mark))
        } else {
            "It's a draw.".to_string()
        }
    }
}

fn glyph_width(glyph: char) -> usize {
    glyph.width().unwrap_or(1).max(1)
}

fn pad(glyph: char, width: usize) -> String {
    let mut cell = glyph.to_string();
    cell.extend(std::iter::repeat_n(' ', width.saturating_sub(glyph_width(glyph))));
    cell
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::GameEngine;

    #[test]
    fn test_render_empty_board() {
        let renderer = BoardRenderer::default();
        assert_eq!(
            renderer.render(GameEngine::new().board()),
            " | | \n-----\n | | \n-----\n | | "
        );
    }

    #[test]
    fn test_render_marks_in_place() {
        let mut game = GameEngine::new();
        game.place_mark(Mark::Cross, 0, 0).expect("legal move");
        game.place_mark(Mark::Naught, 1, 2).expect("legal move");

        let renderer = BoardRenderer::default();
        assert_eq!(
            renderer.render(game.board()),
            "x| | \n-----\n | |o\n-----\n | | "
        );
    }

    #[test]
    fn test_render_numbers_open_cells() {
        let config = ConsoleConfig::from_toml("show_positions = true").expect("valid");
        let mut game = GameEngine::new();
        game.place_mark(Mark::Cross, 1, 1).expect("legal move");

        let renderer = BoardRenderer::new(&config);
        assert_eq!(
            renderer.render(game.board()),
            "1|2|3\n-----\n4|x|6\n-----\n7|8|9"
        );
    }

    #[test]
    fn test_wide_glyphs_keep_grid_aligned() {
        let config = ConsoleConfig::from_toml("cross_glyph = \"十\"\nnaught_glyph = \"〇\"")
            .expect("valid");
        let mut game = GameEngine::new();
        game.place_mark(Mark::Cross, 0, 0).expect("legal move");
        game.place_mark(Mark::Naught, 1, 1).expect("legal move");

        let rendered = BoardRenderer::new(&config).render(game.board());
        assert_eq!(
            rendered,
            "十|  |  \n--------\n  |〇|  \n--------\n  |  |  "
        );
    }

    #[test]
    fn test_describe_uses_glyphs() {
        let config = ConsoleConfig::from_toml("cross_glyph = \"X\"").expect("valid");
        let renderer = BoardRenderer::new(&config);
        assert_eq!(renderer.describe(GameStatus::CrossTurn), "Cross (X) to move");
        assert_eq!(renderer.describe(GameStatus::NaughtWon), "Naught (o) wins!");
        assert_eq!(renderer.describe(GameStatus::Draw), "It's a draw.");
    }
}
