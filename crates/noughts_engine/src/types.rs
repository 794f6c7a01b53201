//! Core domain types for noughts and crosses.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// Cross (moves first).
    Cross,
    /// Naught (moves second).
    Naught,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Naught,
            Mark::Naught => Mark::Cross,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing placed yet.
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board.
///
/// Cells are only written by the engine when a move is applied, and an
/// occupied cell is never written again.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Returns the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Returns the cell at `(row, column)`, or `None` when out of range.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        Position::from_coords(row, column).map(|pos| self.cell(pos))
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The board as three rows of three cells.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(mark))
            .count()
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
///
/// Exactly one of five states; the only record of whose turn it is and
/// whether the game has ended.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum GameStatus {
    /// Cross to move.
    #[default]
    #[display("Cross to move")]
    CrossTurn,
    /// Naught to move.
    #[display("Naught to move")]
    NaughtTurn,
    /// Board full with no line.
    #[display("Draw")]
    Draw,
    /// Cross completed a line.
    #[display("Cross wins")]
    CrossWon,
    /// Naught completed a line.
    #[display("Naught wins")]
    NaughtWon,
}

impl GameStatus {
    /// The in-progress status where `mark` is to move.
    pub fn turn(mark: Mark) -> Self {
        match mark {
            Mark::Cross => GameStatus::CrossTurn,
            Mark::Naught => GameStatus::NaughtTurn,
        }
    }

    /// The terminal status where `mark` has won.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Cross => GameStatus::CrossWon,
            Mark::Naught => GameStatus::NaughtWon,
        }
    }

    /// The mark whose turn it is, or `None` once the game is over.
    pub fn to_move(self) -> Option<Mark> {
        match self {
            GameStatus::CrossTurn => Some(Mark::Cross),
            GameStatus::NaughtTurn => Some(Mark::Naught),
            GameStatus::Draw | GameStatus::CrossWon | GameStatus::NaughtWon => None,
        }
    }

    /// The winning mark, if the game was won.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::CrossWon => Some(Mark::Cross),
            GameStatus::NaughtWon => Some(Mark::Naught),
            GameStatus::CrossTurn | GameStatus::NaughtTurn | GameStatus::Draw => None,
        }
    }

    /// True for `Draw`, `CrossWon` and `NaughtWon`.
    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }
}
