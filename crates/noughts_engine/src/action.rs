//! Moves and the ways a move can be refused.

use super::{GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
///
/// Moves are values: they are validated before being applied and kept in
/// the game history afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new,
)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position)
    }
}

/// Reasons a move is refused. A refused move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row or column outside 0..=2.
    #[display("Coordinates ({row}, {column}) are off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The game has already ended.
    #[display("Game is already over ({_0})")]
    GameOver(GameStatus),

    /// It is the other mark's turn.
    #[display("It's not {mark}'s turn, {expected} is to move")]
    WrongTurn {
        /// Mark that tried to move.
        mark: Mark,
        /// Mark whose turn it is.
        expected: Mark,
    },

    /// The target cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(Position),

    /// A postcondition failed after applying a move (debug builds).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl MoveError {
    /// True for refusals caused by the rules of play: game over, wrong
    /// turn, or occupied cell.
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            MoveError::GameOver(_) | MoveError::WrongTurn { .. } | MoveError::CellOccupied(_)
        )
    }
}

impl std::error::Error for MoveError {}
