//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameEngine};
use super::Invariant;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty board must only ever write empty
/// cells and must end on exactly the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
