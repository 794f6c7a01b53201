//! Draw detection.

use super::super::{Board, Cell};
use super::win::check_winner;

/// Checks if every cell is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// A full board with no completed line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
