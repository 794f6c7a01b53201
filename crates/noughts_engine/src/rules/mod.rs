//! Game rules for noughts and crosses.
//!
//! Pure functions over a `Board`. Kept apart from board storage so the
//! engine, the contracts and the invariants all judge a board the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, GameStatus, Mark};
use tracing::instrument;

/// Status after `mover` has just placed a mark on `board`.
///
/// A completed line wins for the mover, even on a full board. Otherwise a
/// full board is a draw, and anything else passes the turn.
#[instrument(skip(board))]
pub fn resolve_status(mover: Mark, board: &Board) -> GameStatus {
    if check_winner(board).is_some() {
        GameStatus::won_by(mover)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::turn(mover.opponent())
    }
}
