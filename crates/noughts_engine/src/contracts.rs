//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move may be applied at all; the
//! postcondition checks the engine invariants after it was applied.

use super::action::{Move, MoveError};
use super::engine::GameEngine;
use super::invariants::{EngineInvariants, InvariantSet};
use super::Position;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: coordinates lie on the board.
pub struct InBounds;

impl InBounds {
    /// Converts `(row, column)` to a position, or `OutOfRange`.
    #[instrument]
    pub fn check(row: usize, column: usize) -> Result<Position, MoveError> {
        Position::from_coords(row, column).ok_or(MoveError::OutOfRange { row, column })
    }
}

/// Precondition: the game has not ended.
///
/// Terminal states are refused here by name rather than by relying on the
/// turn check failing for them.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameOver` once the status is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine) -> Result<(), MoveError> {
        let status = game.status();
        if status.is_terminal() {
            Err(MoveError::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it is the moving mark's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `WrongTurn` unless `mov.mark` is to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        match game.status().to_move() {
            Some(expected) if expected == mov.mark => Ok(()),
            Some(expected) => Err(MoveError::WrongTurn {
                mark: mov.mark,
                expected,
            }),
            None => Err(MoveError::GameOver(game.status())),
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` if the target already holds a mark.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Composite precondition, checked in order: game running, right turn,
/// empty cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameEngine) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for moves.
///
/// Preconditions: `LegalMove`.
///
/// Postconditions: one more move in the history than before, and every
/// engine invariant holds.
pub struct MoveContract;

impl Contract<GameEngine, Move> for MoveContract {
    fn pre(game: &GameEngine, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move was not recorded exactly once".to_string(),
            ));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
