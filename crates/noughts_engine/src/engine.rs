//! The game engine: board, status and move history behind one mutator.

use super::action::{Move, MoveError};
use super::contracts::{Contract, InBounds, MoveContract};
use super::rules::resolve_status;
use super::{Board, Cell, GameStatus, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A single game of noughts and crosses.
///
/// Starts with an empty board and Cross to move. The board, status and
/// history change only through [`GameEngine::place_mark`] (or
/// [`GameEngine::try_move`]), and never once the status is terminal.
///
/// Serializes as its move history. Deserializing replays that history, so
/// only states reachable by legal play can be restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Move>", into = "Vec<Move>")]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::CrossTurn,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by applying `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first move that is refused.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mov in moves {
            game.try_move(*mov)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark whose turn it is, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        self.status.to_move()
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// True once the game is drawn or won.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Empty cells in row-major order.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::open_positions(&self.board)
    }

    /// Places `mark` at `(row, column)` and returns the new status.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if either coordinate is outside 0..=2
    /// - `GameOver` if the game has already ended
    /// - `WrongTurn` if it is the other mark's turn
    /// - `CellOccupied` if the cell already holds a mark
    ///
    /// The game is unchanged whenever an error is returned.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn place_mark(
        &mut self,
        mark: Mark,
        row: usize,
        column: usize,
    ) -> Result<GameStatus, MoveError> {
        let position = InBounds::check(row, column).inspect_err(|e| {
            debug!(error = %e, "Rejected move");
        })?;
        self.try_move(Move::new(mark, position))
    }

    /// Applies a pre-built move; same rules as [`GameEngine::place_mark`].
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn try_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        if let Err(e) = MoveContract::pre(self, &action) {
            debug!(error = %e, "Rejected move");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.position, Cell::Occupied(action.mark));
        self.history.push(action);
        self.status = resolve_status(action.mark, &self.board);

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, self) {
                tracing::warn!(error = %e, "Move broke an invariant, rolling back");
                *self = before;
                return Err(e);
            }
        }

        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.history.len(), "Game over");
        } else {
            info!(%action, status = %self.status, "Move applied");
        }

        Ok(self.status)
    }
}

impl TryFrom<Vec<Move>> for GameEngine {
    type Error = MoveError;

    fn try_from(moves: Vec<Move>) -> Result<Self, Self::Error> {
        Self::replay(&moves)
    }
}

impl From<GameEngine> for Vec<Move> {
    fn from(game: GameEngine) -> Self {
        game.history
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
