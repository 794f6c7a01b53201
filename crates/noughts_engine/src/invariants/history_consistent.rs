//! History consistency invariant: history length matches occupied cells.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: every occupied cell has exactly one move in the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
