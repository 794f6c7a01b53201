//! Alternating turn invariant: Cross, Naught, Cross, Naught, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: marks alternate, starting with Cross.
///
/// The history alternates, the board holds either as many crosses as
/// naughts or one more cross, and while the game is running the mark to
/// move follows from the number of moves played.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();

        if history.first().is_some_and(|m| m.mark != Mark::Cross) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let crosses = game.board().count(Mark::Cross);
        let naughts = game.board().count(Mark::Naught);
        if crosses != naughts && crosses != naughts + 1 {
            return false;
        }

        match game.status().to_move() {
            Some(mark) => {
                let expected = if history.len() % 2 == 0 {
                    Mark::Cross
                } else {
                    Mark::Naught
                };
                mark == expected
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (Cross, Naught, Cross, ...)"
    }
}
