//! Property tests over random move sequences.

use noughts_engine::invariants::{EngineInvariants, InvariantSet};
use noughts_engine::{GameEngine, GameStatus, Mark};
use proptest::prelude::*;

fn any_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Cross), Just(Mark::Naught)]
}

/// Attempts with marks chosen at random and coordinates that sometimes fall
/// off the board, so most of them are refused.
fn attempts() -> impl Strategy<Value = Vec<(Mark, usize, usize)>> {
    prop::collection::vec((any_mark(), 0usize..4, 0usize..4), 0..40)
}

proptest! {
    #[test]
    fn reachable_states_keep_turn_balance(attempts in attempts()) {
        let mut game = GameEngine::new();

        for (mark, row, column) in attempts {
            let before = game.clone();
            match game.place_mark(mark, row, column) {
                Ok(status) => {
                    prop_assert_eq!(status, game.status());
                    prop_assert_eq!(game.history().len(), before.history().len() + 1);
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }

            let crosses = game.board().count(Mark::Cross);
            let naughts = game.board().count(Mark::Naught);
            prop_assert!(crosses == naughts || crosses == naughts + 1);
            prop_assert!(EngineInvariants::check_all(&game).is_ok());
        }
    }

    #[test]
    fn terminal_states_are_frozen(attempts in attempts(), extra in attempts()) {
        let mut game = GameEngine::new();
        for (mark, row, column) in attempts {
            let _ = game.place_mark(mark, row, column);
        }

        // Play the game out so it always ends.
        while let Some(mark) = game.to_move() {
            let pos = game.open_positions()[0];
            game.place_mark(mark, pos.row(), pos.column()).expect("open cell");
        }
        prop_assert!(matches!(
            game.status(),
            GameStatus::Draw | GameStatus::CrossWon | GameStatus::NaughtWon
        ));

        let frozen = game.clone();
        for (mark, row, column) in extra {
            prop_assert!(game.place_mark(mark, row, column).is_err());
        }
        prop_assert_eq!(game, frozen);
    }
}
