//! Status consistency invariant: the status agrees with the board.

use super::super::rules::{check_winner, is_full};
use super::super::{GameEngine, GameStatus, Mark};
use super::Invariant;

/// Invariant: the status is the one the board implies.
///
/// - `CrossWon`/`NaughtWon`: that mark holds a line.
/// - `Draw`: the board is full and no line is held.
/// - `CrossTurn`/`NaughtTurn`: no line, free cells left, and the mark
///   counts say it is that mark's turn.
pub struct StatusConsistentInvariant;

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let winner = check_winner(board);
        let crosses = board.count(Mark::Cross);
        let naughts = board.count(Mark::Naught);

        match game.status() {
            GameStatus::CrossWon | GameStatus::NaughtWon => winner == game.status().winner(),
            GameStatus::Draw => winner.is_none() && is_full(board),
            GameStatus::CrossTurn => winner.is_none() && !is_full(board) && crosses == naughts,
            GameStatus::NaughtTurn => {
                winner.is_none() && !is_full(board) && crosses == naughts + 1
            }
        }
    }

    fn description() -> &'static str {
        "Status agrees with the board"
    }
}
