//! Win detection.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The 8 lines that win when filled with one mark.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// First completed line on the board, with the mark that fills it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, [Position; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = board.cell(a).mark()?;
        (board.cell(b).mark() == Some(mark) && board.cell(c).mark() == Some(mark))
            .then_some((mark, line))
    })
}

/// Returns the mark holding three in a line, if any.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn fill(board: &mut Board, line: [Position; 3], mark: Mark) {
        for pos in line {
            board.set(pos, Cell::Occupied(mark));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            for mark in [Mark::Cross, Mark::Naught] {
                let mut board = Board::new();
                fill(&mut board, line, mark);
                assert_eq!(winning_line(&board), Some((mark, line)), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_columns_use_all_three_rows() {
        // Two in a column plus a stray mark must not count.
        let mut board = Board::new();
        board.set(Position::TopCenter, Cell::Occupied(Mark::Cross));
        board.set(Position::Center, Cell::Occupied(Mark::Cross));
        board.set(Position::BottomLeft, Cell::Occupied(Mark::Naught));
        assert_eq!(check_winner(&board), None);

        board.set(Position::BottomCenter, Cell::Occupied(Mark::Cross));
        assert_eq!(check_winner(&board), Some(Mark::Cross));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::Cross));
        board.set(Position::TopCenter, Cell::Occupied(Mark::Naught));
        board.set(Position::TopRight, Cell::Occupied(Mark::Cross));
        assert_eq!(check_winner(&board), None);
    }
}
