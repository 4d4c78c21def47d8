//! Classic three-in-a-row rule.

use super::{Verdict, WinStrategy, common_mark};
use crate::board::Board;
use crate::types::Mark;
use tracing::instrument;

/// Standard tic-tac-toe rule: three equal marks in a row, column or diagonal.
///
/// Only the first three squares of each line are inspected, whatever the
/// board size: the first three columns of every row, the first three rows
/// of every column, and the two diagonals of the top-left 3×3 region. On
/// larger boards a line of three anywhere else does not win. Use
/// [`ConnectN`](super::ConnectN) for a rule that scans the whole board.
///
/// Lines are checked rows top to bottom, then columns left to right, then
/// the main diagonal, then the anti-diagonal. The first complete line wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeInARow;

impl ThreeInARow {
    fn line(board: &Board, cells: [(usize, usize); 3]) -> Option<Mark> {
        common_mark(board, cells.into_iter())
    }

    fn winner(board: &Board) -> Option<Mark> {
        let size = board.size();

        let rows = (0..size).find_map(|r| Self::line(board, [(r, 0), (r, 1), (r, 2)]));
        let cols = || (0..size).find_map(|c| Self::line(board, [(0, c), (1, c), (2, c)]));
        let diagonal = || Self::line(board, [(0, 0), (1, 1), (2, 2)]);
        let anti_diagonal = || Self::line(board, [(0, 2), (1, 1), (2, 0)]);

        rows.or_else(cols)
            .or_else(diagonal)
            .or_else(anti_diagonal)
    }
}

impl WinStrategy for ThreeInARow {
    #[instrument(skip_all, fields(size = board.size()))]
    fn evaluate(&self, board: &Board) -> Verdict {
        if let Some(mark) = Self::winner(board) {
            Verdict::Winner(mark)
        } else if board.is_full() {
            Verdict::Tie
        } else {
            Verdict::Undecided
        }
    }

    fn name(&self) -> &'static str {
        "three-in-a-row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                if ch != '.' {
                    board.place(r, c, Square::Occupied(Mark::new(ch)));
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(ThreeInARow.evaluate(&Board::new(3)), Verdict::Undecided);
    }

    #[test]
    fn test_top_row() {
        let board = board_from(&["XXX", "OO.", "..."]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Winner(Mark::X));
    }

    #[test]
    fn test_column() {
        let board = board_from(&[".O.", "XO.", "XO."]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Winner(Mark::O));
    }

    #[test]
    fn test_both_diagonals() {
        let main = board_from(&["O..", ".O.", "..O"]);
        assert_eq!(ThreeInARow.evaluate(&main), Verdict::Winner(Mark::O));

        let anti = board_from(&["..X", ".X.", "X.."]);
        assert_eq!(ThreeInARow.evaluate(&anti), Verdict::Winner(Mark::X));
    }

    #[test]
    fn test_rows_take_priority_over_columns() {
        // Row 2 is all O and column 0 is all X; rows are checked first.
        let board = board_from(&["X..", "X..", "OOO"]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Winner(Mark::O));

        let board = board_from(&["XOO", "X..", "X.."]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Winner(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let board = board_from(&["XOX", "OOX", "XXO"]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Tie);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let board = board_from(&["XXX", "OOX", "XOO"]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Winner(Mark::X));
    }

    #[test]
    fn test_larger_board_checks_first_three_of_every_row() {
        let board = board_from(&["....", "....", "....", "OOO."]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Winner(Mark::O));
    }

    #[test]
    fn test_larger_board_ignores_lines_outside_first_three() {
        // Three in a row in columns 1..=3 is not inspected.
        let board = board_from(&[".XXX", "....", "....", "...."]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Undecided);

        // Neither is a diagonal outside the top-left 3×3 region.
        let board = board_from(&["....", ".O..", "..O.", "...O"]);
        assert_eq!(ThreeInARow.evaluate(&board), Verdict::Undecided);
    }
}
