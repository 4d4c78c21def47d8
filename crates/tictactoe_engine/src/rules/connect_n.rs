//! N-in-a-row rule over the whole board.

use super::{Verdict, WinStrategy, common_mark};
use crate::board::Board;
use crate::types::Mark;
use tracing::instrument;

/// Directions scanned, in priority order: horizontal, vertical, main
/// diagonal, anti-diagonal. Each is a `(row, col)` step.
const DIRECTIONS: [(usize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Wins on `run` consecutive equal marks anywhere on the board.
///
/// Unlike [`ThreeInARow`](super::ThreeInARow), every starting square and
/// every direction is considered, so the rule scales to any board size.
/// [`ConnectN::full_line`] gives the "complete a whole row, column or
/// diagonal" variant.
///
/// Runs are searched horizontally (top to bottom, left to right), then
/// vertically, then along the main diagonal direction, then along the
/// anti-diagonal direction. The first complete run wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectN {
    run: usize,
}

impl ConnectN {
    /// Creates a rule requiring `run` marks in a line. A run of zero is treated as one.
    pub fn new(run: usize) -> Self {
        Self { run: run.max(1) }
    }

    /// Requires a complete line across a board of the given size.
    pub fn full_line(size: usize) -> Self {
        Self::new(size)
    }

    /// Number of consecutive marks needed to win.
    pub fn run(&self) -> usize {
        self.run
    }

    fn run_from(
        &self,
        board: &Board,
        (row, col): (usize, usize),
        (d_row, d_col): (usize, isize),
    ) -> Option<Mark> {
        // Overflowed coordinates land off the board and end the run.
        let cells = (0..self.run).map(move |step| {
            offset((row, col), (d_row, d_col), step).unwrap_or((usize::MAX, usize::MAX))
        });
        common_mark(board, cells)
    }

    fn winner(&self, board: &Board) -> Option<Mark> {
        let size = board.size();
        if self.run > size {
            return None;
        }
        DIRECTIONS.iter().find_map(|&direction| {
            (0..size)
                .flat_map(|row| (0..size).map(move |col| (row, col)))
                .find_map(|start| self.run_from(board, start, direction))
        })
    }
}

fn offset(
    (row, col): (usize, usize),
    (d_row, d_col): (usize, isize),
    step: usize,
) -> Option<(usize, usize)> {
    let r = row.checked_add(d_row.checked_mul(step)?)?;
    let c = col.checked_add_signed(d_col.checked_mul(isize::try_from(step).ok()?)?)?;
    Some((r, c))
}

impl WinStrategy for ConnectN {
    #[instrument(skip_all, fields(size = board.size(), run = self.run))]
    fn evaluate(&self, board: &Board) -> Verdict {
        if let Some(mark) = self.winner(board) {
            Verdict::Winner(mark)
        } else if board.is_full() {
            Verdict::Tie
        } else {
            Verdict::Undecided
        }
    }

    fn name(&self) -> &'static str {
        "connect-n"
    }
}
