//! Win detection rules.
//!
//! The engine never inspects lines itself. It hands the board to a
//! [`WinStrategy`] after every placement and acts on the returned
//! [`Verdict`], so alternate rule sets can be swapped in without touching
//! turn handling.

mod connect_n;
mod three_in_a_row;

pub use connect_n::ConnectN;
pub use three_in_a_row::ThreeInARow;

use crate::board::Board;
use crate::types::Mark;

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// No line is complete and empty squares remain.
    Undecided,
    /// The board is full and no line is complete.
    Tie,
    /// A line of this mark is complete.
    Winner(Mark),
}

/// A rule set that decides whether a board is won, tied or still open.
pub trait WinStrategy: std::fmt::Debug + Send + Sync {
    /// Evaluates the board.
    fn evaluate(&self, board: &Board) -> Verdict;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Returns the mark shared by every square in `cells`, if they all hold the same one.
///
/// Off-board cells and empty squares never match.
pub(crate) fn common_mark(
    board: &Board,
    mut cells: impl Iterator<Item = (usize, usize)>,
) -> Option<Mark> {
    let (row, col) = cells.next()?;
    let mark = board.get(row, col)?.mark()?;
    cells
        .all(|(r, c)| board.get(r, c).and_then(|s| s.mark()) == Some(mark))
        .then_some(mark)
}
