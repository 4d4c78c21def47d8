//! Square game board.

use crate::types::Square;
use serde::Serialize;

/// A size×size tic-tac-toe board.
///
/// Coordinates are `(row, col)`, zero-based from the top-left corner.
/// Out-of-range coordinates are never stored: writes to them are ignored
/// and reads return `None`. Callers that need to reject a bad coordinate
/// must check [`Board::is_valid`] or [`Board::is_empty`] first.
///
/// Boards are only built through [`Board::new`], never deserialized:
///
/// ```compile_fail
/// let board: tictactoe_engine::Board =
///     serde_json::from_str(r#"{"size":3,"squares":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    /// Side length, fixed at construction.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with the given side length.
    ///
    /// Sizes above [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE) are clamped to it.
    pub fn new(size: usize) -> Self {
        let size = size.min(crate::MAX_BOARD_SIZE);
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.is_valid(row, col).then(|| row * self.size + col)
    }

    /// Checks that the coordinate lies on the board.
    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Checks that the coordinate lies on the board and holds no mark.
    ///
    /// Out-of-range coordinates count as not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Gets the square at the coordinate, or `None` if it is off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.index(row, col).map(|i| self.squares[i])
    }

    /// Writes a square. Out-of-range coordinates are ignored.
    pub fn place(&mut self, row: usize, col: usize, square: Square) {
        if let Some(i) = self.index(row, col) {
            self.squares[i] = square;
        }
    }

    /// Clears a square back to empty.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.place(row, col, Square::Empty);
    }

    /// Checks if every square holds a mark.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Number of squares holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Empties every square. The size does not change.
    pub fn reset(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.max(1))
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show as `.`.
    pub fn display(&self) -> String {
        let divider = vec!["-"; self.size].join("+");
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|square| match square.mark() {
                        Some(mark) => mark.to_string(),
                        None => ".".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{}\n", divider))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::DEFAULT_BOARD_SIZE)
    }
}
