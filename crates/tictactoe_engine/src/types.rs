//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A player's symbol on the board.
///
/// Marks are single characters so any number of players can take part,
/// each with a distinct symbol. [`Mark::X`] and [`Mark::O`] are the
/// classic pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct Mark(char);

impl Mark {
    /// The first player's mark.
    pub const X: Mark = Mark('X');
    /// The second player's mark.
    pub const O: Mark = Mark('O');

    /// Creates a mark from a character.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the underlying character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Mark {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(Mark(symbol)),
            _ => Err(serde::de::Error::custom(format!(
                "mark must be exactly one character, got {:?}",
                raw
            ))),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unoccupied square.
    #[default]
    Empty,
    /// Square holding a player's mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Empty squares render as an empty string.
impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Square::Empty => Ok(()),
            Square::Occupied(mark) => write!(f, "{}", mark),
        }
    }
}

/// Current status of the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A player completed a line.
    Won,
    /// The board filled up with no winner.
    Tied,
}

impl GameStatus {
    /// Returns true once the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}
