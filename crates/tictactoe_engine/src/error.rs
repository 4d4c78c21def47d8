//! Game construction errors.

use crate::types::Mark;
use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Fewer than two players.
    #[display("Game must have at least 2 players, got {}", _0)]
    TooFewPlayers(usize),

    /// Board side length below three.
    #[display("Board size must be at least 3, got {}", _0)]
    BoardTooSmall(usize),

    /// Board side length above the supported maximum.
    #[display("Board size must be at most 100, got {}", _0)]
    BoardTooLarge(usize),

    /// Two players share a symbol, so a winning mark could not be attributed.
    #[display("Player symbol {} is used more than once", _0)]
    DuplicateSymbol(Mark),
}

/// Game construction error with location tracking.
///
/// Raised only when a game is built or resized; ordinary gameplay
/// mistakes are reported as `false` by the engine instead.
#[derive(Debug, Clone, Display, Error)]
#[display("Game configuration error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
