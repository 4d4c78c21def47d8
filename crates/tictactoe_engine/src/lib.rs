//! Tic-tac-toe game engine.
//!
//! A small state machine over a square grid: players take turns placing
//! their marks, a pluggable [`WinStrategy`] decides when the game is won
//! or tied, and moves can be undone one at a time.
//!
//! # Architecture
//!
//! - **Board**: size×size grid of squares with coordinate validation
//! - **Rules**: the [`WinStrategy`] trait plus [`ThreeInARow`] and [`ConnectN`]
//! - **Engine**: [`GameEngine`] owns the board, players, history and status
//! - **Invariants**: consistency checks run after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus};
//!
//! let mut game = GameEngine::standard(3)?;
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     assert!(game.make_move(row, col));
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! assert_eq!(game.winner().map(|p| p.symbol().to_string()), Some("X".to_string()));
//! # Ok::<(), tictactoe_engine::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod invariants;
mod player;
mod rules;
mod types;

pub use action::Move;
pub use board::Board;
pub use engine::{DEFAULT_BOARD_SIZE, GameEngine, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MIN_PLAYERS};
pub use error::{ConfigError, ConfigErrorKind};
pub use invariants::{
    EngineInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    TurnCursorInvariant, WinnerImpliesWonInvariant,
};
pub use player::{Player, PlayerKind, default_players};
pub use rules::{ConnectN, ThreeInARow, Verdict, WinStrategy};
pub use types::{GameStatus, Mark, Square};
