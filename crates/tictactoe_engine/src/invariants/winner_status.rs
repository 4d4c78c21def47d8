//! Winner/status invariant.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::GameStatus;

/// Invariant: A winner is recorded only when the game is won.
pub struct WinnerImpliesWonInvariant;

impl Invariant<GameEngine> for WinnerImpliesWonInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.winner().is_none() || game.status() == GameStatus::Won
    }

    fn description() -> &'static str {
        "A winner is set only when the status is Won"
    }
}
