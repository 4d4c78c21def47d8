//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: History length equals number of occupied squares.
///
/// Placement and undo keep the two in lockstep. No moves are missing and
/// no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.move_count() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}
