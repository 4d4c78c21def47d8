//! Turn cursor invariant: the current player index is in range.

use super::Invariant;
use crate::engine::GameEngine;

/// Invariant: The turn cursor always indexes a valid player.
pub struct TurnCursorInvariant;

impl Invariant<GameEngine> for TurnCursorInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.current_player_index() < game.players().len()
    }

    fn description() -> &'static str {
        "Current player index refers to a registered player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_across_full_rotation() {
        let mut game = GameEngine::standard(3).unwrap();
        for (row, col) in [(0, 0), (0, 1), (0, 2), (1, 1)] {
            game.make_move(row, col);
            assert!(TurnCursorInvariant::holds(&game));
        }
    }
}
