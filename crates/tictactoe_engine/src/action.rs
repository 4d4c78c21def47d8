//! Move records.

use crate::player::Player;
use derive_new::new;
use std::sync::Arc;

/// A placed mark: where it went and who placed it.
///
/// Moves are appended to the engine's history on every successful
/// placement and popped again by undo. They are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Move {
    row: usize,
    col: usize,
    player: Arc<Player>,
}

impl Move {
    /// Row of the placed mark.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column of the placed mark.
    pub fn col(&self) -> usize {
        self.col
    }

    /// The player who made this move.
    pub fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn player_handle(&self) -> &Arc<Player> {
        &self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player.symbol(), self.row, self.col)
    }
}
