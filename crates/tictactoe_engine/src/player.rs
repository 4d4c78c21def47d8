//! Game participants.

use crate::types::Mark;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Kind of participant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves are supplied by a person through the API.
    Human,
    /// Computer-controlled. Declared for future use; no move generation exists.
    Bot,
}

/// An immutable participant: symbol, display name and kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Mark this player places on the board.
    symbol: Mark,
    /// Display name.
    name: String,
    /// Human or bot.
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player.
    pub fn human(symbol: Mark, name: impl Into<String>) -> Self {
        Self::new(symbol, name.into(), PlayerKind::Human)
    }

    /// Creates a bot player.
    pub fn bot(symbol: Mark, name: impl Into<String>) -> Self {
        Self::new(symbol, name.into(), PlayerKind::Bot)
    }
}

/// The default line-up: two humans, `X` "Player 1" moving first, then `O` "Player 2".
pub fn default_players() -> Vec<Player> {
    vec![
        Player::human(Mark::X, "Player 1"),
        Player::human(Mark::O, "Player 2"),
    ]
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        let alice = Player::human(Mark::X, "Alice");
        let computer = Player::bot(Mark::O, "Computer");
        assert_eq!(*alice.kind(), PlayerKind::Human);
        assert_eq!(*computer.kind(), PlayerKind::Bot);
        assert_eq!(alice.name(), "Alice");
        assert_eq!(*computer.symbol(), Mark::O);
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(PlayerKind::Bot.to_string(), "bot");
        assert_eq!(serde_json::to_string(&PlayerKind::Human).unwrap(), "\"human\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::human(Mark::X, "Player 1").to_string(), "Player 1 (X)");
    }
}
