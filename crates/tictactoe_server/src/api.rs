//! Wire types for the REST surface.

use serde::{Deserialize, Serialize};
use tictactoe_engine::{GameEngine, GameStatus, Move};

/// `winner` value reported for a tied game.
pub const TIE: &str = "TIE";

/// Full picture of the game, returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Rows of cells; each cell is a symbol or `""` when empty.
    pub board: Vec<Vec<String>>,
    /// Symbol of the player whose turn it is.
    pub current_player: String,
    /// True once the game is won or tied.
    pub game_over: bool,
    /// Winner's symbol, [`TIE`], or `null` while the game is in progress.
    pub winner: Option<String>,
    /// Side length of the board.
    pub board_size: usize,
}

impl From<&GameEngine> for GameSnapshot {
    fn from(game: &GameEngine) -> Self {
        let board = game
            .board()
            .rows()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let winner = match game.status() {
            GameStatus::Won => game.winner().map(|p| p.symbol().to_string()),
            GameStatus::Tied => Some(TIE.to_string()),
            GameStatus::InProgress => None,
        };

        Self {
            board,
            current_player: game.current_player().symbol().to_string(),
            game_over: game.status().is_over(),
            winner,
            board_size: game.board().size(),
        }
    }
}

/// Snapshot plus whether the requested mutation was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Game state after the request.
    #[serde(flatten)]
    pub snapshot: GameSnapshot,
    /// False when the move or undo was rejected.
    pub success: bool,
}

/// Body of `POST /api/game/move`.
///
/// Coordinates are signed so that negative input reaches the engine as a
/// rejected move rather than a deserialization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Zero-based row.
    pub row: i64,
    /// Zero-based column.
    pub col: i64,
}

/// Optional body of `POST /api/game/new`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGameRequest {
    /// Board size; the server default applies when absent.
    #[serde(default)]
    pub size: Option<usize>,
}

/// One entry of `GET /api/game/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
    /// Symbol of the player who moved.
    pub player: String,
    /// Display name of the player who moved.
    pub name: String,
}

impl From<&Move> for MoveRecord {
    fn from(mv: &Move) -> Self {
        Self {
            row: mv.row(),
            col: mv.col(),
            player: mv.player().symbol().to_string(),
            name: mv.player().name().clone(),
        }
    }
}

/// JSON body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}
