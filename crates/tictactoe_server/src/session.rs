//! The single game shared by all requests.

use crate::api::{GameSnapshot, MoveRecord, MoveResponse};
use crate::config::WinRule;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tictactoe_engine::{ConfigError, GameEngine, default_players};
use tracing::{debug, info, instrument, warn};

/// Shared handle to the hosted game.
///
/// Every operation takes the lock once, applies its mutation and builds the
/// snapshot before releasing it, so responses never mix two states.
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: Arc<Mutex<GameEngine>>,
    win_rule: WinRule,
    default_size: usize,
}

impl GameSession {
    /// Starts a session with a fresh game of `board_size`.
    #[instrument]
    pub fn new(board_size: usize, win_rule: WinRule) -> Result<Self, ConfigError> {
        let engine = build_game(board_size, win_rule)?;
        info!(board_size, %win_rule, "Created game session");
        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
            win_rule,
            default_size: board_size,
        })
    }

    /// Board size used by [`GameSession::new_game`] when none is given.
    pub fn default_size(&self) -> usize {
        self.default_size
    }

    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.engine.lock().unwrap_or_else(|poisoned| {
            warn!("Game lock poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Current state.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameSnapshot {
        GameSnapshot::from(&*self.lock())
    }

    /// Places the current player's mark. Coordinates that do not fit the
    /// board, including negative ones, are rejected like any illegal move.
    #[instrument(skip(self))]
    pub fn make_move(&self, row: i64, col: i64) -> MoveResponse {
        let mut game = self.lock();
        let success = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(row), Ok(col)) => game.make_move(row, col),
            _ => {
                debug!("Negative coordinates");
                false
            }
        };
        MoveResponse {
            snapshot: GameSnapshot::from(&*game),
            success,
        }
    }

    /// Reverts the most recent move.
    #[instrument(skip(self))]
    pub fn undo(&self) -> MoveResponse {
        let mut game = self.lock();
        let success = game.undo();
        MoveResponse {
            snapshot: GameSnapshot::from(&*game),
            success,
        }
    }

    /// Clears the board, keeping size and players.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameSnapshot {
        let mut game = self.lock();
        game.reset();
        GameSnapshot::from(&*game)
    }

    /// Replaces the game with a fresh one of `board_size` (or the default).
    /// On error the previous game is kept.
    #[instrument(skip(self))]
    pub fn new_game(&self, board_size: Option<usize>) -> Result<GameSnapshot, ConfigError> {
        let size = board_size.unwrap_or(self.default_size);
        let fresh = build_game(size, self.win_rule)?;
        let mut game = self.lock();
        *game = fresh;
        info!(board_size = size, "Started new game");
        Ok(GameSnapshot::from(&*game))
    }

    /// Moves played so far, oldest first.
    #[instrument(skip(self))]
    pub fn history(&self) -> Vec<MoveRecord> {
        self.lock().history().iter().map(MoveRecord::from).collect()
    }
}

fn build_game(board_size: usize, win_rule: WinRule) -> Result<GameEngine, ConfigError> {
    GameEngine::new(board_size, default_players(), win_rule.strategy(board_size))
}
