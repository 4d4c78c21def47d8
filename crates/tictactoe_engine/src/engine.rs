//! Game state machine.

use crate::action::Move;
use crate::board::Board;
use crate::error::{ConfigError, ConfigErrorKind};
use crate::invariants::assert_invariants;
use crate::player::{Player, default_players};
use crate::rules::{ThreeInARow, Verdict, WinStrategy};
use crate::types::{GameStatus, Mark, Square};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Minimum number of players in a game.
pub const MIN_PLAYERS: usize = 2;

/// Smallest allowed board side length.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest allowed board side length.
pub const MAX_BOARD_SIZE: usize = 100;

/// Board side length used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Tic-tac-toe game engine.
///
/// Owns one board, the ordered player list, the turn cursor, the move
/// history and the terminal state. Win detection is delegated to a
/// [`WinStrategy`].
///
/// ```text
/// InProgress ──make_move──▶ Won | Tied
///     ▲                        │
///     └──── undo / reset / new_game
/// ```
///
/// Gameplay operations never fail loudly: an illegal move or an undo with
/// no history returns `false` and leaves every piece of state untouched.
/// Only construction checks its configuration.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    players: Vec<Arc<Player>>,
    strategy: Box<dyn WinStrategy>,
    history: Vec<Move>,
    current: usize,
    status: GameStatus,
    winner: Option<Arc<Player>>,
}

impl GameEngine {
    /// Builds a game, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if there are fewer than [`MIN_PLAYERS`]
    /// players, the board size lies outside [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`],
    /// or two players share a symbol.
    #[instrument(
        skip(players, strategy),
        fields(player_count = players.len(), strategy = strategy.name())
    )]
    pub fn new(
        board_size: usize,
        players: Vec<Player>,
        strategy: Box<dyn WinStrategy>,
    ) -> Result<Self, ConfigError> {
        if players.len() < MIN_PLAYERS {
            warn!("Rejected game with too few players");
            return Err(ConfigError::new(ConfigErrorKind::TooFewPlayers(
                players.len(),
            )));
        }

        validate_board_size(board_size)?;

        let mut seen = HashSet::new();
        if let Some(duplicate) = players.iter().map(|p| *p.symbol()).find(|s| !seen.insert(*s)) {
            warn!(symbol = %duplicate, "Rejected game with duplicate player symbols");
            return Err(ConfigError::new(ConfigErrorKind::DuplicateSymbol(duplicate)));
        }

        info!("Creating new game");
        Ok(Self {
            board: Board::new(board_size),
            players: players.into_iter().map(Arc::new).collect(),
            strategy,
            history: Vec::new(),
            current: 0,
            status: GameStatus::InProgress,
            winner: None,
        })
    }

    /// Builds the default game: two humans, `X` then `O`, classic three-in-a-row.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `board_size` is outside
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    pub fn standard(board_size: usize) -> Result<Self, ConfigError> {
        Self::new(board_size, default_players(), Box::new(ThreeInARow))
    }

    /// Places the current player's mark.
    ///
    /// Returns `false` without changing anything if the game is over or
    /// the square is occupied or off the board. On success the move is
    /// recorded and the strategy consulted: a win or tie ends the game
    /// and leaves the turn with the player who just moved; otherwise the
    /// turn passes to the next player.
    #[instrument(
        skip(self),
        fields(status = %self.status, player = %self.current_player().symbol())
    )]
    pub fn make_move(&mut self, row: usize, col: usize) -> bool {
        if self.status.is_over() {
            debug!("Rejected move, game is already over");
            return false;
        }

        if !self.board.is_empty(row, col) {
            debug!("Rejected move, square is occupied or off the board");
            return false;
        }

        let player = Arc::clone(&self.players[self.current]);
        self.board.place(row, col, Square::Occupied(*player.symbol()));
        self.history.push(Move::new(row, col, Arc::clone(&player)));

        match self.strategy.evaluate(&self.board) {
            Verdict::Winner(mark) => {
                self.status = GameStatus::Won;
                self.winner = self.find_player(mark);
                if self.winner.is_none() {
                    warn!(%mark, "Winning mark belongs to no player");
                }
                info!(%mark, moves = self.history.len(), "Game won");
            }
            Verdict::Tie => {
                self.status = GameStatus::Tied;
                info!(moves = self.history.len(), "Game tied");
            }
            Verdict::Undecided => {
                self.current = (self.current + 1) % self.players.len();
            }
        }

        debug!(board = %self.board.display(), "Move applied");
        assert_invariants(self);
        true
    }

    /// Takes back the most recent move.
    ///
    /// Returns `false` if there is nothing to undo. Otherwise the square
    /// is cleared, the game is back in progress with no winner, and the
    /// player who made the undone move is to move again.
    #[instrument(skip(self), fields(status = %self.status, moves = self.history.len()))]
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            debug!("Nothing to undo");
            return false;
        };

        self.board.clear(last.row(), last.col());

        // A finishing move never advanced the cursor.
        if !self.status.is_over() {
            self.current = (self.current + self.players.len() - 1) % self.players.len();
        }
        self.status = GameStatus::InProgress;
        self.winner = None;

        debug_assert!(
            Arc::ptr_eq(last.player_handle(), &self.players[self.current]),
            "undo must return the turn to the player who moved"
        );
        info!(undone = %last, "Move undone");
        assert_invariants(self);
        true
    }

    /// Clears the board and history. Players and board size are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.current = 0;
        self.status = GameStatus::InProgress;
        self.winner = None;
        info!("Game reset");
        assert_invariants(self);
    }

    /// Replaces the board with one of a new size and resets all state.
    ///
    /// Players and the win strategy are kept.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] without touching the game if `board_size`
    /// is outside [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument(skip(self))]
    pub fn new_game(&mut self, board_size: usize) -> Result<(), ConfigError> {
        validate_board_size(board_size)?;
        self.board = Board::new(board_size);
        self.reset();
        Ok(())
    }

    /// The player whose turn it is. After a win this is the winner.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index of the current player in [`players`](Self::players).
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Players in turn order.
    pub fn players(&self) -> impl ExactSizeIterator<Item = &Player> {
        self.players.iter().map(|p| p.as_ref())
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winner, once the game is won.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_deref()
    }

    /// Copy of the move history, oldest first.
    pub fn history(&self) -> Vec<Move> {
        self.history.clone()
    }

    /// Number of moves played.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The win strategy in use.
    pub fn strategy(&self) -> &dyn WinStrategy {
        self.strategy.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn find_player(&self, mark: Mark) -> Option<Arc<Player>> {
        self.players
            .iter()
            .find(|p| *p.symbol() == mark)
            .cloned()
    }
}

#[track_caller]
fn validate_board_size(board_size: usize) -> Result<(), ConfigError> {
    if board_size < MIN_BOARD_SIZE {
        warn!(board_size, "Rejected board size");
        return Err(ConfigError::new(ConfigErrorKind::BoardTooSmall(board_size)));
    }
    if board_size > MAX_BOARD_SIZE {
        warn!(board_size, "Rejected board size");
        return Err(ConfigError::new(ConfigErrorKind::BoardTooLarge(board_size)));
    }
    Ok(())
}
