//! Game engine: a board plus turn order, status and history.

use crate::action::Move;
use crate::error::{BoardError, BoardErrorKind};
use crate::rules::is_win;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// N×N tic-tac-toe game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty `size`×`size` board.
    #[instrument]
    pub fn new(size: usize, first: Player) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `index` and updates status.
    ///
    /// # Errors
    ///
    /// `GameOver` once the game has ended; otherwise any error from
    /// [`Board::apply_move`]. A failed move changes nothing.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<GameStatus, BoardError> {
        if self.status.is_over() {
            return Err(BoardError::new(BoardErrorKind::GameOver));
        }

        let player = self.to_move;
        self.board.apply_move(index, player)?;
        self.history.push(Move::new(player, index));

        self.status = if is_win(&self.board, index)? {
            info!(%player, index, "winning move");
            GameStatus::Won(player)
        } else if self.board.is_full() {
            info!("board full, draw");
            GameStatus::Draw
        } else {
            self.to_move = player.opponent();
            GameStatus::InProgress
        };

        debug!(status = ?self.status, moves = self.history.len(), "move applied");
        Ok(self.status)
    }
}
