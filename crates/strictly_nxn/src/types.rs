//! Core domain types for N×N tic-tac-toe.

use crate::error::{BoardError, BoardErrorKind};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
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
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Printable marker used when rendering the board.
    pub fn marker(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// N×N board with squares stored in row-major order.
///
/// Moves address squares by a 1-based linear index (`1..=num_positions`),
/// which maps one-to-one onto 0-based `(row, col)` positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// # Errors
    ///
    /// `InvalidSize` when `size` is 0 or `size * size` overflows `usize`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let num_positions = size
            .checked_mul(size)
            .filter(|&n| n > 0)
            .ok_or_else(|| BoardError::new(BoardErrorKind::InvalidSize(size)))?;
        Ok(Self {
            size,
            squares: vec![Square::Empty; num_positions],
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of squares, always `size * size`.
    pub fn num_positions(&self) -> usize {
        self.squares.len()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Checks that `index` lies in `1..=num_positions`.
    pub fn is_valid_index(&self, index: usize) -> bool {
        (1..=self.num_positions()).contains(&index)
    }

    /// Checks that `(row, col)` lies on the board.
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Converts a 1-based index to its `(row, col)` position.
    #[instrument(skip(self))]
    pub fn index_to_position(&self, index: usize) -> Result<Position, BoardError> {
        if !self.is_valid_index(index) {
            return Err(self.out_of_range(index));
        }
        Ok(Position::new((index - 1) / self.size, (index - 1) % self.size))
    }

    /// Converts a `(row, col)` position to its 1-based index.
    #[instrument(skip(self))]
    pub fn position_to_index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if !self.is_valid_position(row, col) {
            return Err(BoardError::new(BoardErrorKind::PositionOutOfRange {
                row,
                col,
                size: self.size,
            }));
        }
        Ok(row * self.size + col + 1)
    }

    /// Gets the square at a 1-based index.
    pub fn get(&self, index: usize) -> Option<Square> {
        index
            .checked_sub(1)
            .and_then(|i| self.squares.get(i))
            .copied()
    }

    /// Gets the square at a position.
    pub fn at(&self, pos: Position) -> Option<Square> {
        if self.is_valid_position(pos.row, pos.col) {
            Some(self.squares[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// A move is legal iff the index is in range and the square is empty.
    pub fn is_legal_move(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Places `player` at `index`.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` or `CellOccupied` when the move is not legal.
    /// The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), BoardError> {
        match self.get(index) {
            None => Err(self.out_of_range(index)),
            Some(Square::Occupied(_)) => Err(BoardError::new(BoardErrorKind::CellOccupied(index))),
            Some(Square::Empty) => {
                self.squares[index - 1] = Square::Occupied(player);
                Ok(())
            }
        }
    }

    /// 1-based indices of every empty square, in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    #[track_caller]
    fn out_of_range(&self, index: usize) -> BoardError {
        BoardError::new(BoardErrorKind::IndexOutOfRange {
            index,
            max: self.num_positions(),
        })
    }
}
