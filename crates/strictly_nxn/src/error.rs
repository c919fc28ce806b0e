//! Error types for board and engine preconditions.

use derive_more::{Display, Error};
use tracing::instrument;

/// Kind of precondition violation raised by the board or scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// Linear index outside `1..=num_positions`.
    #[display("Index {} out of range (1-{})", index, max)]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Largest valid index.
        max: usize,
    },

    /// Row/column pair outside the board.
    #[display("Position ({}, {}) out of range for a {}x{} board", row, col, size, size)]
    PositionOutOfRange {
        /// Row (0-based).
        row: usize,
        /// Column (0-based).
        col: usize,
        /// Board size.
        size: usize,
    },

    /// Target cell already holds a piece.
    #[display("Position {} already taken", _0)]
    CellOccupied(usize),

    /// A score was requested for the occupant of an empty cell.
    #[display("Position {} is empty, no piece to score", _0)]
    EmptyCell(usize),

    /// Board size must be at least 1.
    #[display("Invalid board size {}", _0)]
    InvalidSize(usize),

    /// A move was attempted after the game ended.
    #[display("Game is already over")]
    GameOver,
}

/// Board error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// What went wrong.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> BoardErrorKind {
        self.kind
    }
}
