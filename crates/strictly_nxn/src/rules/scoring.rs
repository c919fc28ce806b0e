//! Line scoring: the longest unbroken run of a piece through a cell.
//!
//! Scores feed both win detection (a line as long as the board wins) and
//! the AI's move evaluation (hypothetical scores on empty cells).

use crate::error::{BoardError, BoardErrorKind};
use crate::position::{AXES, Direction, Position};
use crate::types::{Board, Player, Square};
use tracing::{instrument, trace};

/// Counts consecutive `piece` squares starting one step beyond `from`.
///
/// Stops at the first mismatched square or at the board edge. The edge is
/// known up front from the direction, so no out-of-range cell is read.
pub fn run_length(board: &Board, from: Position, piece: Player, direction: Direction) -> usize {
    let limit = direction.steps_to_edge(from, board.size());
    (1..=limit)
        .take_while(|&step| {
            board.at(direction.walk(from, step)) == Some(Square::Occupied(piece))
        })
        .count()
}

/// Length of the longest line of `piece` through `index`, cell included.
///
/// With `piece` unset the occupant of `index` is scored. Passing a piece
/// for an empty cell yields the line length that placing it would give.
///
/// # Errors
///
/// `IndexOutOfRange` for an index off the board, `EmptyCell` when `piece`
/// is unset and the cell has no occupant.
#[instrument(skip(board))]
pub fn compute_score(
    board: &Board,
    index: usize,
    piece: Option<Player>,
) -> Result<usize, BoardError> {
    let from = board.index_to_position(index)?;
    let piece = match piece {
        Some(piece) => piece,
        None => board
            .get(index)
            .and_then(Square::player)
            .ok_or_else(|| BoardError::new(BoardErrorKind::EmptyCell(index)))?,
    };

    Ok(line_score(board, from, piece))
}

/// Longest line of `piece` through `from` over the four axes.
fn line_score(board: &Board, from: Position, piece: Player) -> usize {
    AXES.iter()
        .map(|axis| {
            let [forward, backward] = axis.directions();
            let score =
                run_length(board, from, piece, forward) + run_length(board, from, piece, backward) + 1;
            trace!(axis = axis.name, score, "axis scored");
            score
        })
        .max()
        .unwrap_or(1)
}

/// Scores every position for `piece`: 0 on occupied squares, otherwise the
/// line length `piece` would reach by moving there.
#[instrument(skip(board))]
pub fn compute_all_scores(board: &Board, piece: Player) -> Vec<usize> {
    let size = board.size();
    board
        .squares()
        .iter()
        .enumerate()
        .map(|(i, square)| match square {
            Square::Empty => line_score(board, Position::new(i / size, i % size), piece),
            Square::Occupied(_) => 0,
        })
        .collect()
}
