//! Win detection for N×N tic-tac-toe.
//!
//! A win is a line of the mover's piece as long as the board is wide.

use super::scoring::compute_score;
use crate::error::BoardError;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Checks whether the piece at `index` completes a full line.
///
/// Meant to be called right after a move, with that move's index.
///
/// # Errors
///
/// Fails if `index` is off the board or its square is empty.
#[instrument(skip(board))]
pub fn is_win(board: &Board, index: usize) -> Result<bool, BoardError> {
    Ok(compute_score(board, index, None)? >= board.size())
}

/// Scans every occupied square for a full line.
///
/// Returns the first winning player found in index order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter_map(|(i, sq)| match sq {
            Square::Occupied(player) => Some((i + 1, *player)),
            Square::Empty => None,
        })
        .find(|&(index, _)| is_win(board, index).unwrap_or(false))
        .map(|(_, player)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(3).unwrap();
        for index in [1, 2, 3] {
            board.apply_move(index, Player::X).unwrap();
        }
        assert!(is_win(&board, 3).unwrap());
        assert!(is_win(&board, 1).unwrap());
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new(3).unwrap();
        for index in [1, 5, 9] {
            board.apply_move(index, Player::O).unwrap();
        }
        assert!(is_win(&board, 5).unwrap());
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_three_is_not_enough_on_four_by_four() {
        let mut board = Board::new(4).unwrap();
        for index in [1, 2, 3] {
            board.apply_move(index, Player::X).unwrap();
        }
        assert!(!is_win(&board, 3).unwrap());
        board.apply_move(4, Player::X).unwrap();
        assert!(is_win(&board, 4).unwrap());
    }

    #[test]
    fn test_single_cell_board_wins_immediately() {
        let mut board = Board::new(1).unwrap();
        board.apply_move(1, Player::O).unwrap();
        assert!(is_win(&board, 1).unwrap());
    }

    #[test]
    fn test_is_win_on_empty_square_is_error() {
        let board = Board::new(3).unwrap();
        assert!(is_win(&board, 4).is_err());
    }
}
