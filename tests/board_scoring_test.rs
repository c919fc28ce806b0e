//! Tests for the board model and line-scoring engine.

use strictly_nxn::rules::{compute_all_scores, compute_score, is_draw, is_win};
use strictly_nxn::{Board, BoardErrorKind, Player, Position};

fn board_with(size: usize, moves: &[(usize, Player)]) -> Board {
    let mut board = Board::new(size).expect("valid size");
    for &(index, player) in moves {
        board.apply_move(index, player).expect("legal move");
    }
    board
}

#[test]
fn test_conversions_round_trip_for_many_sizes() {
    for size in 1..=9 {
        let board = Board::new(size).unwrap();
        for index in 1..=board.num_positions() {
            let Position { row, col } = board.index_to_position(index).unwrap();
            assert!(row < size && col < size);
            assert_eq!(board.position_to_index(row, col).unwrap(), index);
        }
        assert!(board.index_to_position(board.num_positions() + 1).is_err());
        assert!(board.position_to_index(size, 0).is_err());
    }
}

#[test]
fn test_is_legal_move_matches_occupancy() {
    let board = board_with(4, &[(1, Player::X), (6, Player::O), (16, Player::X)]);
    for index in 1..=16 {
        let occupied = [1, 6, 16].contains(&index);
        assert_eq!(board.is_legal_move(index), !occupied, "index {index}");
    }
    assert!(!board.is_legal_move(0));
    assert!(!board.is_legal_move(17));
}

#[test]
fn test_top_row_win_on_three_by_three() {
    let board = board_with(3, &[(1, Player::X), (2, Player::X), (3, Player::X)]);
    assert_eq!(compute_score(&board, 3, Some(Player::X)).unwrap(), 3);
    assert!(is_win(&board, 3).unwrap());
}

#[test]
fn test_empty_board_scores_one() {
    for size in [3, 5] {
        let board = Board::new(size).unwrap();
        for index in 1..=board.num_positions() {
            for piece in [Player::X, Player::O] {
                assert_eq!(compute_score(&board, index, Some(piece)).unwrap(), 1);
            }
        }
    }
}

#[test]
fn test_all_scores_zero_exactly_on_occupied() {
    let board = board_with(
        4,
        &[(1, Player::X), (2, Player::O), (7, Player::X), (11, Player::O), (16, Player::X)],
    );
    for piece in [Player::X, Player::O] {
        let scores = compute_all_scores(&board, piece);
        assert_eq!(scores.len(), board.num_positions());
        for (i, score) in scores.into_iter().enumerate() {
            if board.is_legal_move(i + 1) {
                assert!(score >= 1);
            } else {
                assert_eq!(score, 0);
            }
        }
    }
}

#[test]
fn test_win_needs_full_board_width() {
    // Four in a column on a 5x5 board is not yet a win.
    let mut board = board_with(5, &[(3, Player::O), (8, Player::O), (13, Player::O), (18, Player::O)]);
    assert_eq!(compute_score(&board, 18, None).unwrap(), 4);
    assert!(!is_win(&board, 18).unwrap());
    board.apply_move(23, Player::O).unwrap();
    assert!(is_win(&board, 23).unwrap());
    assert!(is_win(&board, 3).unwrap());
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let board = board_with(
        3,
        &[
            (1, Player::X),
            (2, Player::O),
            (3, Player::X),
            (4, Player::X),
            (5, Player::O),
            (6, Player::O),
            (7, Player::O),
            (8, Player::X),
            (9, Player::X),
        ],
    );
    assert!(is_draw(&board));
    for index in 1..=9 {
        assert!(!is_win(&board, index).unwrap());
    }
}

#[test]
fn test_precondition_violations_are_errors() {
    let mut board = board_with(3, &[(5, Player::X)]);
    assert_eq!(
        board.apply_move(5, Player::O).unwrap_err().kind(),
        BoardErrorKind::CellOccupied(5)
    );
    assert!(matches!(
        compute_score(&board, 11, Some(Player::X)).unwrap_err().kind(),
        BoardErrorKind::IndexOutOfRange { index: 11, max: 9 }
    ));
    let err = compute_score(&board, 1, None).unwrap_err();
    assert_eq!(err.kind(), BoardErrorKind::EmptyCell(1));
    assert!(err.to_string().contains("Position 1 is empty"));
}
