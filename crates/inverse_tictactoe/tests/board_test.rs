//! Tests for the inverse tic-tac-toe board rules.

use inverse_tictactoe::{
    Axis, Board, BoardErrorKind, Cell, GameStatus, MAX_CELLS, Marker, Square,
};

fn board() -> Board {
    Board::new(10, 10, 5).unwrap()
}

fn place_all(board: &mut Board, marker: Marker, cells: &[(i32, i32)]) {
    for &(row, col) in cells {
        assert!(board.try_place_marker(marker, Cell::new(row, col)));
    }
}

#[test]
fn test_construction_validity() {
    for rows in 0..5 {
        for cols in 0..5 {
            for losing_length in 0..6 {
                let expected_ok =
                    rows > 0 && cols > 0 && losing_length > 0 && losing_length <= rows.min(cols);
                let result = Board::new(rows, cols, losing_length);
                assert_eq!(
                    result.is_ok(),
                    expected_ok,
                    "rows={rows} cols={cols} losing_length={losing_length}"
                );
            }
        }
    }
}

#[test]
fn test_construction_error_kinds() {
    let err = Board::new(10, 0, 5).unwrap_err();
    assert!(matches!(err.kind, BoardErrorKind::InvalidDimensions { .. }));

    let err = Board::new(0, 0, 5).unwrap_err();
    assert!(matches!(err.kind, BoardErrorKind::InvalidDimensions { .. }));

    let err = Board::new(1_000_000, 1_000_000, 5).unwrap_err();
    assert_eq!(
        err.kind,
        BoardErrorKind::InvalidDimensions {
            row_count: 1_000_000,
            col_count: 1_000_000,
        }
    );

    let err = Board::new(usize::MAX, 2, 1).unwrap_err();
    assert!(matches!(err.kind, BoardErrorKind::InvalidDimensions { .. }));

    let err = Board::new(10, 10, 11).unwrap_err();
    assert_eq!(
        err.kind,
        BoardErrorKind::InvalidLosingLength {
            losing_length: 11,
            row_count: 10,
            col_count: 10,
        }
    );

    let err = Board::new(4, 10, 5).unwrap_err();
    assert!(matches!(err.kind, BoardErrorKind::InvalidLosingLength { .. }));
    assert!(err.to_string().contains("losing length 5"));
}

#[test]
fn test_placing_markers() {
    let mut board = board();
    assert!(board.try_place_marker(Marker::X, Cell::new(1, 1)));
    assert!(board.try_place_marker(Marker::O, Cell::new(2, 2)));
    assert_eq!(board.square(Cell::new(1, 1)), Some(Square::Occupied(Marker::X)));
    assert_eq!(board.square(Cell::new(2, 2)), Some(Square::Occupied(Marker::O)));
    assert_eq!(board.status(), GameStatus::InProgress);
}

#[test]
fn test_bounds_rejection() {
    let mut board = board();
    for (row, col) in [(-1, -1), (10, 10), (-1, 10), (10, -1)] {
        assert!(!board.try_place_marker(Marker::X, Cell::new(row, col)));
    }
    for (row, col) in [(0, 0), (0, 9), (9, 0), (9, 9)] {
        assert!(board.try_place_marker(Marker::X, Cell::new(row, col)));
    }
}

#[test]
fn test_no_double_placement() {
    let mut board = board();
    assert!(board.try_place_marker(Marker::X, Cell::new(1, 1)));
    assert!(!board.try_place_marker(Marker::O, Cell::new(1, 1)));
    assert!(!board.try_place_marker(Marker::X, Cell::new(1, 1)));
    assert_eq!(board.square(Cell::new(1, 1)), Some(Square::Occupied(Marker::X)));
}

#[test]
fn test_horizontal_loss() {
    let mut board = board();
    place_all(&mut board, Marker::X, &[(1, 1), (1, 2), (1, 5), (1, 4)]);
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(board.try_place_marker(Marker::X, Cell::new(1, 3)));
    assert_eq!(board.status(), GameStatus::OWon);
}

#[test]
fn test_vertical_loss() {
    let mut board = board();
    place_all(&mut board, Marker::O, &[(2, 4), (3, 4), (6, 4), (5, 4), (4, 4)]);
    assert_eq!(board.status(), GameStatus::XWon);
}

#[test]
fn test_main_diagonal_loss() {
    let mut board = board();
    place_all(&mut board, Marker::X, &[(1, 1), (2, 2), (5, 5), (4, 4), (3, 3)]);
    assert_eq!(board.status(), GameStatus::OWon);
}

#[test]
fn test_anti_diagonal_loss() {
    let mut board = board();
    place_all(&mut board, Marker::O, &[(9, 0), (8, 1), (5, 4), (6, 3), (7, 2)]);
    assert_eq!(board.status(), GameStatus::XWon);
}

#[test]
fn test_run_longer_than_losing_length_still_loses() {
    // Losing is "at least" the losing length: joining two runs of three
    // into a run of seven counts.
    let mut board = board();
    place_all(&mut board, Marker::X, &[(0, 0), (0, 1), (0, 2), (0, 4), (0, 5), (0, 6)]);
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.losing_axis(Marker::X, Cell::new(0, 3)), Some(Axis::Horizontal));
    assert!(board.try_place_marker(Marker::X, Cell::new(0, 3)));
    assert_eq!(board.status(), GameStatus::OWon);
}

#[test]
fn test_four_in_a_row_is_safe() {
    let mut board = board();
    place_all(&mut board, Marker::X, &[(3, 0), (3, 1), (3, 2), (3, 3)]);
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(!board.would_lose(Marker::O, Cell::new(3, 4)));
    assert!(board.would_lose(Marker::X, Cell::new(3, 4)));
}

#[test]
fn test_would_lose_does_not_mutate() {
    let mut board = board();
    place_all(&mut board, Marker::X, &[(0, 0), (1, 1), (2, 2), (3, 3)]);
    let before = board.clone();
    assert!(board.would_lose(Marker::X, Cell::new(4, 4)));
    assert_eq!(board, before);
    assert!(board.is_cell_empty(Cell::new(4, 4)));
}

fn fill_tie_pattern(board: &mut Board) {
    // Rows alternate X X O O ... and O O X X ..., so no run exceeds two.
    for row in 0..10 {
        for col in 0..10 {
            let pair_starts_with_x = col % 4 < 2;
            let marker = if (row % 2 == 0) == pair_starts_with_x {
                Marker::X
            } else {
                Marker::O
            };
            assert!(board.try_place_marker(marker, Cell::new(row, col)));
        }
    }
}

#[test]
fn test_tie() {
    let mut board = board();
    fill_tie_pattern(&mut board);
    assert!(board.is_full());
    for _ in 0..3 {
        assert_eq!(board.status(), GameStatus::Tie);
    }
}

#[test]
fn test_board_at_cell_limit_is_accepted() {
    let board = Board::new(1, MAX_CELLS, 1).unwrap();
    assert_eq!(board.empty_count(), MAX_CELLS);
    assert!(Board::new(1, MAX_CELLS + 1, 1).is_err());
}

#[test]
fn test_empty_count_tracks_accepted_placements() {
    let mut board = board();
    assert_eq!(board.empty_count(), 100);

    place_all(&mut board, Marker::X, &[(0, 0), (5, 5)]);
    place_all(&mut board, Marker::O, &[(9, 9)]);
    assert_eq!(board.empty_count(), 97);

    // Rejected placements leave the count alone.
    assert!(!board.try_place_marker(Marker::O, Cell::new(0, 0)));
    assert!(!board.try_place_marker(Marker::O, Cell::new(10, 0)));
    assert_eq!(board.empty_count(), 97);
    assert_eq!(board.empty_cells().count(), 97);

    let mut full = Board::new(10, 10, 5).unwrap();
    fill_tie_pattern(&mut full);
    assert_eq!(full.empty_count(), 0);
    assert!(full.is_full());
}

#[test]
fn test_no_placement_after_loss() {
    let mut board = board();
    place_all(&mut board, Marker::X, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
    assert_eq!(board.status(), GameStatus::OWon);

    let snapshot = board.clone();
    let cells: Vec<_> = board.cells().collect();
    for cell in cells {
        assert!(!board.try_place_marker(Marker::O, cell));
        assert!(!board.try_place_marker(Marker::X, cell));
    }
    assert_eq!(board, snapshot);
    assert_eq!(board.status(), GameStatus::OWon);
}

#[test]
fn test_queries_are_idempotent() {
    let mut board = board();
    place_all(&mut board, Marker::O, &[(4, 4), (5, 5)]);
    let snapshot = board.clone();
    for _ in 0..5 {
        assert_eq!(board.status(), GameStatus::InProgress);
        assert!(!board.is_cell_empty(Cell::new(4, 4)));
        assert!(board.is_cell_empty(Cell::new(4, 5)));
    }
    assert_eq!(board, snapshot);
}
