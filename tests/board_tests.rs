//! Board tests - placement, movement and line clearing

use tui_blockfall::core::{Board, Piece};
use tui_blockfall::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i16, tag: u8) {
    for col in 0..board.width() as i16 {
        assert!(board.set(row, col, tag));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH as usize, BOARD_HEIGHT as usize);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);

    for row in 0..20 {
        for col in 0..10 {
            assert!(board.is_free(row, col), "cell ({}, {}) should be free", row, col);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(20, 0), None);
    assert_eq!(board.get(0, 10), None);
    assert!(!board.is_free(20, 0));
}

#[test]
fn test_board_set_out_of_bounds_is_rejected() {
    let mut board = Board::default();
    assert!(!board.set(0, 10, 1));
    assert!(!board.set(-1, 0, 1));
    assert_eq!(board.filled_count(), 0);

    assert!(board.set(19, 9, 2));
    assert_eq!(board.get(19, 9), Some(2));
}

#[test]
fn test_can_place_on_empty_board() {
    let board = Board::default();
    for kind in ShapeKind::ALL {
        assert!(board.can_place(&Piece::spawn(kind)), "{:?} should fit", kind);
    }
}

#[test]
fn test_can_place_rejects_walls_and_filled_cells() {
    let mut board = Board::default();

    // Cols 7..=10, last one is past the right wall.
    assert!(!board.can_place(&Piece::at(ShapeKind::I, 0, 7)));
    assert!(board.can_place(&Piece::at(ShapeKind::I, 0, 6)));
    // L reaches two rows below its anchor.
    assert!(!board.can_place(&Piece::at(ShapeKind::L, 18, 0)));

    board.set(0, 5, 1);
    assert!(!board.can_place(&Piece::spawn(ShapeKind::I)));
}

#[test]
fn test_can_move_ignores_own_cells() {
    let mut board = Board::default();
    let piece = Piece::spawn(ShapeKind::I);
    board.place(&piece);

    // Shifted cells overlap the piece itself.
    assert!(!board.can_place(&piece.shifted(0, 1)));
    assert!(board.can_move(&piece, 0, 1));
    assert!(board.can_move(&piece, 1, 0));

    // Other filled cells still block.
    board.set(0, 7, 2);
    assert!(!board.can_move(&piece, 0, 1));
    assert!(!board.can_move(&piece, -1, 0));
}

#[test]
fn test_can_move_lets_vertical_pieces_fall() {
    for kind in [ShapeKind::L, ShapeKind::T] {
        let mut board = Board::default();
        let piece = Piece::spawn(kind);
        board.place(&piece);
        assert!(board.can_move(&piece, 1, 0), "{:?} should be able to fall", kind);
        assert!(!board.can_place(&piece.shifted(1, 0)));
    }
}

#[test]
fn test_move_piece_rewrites_cells() {
    let mut board = Board::default();
    let mut piece = Piece::spawn(ShapeKind::I);
    board.place(&piece);

    board.move_piece(&mut piece, 1, 0);
    assert_eq!(piece.row, 1);
    for col in 0..10 {
        assert_eq!(board.get(0, col), Some(0));
    }
    for col in 3..7 {
        assert_eq!(board.get(1, col), Some(ShapeKind::I.color()));
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_far_off_board_piece_is_rejected() {
    let board = Board::default();
    let piece = Piece::at(ShapeKind::T, i16::MAX, i16::MAX);
    assert!(!board.can_place(&piece));
    assert!(!board.can_move(&piece, 1, 1));
}

#[test]
fn test_clear_single_bottom_row() {
    let mut board = Board::default();
    fill_row(&mut board, 19, 3);
    board.set(18, 0, 1);

    assert!(board.is_row_full(19));
    assert_eq!(board.clear_full_lines(), 1);

    assert_eq!(board.get(19, 0), Some(1));
    for col in 1..10 {
        assert_eq!(board.get(19, col), Some(0));
    }
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_adjacent_full_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 18, 1);
    fill_row(&mut board, 19, 2);
    board.set(17, 4, 3);

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(19, 4), Some(3));
    assert_eq!(board.filled_count(), 1);
    assert!(!board.is_row_full(19));
}

#[test]
fn test_clear_separated_full_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 17, 1);
    fill_row(&mut board, 19, 2);
    board.set(16, 0, 3);
    board.set(18, 9, 3);

    assert_eq!(board.clear_full_lines(), 2);
    assert_eq!(board.get(18, 0), Some(3));
    assert_eq!(board.get(19, 9), Some(3));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::default();
    board.set(19, 0, 1);
    board.set(10, 5, 2);
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_snapshot_is_a_copy() {
    let mut board = Board::default();
    board.set(5, 5, 2);

    let mut snap = board.snapshot();
    assert_eq!(snap[5][5], 2);
    snap[5][5] = 0;
    snap[0][0] = 9;

    assert_eq!(board.get(5, 5), Some(2));
    assert_eq!(board.get(0, 0), Some(0));
}
