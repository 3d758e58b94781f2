use twenty48::{max_reachable_tile, slide_and_merge, Board, BoardError, Direction};

fn board(rows: &[[u64; 4]; 4]) -> Board {
    Board::from_rows(rows).unwrap()
}

#[test]
fn test_slide_and_merge_pair_then_distinct() {
    assert_eq!(slide_and_merge(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
}

#[test]
fn test_slide_and_merge_does_not_cascade() {
    // the first two 2s merge; the third does not merge into the new 4
    assert_eq!(slide_and_merge(&[2, 0, 2, 2]), (vec![4, 2, 0, 0], 4));
    assert_eq!(slide_and_merge(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
    assert_eq!(slide_and_merge(&[4, 4, 8, 0]), (vec![8, 8, 0, 0], 8));
}

#[test]
fn test_slide_and_merge_resolves_lowest_pair_first() {
    assert_eq!(slide_and_merge(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
    assert_eq!(slide_and_merge(&[0, 0, 0, 8]), (vec![8, 0, 0, 0], 0));
    assert_eq!(slide_and_merge(&[2, 4, 8, 16]), (vec![2, 4, 8, 16], 0));
    assert_eq!(slide_and_merge(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
}

#[test]
fn test_shift_each_direction() {
    let start = board(&[
        [2, 0, 2, 4],
        [0, 0, 0, 0],
        [2, 0, 0, 0],
        [4, 0, 0, 4],
    ]);

    let (left, gained) = start.shift(Direction::Left);
    assert_eq!(
        left,
        board(&[[4, 4, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [8, 0, 0, 0]])
    );
    assert_eq!(gained, 12);

    let (right, gained) = start.shift(Direction::Right);
    assert_eq!(
        right,
        board(&[[0, 0, 4, 4], [0, 0, 0, 0], [0, 0, 0, 2], [0, 0, 0, 8]])
    );
    assert_eq!(gained, 12);

    let (up, gained) = start.shift(Direction::Up);
    assert_eq!(
        up,
        board(&[[4, 0, 2, 8], [4, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]])
    );
    assert_eq!(gained, 12);

    let (down, gained) = start.shift(Direction::Down);
    assert_eq!(
        down,
        board(&[[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 0], [4, 0, 2, 8]])
    );
    assert_eq!(gained, 12);
}

#[test]
fn test_transpose_and_reverse_are_involutions() {
    let b = board(&[
        [2, 4, 8, 16],
        [0, 2, 0, 4],
        [8, 0, 0, 0],
        [0, 0, 0, 2],
    ]);
    assert_eq!(b.transpose().transpose(), b);
    assert_eq!(b.reverse_rows().reverse_rows(), b);
    assert_eq!(b.transpose().get(0, 2).unwrap(), Some(8));
    assert_eq!(b.reverse_rows().get(0, 0).unwrap(), Some(16));
}

#[test]
fn test_full_checkerboard_has_no_merge() {
    let b = board(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(b.is_full());
    assert!(!b.has_adjacent_merge());
    assert!(!b.has_legal_move());
    for dir in Direction::ALL {
        assert!(!b.can_shift(dir));
    }
}

#[test]
fn test_adjacent_merge_checks_right_and_bottom_neighbours() {
    let horizontal = board(&[
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 8, 8],
    ]);
    assert!(horizontal.has_adjacent_merge());
    assert!(horizontal.can_shift(Direction::Left));
    assert!(!horizontal.can_shift(Direction::Up));

    let vertical = board(&[
        [2, 4, 2, 16],
        [4, 2, 4, 16],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(vertical.has_adjacent_merge());
    assert!(vertical.can_shift(Direction::Down));
    assert!(!vertical.can_shift(Direction::Right));
}

#[test]
fn test_from_rows_validation() {
    assert_eq!(
        Board::from_rows(&[[2u64, 3], [0, 0]]).unwrap_err(),
        BoardError::InvalidTile(3)
    );
    assert_eq!(
        Board::from_rows(&[[1u64, 0], [0, 0]]).unwrap_err(),
        BoardError::InvalidTile(1)
    );
    assert_eq!(
        Board::from_rows(&[vec![2u64, 0], vec![0]]).unwrap_err(),
        BoardError::InvalidSize(1)
    );
    assert_eq!(Board::from_rows(&[[2u64]]).unwrap_err(), BoardError::InvalidSize(1));
    assert_eq!(Board::new(8).unwrap_err(), BoardError::InvalidSize(8));
}

#[test]
fn test_get_and_queries() {
    let b = board(&[
        [0, 2, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 64, 0],
        [0, 0, 0, 0],
    ]);
    assert_eq!(b.get(0, 1).unwrap(), Some(2));
    assert_eq!(b.get(0, 0).unwrap(), None);
    assert_eq!(
        b.get(4, 0).unwrap_err(),
        BoardError::InvalidIndex { row: 4, col: 0 }
    );
    assert_eq!(b.empty_count(), 14);
    assert_eq!(b.empty_positions().len(), 14);
    assert_eq!(b.max_tile(), 64);
    assert_eq!(b.total(), 66);
    assert_eq!(b.rows().count(), 4);
    assert!(!b.is_full());
}

#[test]
fn test_other_board_sizes() {
    let b = Board::from_rows(&[[2u64, 2, 0, 4, 4], [0; 5], [0; 5], [0; 5], [0; 5]]).unwrap();
    let (left, gained) = b.shift(Direction::Left);
    assert_eq!(left.rows().next().unwrap(), &[4, 8, 0, 0, 0]);
    assert_eq!(gained, 12);

    let small = Board::from_rows(&[[2u64, 2], [2, 2]]).unwrap();
    let (down, gained) = small.shift(Direction::Down);
    assert_eq!(down, Board::from_rows(&[[0u64, 0], [4, 4]]).unwrap());
    assert_eq!(gained, 8);
}

#[test]
fn test_from_rows_rejects_unreachable_tiles() {
    // a 2x2 board tops out at 2^(4+1)
    assert!(Board::from_rows(&[[32u64, 0], [0, 0]]).is_ok());
    assert_eq!(
        Board::from_rows(&[[64u64, 0], [0, 0]]).unwrap_err(),
        BoardError::InvalidTile(64)
    );
    assert_eq!(
        Board::from_rows(&[[1u64 << 63, 1 << 63], [0, 0]]).unwrap_err(),
        BoardError::InvalidTile(1 << 63)
    );
    assert_eq!(max_reachable_tile(7), 1 << 50);
}

#[test]
fn test_largest_tiles_merge_without_overflow() {
    let top = max_reachable_tile(7);
    let mut rows = vec![vec![0u64; 7]; 7];
    rows[0][0] = top / 2;
    rows[0][1] = top / 2;
    let b = Board::from_rows(&rows).unwrap();
    let (left, gained) = b.shift(Direction::Left);
    assert_eq!(left.get(0, 0).unwrap(), Some(top));
    assert_eq!(gained, top);
    assert_eq!(left.total(), b.total());
}
