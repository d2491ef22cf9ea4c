use crate::board::Board;

#[test]
fn goal_board_has_zero_distances() {
    let goal = Board::goal(3);
    assert_eq!(goal.hamming(), 0);
    assert_eq!(goal.manhattan(), 0);
    assert!(goal.is_goal());
}

#[test]
fn classic_example_distances() {
    // the well-known 3x3 instance with hamming 5 and manhattan 10
    let board = Board::from_grid(&[vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]).unwrap();
    assert_eq!(board.hamming(), 5);
    assert_eq!(board.manhattan(), 10);
    assert!(!board.is_goal());
}

#[test]
fn one_slide_from_goal() {
    let board = Board::from_grid(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
    assert_eq!(board.hamming(), 1);
    assert_eq!(board.manhattan(), 1);
    assert!(!board.is_goal());
}

#[test]
fn blank_is_excluded_from_hamming() {
    // only the blank is displaced relative to a row-major reading, but the
    // two tiles it displaced are each one cell off
    let board = Board::from_grid(&[vec![1, 2, 3], vec![4, 0, 5], vec![7, 8, 6]]).unwrap();
    assert_eq!(board.hamming(), 2);
    assert_eq!(board.manhattan(), 2);
}

#[test]
fn metrics_on_larger_board() {
    let mut rows: Vec<Vec<u32>> = vec![
        vec![1, 2, 3, 4],
        vec![5, 6, 7, 8],
        vec![9, 10, 11, 12],
        vec![13, 14, 15, 0],
    ];
    assert!(Board::from_grid(&rows).unwrap().is_goal());

    // swap 1 and 15: each is 3 rows + 2 cols from home
    rows[0][0] = 15;
    rows[3][2] = 1;
    let board = Board::from_grid(&rows).unwrap();
    assert_eq!(board.hamming(), 2);
    assert_eq!(board.manhattan(), 10);
}

#[test]
fn hamming_zero_iff_goal() {
    let near = Board::from_grid(&[vec![1, 2, 3], vec![4, 5, 6], vec![0, 7, 8]]).unwrap();
    assert_eq!(near.is_goal(), near.hamming() == 0);
    let goal = Board::goal(5);
    assert_eq!(goal.is_goal(), goal.hamming() == 0);
}
