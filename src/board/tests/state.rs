use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::board::{Board, GridError};

fn hash_of(board: &Board) -> u64 {
    let mut hasher = DefaultHasher::new();
    board.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn goal_board_layout() {
    let board = Board::goal(3);
    assert_eq!(board.dimension(), 3);
    assert_eq!(board.tile(0, 0), Some(1));
    assert_eq!(board.tile(2, 1), Some(8));
    assert_eq!(board.tile(2, 2), Some(0));
    assert_eq!(board.tile(3, 0), None);
}

#[test]
fn from_grid_accepts_valid_permutation() {
    let board = Board::from_grid(&[vec![8, 1, 3], vec![4, 0, 2], vec![7, 6, 5]]).unwrap();
    assert_eq!(board.dimension(), 3);
    assert_eq!(board.tile(1, 1), Some(0));
}

#[test]
fn from_grid_rejects_too_small() {
    assert_eq!(
        Board::from_grid(&[vec![0]]),
        Err(GridError::TooSmall { dim: 1 })
    );
    assert_eq!(Board::from_grid(&[]), Err(GridError::TooSmall { dim: 0 }));
}

#[test]
fn from_grid_rejects_ragged_rows() {
    let err = Board::from_grid(&[vec![1, 2], vec![3]]).unwrap_err();
    assert_eq!(
        err,
        GridError::NotSquare {
            row: 1,
            width: 1,
            expected: 2
        }
    );
}

#[test]
fn from_grid_rejects_out_of_range_value() {
    let err = Board::from_grid(&[vec![1, 2], vec![3, 4]]).unwrap_err();
    assert_eq!(err, GridError::ValueOutOfRange { value: 4, limit: 4 });
}

#[test]
fn from_grid_rejects_duplicates() {
    let err = Board::from_grid(&[vec![1, 2], vec![2, 0]]).unwrap_err();
    assert_eq!(err, GridError::DuplicateValue { value: 2 });
}

#[test]
fn equality_ignores_twin_memo() {
    let a = Board::goal(3);
    let b = Board::goal(3);
    let _ = a.twin();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn equality_requires_matching_cells() {
    let goal = Board::goal(3);
    let moved = goal.neighbors().remove(0);
    assert_ne!(goal, moved);
    assert_ne!(Board::goal(2), Board::goal(3));
}

#[test]
fn scrambled_stays_valid() {
    let board = Board::scrambled(4, 30);
    assert_eq!(board.dimension(), 4);
    // still a permutation: re-validating through from_grid must succeed
    let rows: Vec<Vec<u32>> = (0..4)
        .map(|r| (0..4).map(|c| board.tile(r, c).unwrap()).collect())
        .collect();
    assert_eq!(Board::from_grid(&rows).unwrap(), board);
}

#[test]
fn scrambled_zero_steps_is_goal() {
    assert!(Board::scrambled(3, 0).is_goal());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let board = Board::scrambled(3, 12);
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(board, back);
}

#[cfg(feature = "serde")]
#[test]
fn serde_rejects_invalid_grid() {
    let result: Result<Board, _> = serde_json::from_str(r#"{"dim":2,"tiles":[0,1,2,2]}"#);
    assert!(result.is_err());
}
