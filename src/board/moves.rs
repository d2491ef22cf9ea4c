//! Neighbor and twin generation.

use once_cell::sync::OnceCell;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Board;

/// A direction the blank can move; the adjacent tile slides the other way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order `neighbors` emits them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta applied to the blank.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl Board {
    /// The board reached by moving the blank one cell in `direction`, or
    /// `None` at the grid edge.
    #[must_use]
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let (row, col) = self.blank_position();
        let (row_delta, col_delta) = direction.delta();
        let row = row.checked_add_signed(row_delta)?;
        let col = col.checked_add_signed(col_delta)?;
        if row >= self.dim || col >= self.dim {
            return None;
        }
        let target = row * self.dim + col;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board::from_parts(self.dim, tiles, target))
    }

    /// All boards one slide away, in the fixed order up, down, left, right
    /// (directions the blank cannot move in are skipped). Between 2 and 4
    /// results; never includes `self`.
    #[must_use]
    pub fn neighbors(&self) -> Vec<Board> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.slide(direction))
            .collect()
    }

    /// A board with one pair of non-blank tiles swapped, the pair chosen
    /// uniformly at random on first call and memoized: every call on the same
    /// instance returns the identical board. Exactly one of `self` and its
    /// twin can reach the goal, which is what the dual search exploits.
    #[must_use]
    pub fn twin(&self) -> &Board {
        self.twin.get_or_init(|| {
            let mut rng = rand::thread_rng();
            let cells = self.tiles.len();
            let first = loop {
                let offset = rng.gen_range(0..cells);
                if self.tiles[offset] != 0 {
                    break offset;
                }
            };
            let second = loop {
                let offset = rng.gen_range(0..cells);
                if self.tiles[offset] != 0 && offset != first {
                    break offset;
                }
            };
            let mut tiles = self.tiles.clone();
            tiles.swap(first, second);
            Box::new(Board {
                dim: self.dim,
                tiles,
                blank: self.blank,
                twin: OnceCell::new(),
            })
        })
    }
}
