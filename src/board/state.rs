use std::hash::{Hash, Hasher};

use once_cell::sync::OnceCell;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::GridError;
use super::moves::Direction;

/// One immutable arrangement of tiles on an n×n grid.
///
/// Tiles are stored row-major; value 0 is the blank. The linear offset of the
/// blank is cached at construction so neighbor generation never rescans the
/// grid. Equality and hashing cover dimension and cells only — the memoized
/// twin does not participate.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) dim: usize,
    pub(crate) tiles: Vec<u32>,
    pub(crate) blank: usize,
    pub(crate) twin: OnceCell<Box<Board>>,
}

/// Check that `tiles` is a permutation of `0..dim²` and return the blank's
/// linear offset. Shared by grid construction, text parsing, and
/// deserialization.
pub(crate) fn validate_tiles(dim: usize, tiles: &[u32]) -> Result<usize, GridError> {
    if dim < 2 {
        return Err(GridError::TooSmall { dim });
    }
    let cells = dim
        .checked_mul(dim)
        .filter(|&c| c <= u32::MAX as usize)
        .ok_or(GridError::TooLarge { dim })?;
    if tiles.len() != cells {
        return Err(GridError::WrongCellCount {
            expected: cells,
            found: tiles.len(),
        });
    }

    let mut seen = vec![false; cells];
    let mut blank = 0;
    for (offset, &value) in tiles.iter().enumerate() {
        let index = value as usize;
        if index >= cells {
            return Err(GridError::ValueOutOfRange {
                value,
                limit: cells as u32,
            });
        }
        if seen[index] {
            return Err(GridError::DuplicateValue { value });
        }
        seen[index] = true;
        if value == 0 {
            blank = offset;
        }
    }
    Ok(blank)
}

impl Board {
    /// Construct a board from an n×n grid of tile values.
    ///
    /// The grid must be square with n ≥ 2 and contain each value in
    /// `[0, n²-1]` exactly once.
    pub fn from_grid(rows: &[Vec<u32>]) -> Result<Self, GridError> {
        let dim = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != dim {
                return Err(GridError::NotSquare {
                    row,
                    width: cells.len(),
                    expected: dim,
                });
            }
        }
        let tiles: Vec<u32> = rows.iter().flatten().copied().collect();
        let blank = validate_tiles(dim, &tiles)?;
        Ok(Board {
            dim,
            tiles,
            blank,
            twin: OnceCell::new(),
        })
    }

    /// The solved board: tiles in order, blank in the last cell.
    ///
    /// # Panics
    /// Panics if `dim < 2`.
    #[must_use]
    pub fn goal(dim: usize) -> Self {
        assert!(dim >= 2, "board dimension must be at least 2");
        let cells = dim * dim;
        let mut tiles: Vec<u32> = (1..cells as u32).collect();
        tiles.push(0);
        Board {
            dim,
            tiles,
            blank: cells - 1,
            twin: OnceCell::new(),
        }
    }

    /// A board produced by `steps` random legal slides from the goal,
    /// never immediately undoing the previous slide. Solvable by
    /// construction.
    ///
    /// # Panics
    /// Panics if `dim < 2`.
    #[must_use]
    pub fn scrambled(dim: usize, steps: usize) -> Self {
        Self::scrambled_with(dim, steps, &mut rand::thread_rng())
    }

    /// As [`Board::scrambled`], with a caller-supplied RNG for reproducible
    /// instances.
    ///
    /// # Panics
    /// Panics if `dim < 2`.
    #[must_use]
    pub fn scrambled_with<R: Rng>(dim: usize, steps: usize, rng: &mut R) -> Self {
        let mut board = Board::goal(dim);
        let mut previous: Option<Direction> = None;
        for _ in 0..steps {
            let candidates: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|d| previous != Some(d.opposite()) && board.slide(*d).is_some())
                .collect();
            if let Some(&direction) = candidates.choose(rng) {
                // the filter above guarantees the slide succeeds
                if let Some(next) = board.slide(direction) {
                    board = next;
                    previous = Some(direction);
                }
            }
        }
        board
    }

    /// Internal constructor for boards derived by a single swap; `blank` must
    /// be the offset of the 0 tile in `tiles`.
    pub(crate) fn from_parts(dim: usize, tiles: Vec<u32>, blank: usize) -> Self {
        debug_assert_eq!(tiles[blank], 0);
        Board {
            dim,
            tiles,
            blank,
            twin: OnceCell::new(),
        }
    }

    /// Board dimension n.
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Tile value at (row, col), or `None` out of bounds.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> Option<u32> {
        if row < self.dim && col < self.dim {
            Some(self.tiles[row * self.dim + col])
        } else {
            None
        }
    }

    /// The blank's (row, col) position.
    #[inline]
    #[must_use]
    pub(crate) fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.dim, self.blank % self.dim)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dim.hash(state);
        self.tiles.hash(state);
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{validate_tiles, Board, OnceCell};

    #[derive(Serialize, Deserialize)]
    struct RawBoard {
        dim: usize,
        tiles: Vec<u32>,
    }

    impl Serialize for Board {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawBoard {
                dim: self.dim,
                tiles: self.tiles.clone(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Board {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawBoard::deserialize(deserializer)?;
            let blank = validate_tiles(raw.dim, &raw.tiles).map_err(D::Error::custom)?;
            Ok(Board {
                dim: raw.dim,
                tiles: raw.tiles,
                blank,
                twin: OnceCell::new(),
            })
        }
    }
}
