//! Text board description parsing and formatting.
//!
//! The format is the dimension n on the first line followed by n rows of n
//! whitespace-separated tile values, 0 for the blank:
//!
//! ```text
//! 3
//!  8  1  3
//!  4  0  2
//!  7  6  5
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::ParseBoardError;
use super::state::{validate_tiles, Board};

impl Board {
    /// Parse a board from its text description.
    pub fn from_text(input: &str) -> Result<Self, ParseBoardError> {
        let mut tokens = input.split_whitespace();
        let first = tokens.next().ok_or(ParseBoardError::Empty)?;
        let dim: usize = first.parse().map_err(|_| ParseBoardError::InvalidDimension {
            found: first.to_string(),
        })?;
        let cells = dim
            .checked_mul(dim)
            .ok_or_else(|| ParseBoardError::InvalidDimension {
                found: first.to_string(),
            })?;

        let mut tiles = Vec::with_capacity(cells.min(1 << 16));
        for token in tokens {
            if tiles.len() == cells {
                return Err(ParseBoardError::TooManyTiles { expected: cells });
            }
            let value: u32 = token.parse().map_err(|_| ParseBoardError::InvalidTile {
                found: token.to_string(),
            })?;
            tiles.push(value);
        }
        if tiles.len() < cells {
            return Err(ParseBoardError::TooFewTiles {
                expected: cells,
                found: tiles.len(),
            });
        }

        let blank = validate_tiles(dim, &tiles)?;
        Ok(Board::from_parts(dim, tiles, blank))
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_text(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.dim * self.dim - 1).to_string().len();
        writeln!(f, "{}", self.dim)?;
        for row in 0..self.dim {
            for col in 0..self.dim {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", self.tiles[row * self.dim + col])?;
            }
            if row + 1 < self.dim {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
