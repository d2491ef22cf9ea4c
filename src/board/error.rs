//! Error types for board construction and parsing.

use std::fmt;

/// Error type for grid validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Dimension below the 2×2 minimum
    TooSmall { dim: usize },
    /// Dimension so large the cell count overflows
    TooLarge { dim: usize },
    /// A row whose width differs from the number of rows
    NotSquare { row: usize, width: usize, expected: usize },
    /// Flat tile list whose length is not dim²
    WrongCellCount { expected: usize, found: usize },
    /// Tile value outside `[0, n²-1]`
    ValueOutOfRange { value: u32, limit: u32 },
    /// Tile value appearing more than once
    DuplicateValue { value: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::TooSmall { dim } => {
                write!(f, "Board dimension {dim} is below the minimum of 2")
            }
            GridError::TooLarge { dim } => {
                write!(f, "Board dimension {dim} is too large")
            }
            GridError::NotSquare {
                row,
                width,
                expected,
            } => {
                write!(f, "Row {row} has {width} cells, expected {expected}")
            }
            GridError::WrongCellCount { expected, found } => {
                write!(f, "Expected {expected} cells, found {found}")
            }
            GridError::ValueOutOfRange { value, limit } => {
                write!(f, "Tile value {value} outside 0..{limit}")
            }
            GridError::DuplicateValue { value } => {
                write!(f, "Tile value {value} appears more than once")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Error type for text board description parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Input with no tokens at all
    Empty,
    /// First token is not a usable dimension
    InvalidDimension { found: String },
    /// A tile token that is not a non-negative integer
    InvalidTile { found: String },
    /// Fewer tile tokens than the dimension requires
    TooFewTiles { expected: usize, found: usize },
    /// More tile tokens than the dimension requires
    TooManyTiles { expected: usize },
    /// Tokens parsed but the grid itself is invalid
    Grid(GridError),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::Empty => write!(f, "Empty board description"),
            ParseBoardError::InvalidDimension { found } => {
                write!(f, "Invalid dimension '{found}'")
            }
            ParseBoardError::InvalidTile { found } => {
                write!(f, "Invalid tile value '{found}'")
            }
            ParseBoardError::TooFewTiles { expected, found } => {
                write!(f, "Expected {expected} tiles, found only {found}")
            }
            ParseBoardError::TooManyTiles { expected } => {
                write!(f, "More than the expected {expected} tiles")
            }
            ParseBoardError::Grid(e) => write!(f, "Invalid grid: {e}"),
        }
    }
}

impl std::error::Error for ParseBoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseBoardError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ParseBoardError {
    fn from(e: GridError) -> Self {
        ParseBoardError::Grid(e)
    }
}
