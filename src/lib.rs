//! Engine for the generalized n×n sliding-tile puzzle.
//!
//! [`board::Board`] is an immutable tile arrangement carrying the distance
//! metrics the search needs; [`solver::Solver`] runs two synchronized A*
//! searches (the initial board and its twin) to decide solvability and
//! recover a minimum-length solution.

pub mod board;
pub mod solver;
pub mod sync;

pub use board::{Board, Direction, GridError, ParseBoardError};
pub use solver::Solver;
pub use sync::StopFlag;
