//! Distance-to-goal metrics.
//!
//! The goal cell of value v (1-indexed, row-major) is
//! `row = (v-1)/n, col = (v-1)%n`; the blank is excluded from both counts.
//! Manhattan is the search heuristic: admissible, and consistent because any
//! single slide changes it by at most 1.

use super::state::Board;

impl Board {
    /// Number of tiles out of their goal position.
    #[must_use]
    pub fn hamming(&self) -> u32 {
        let mut count = 0;
        for (offset, &value) in self.tiles.iter().enumerate() {
            if value != 0 && value as usize != offset + 1 {
                count += 1;
            }
        }
        count
    }

    /// Sum over all tiles of the grid distance to the goal position.
    #[must_use]
    pub fn manhattan(&self) -> u32 {
        let dim = self.dim;
        let mut total = 0u32;
        for (offset, &value) in self.tiles.iter().enumerate() {
            if value == 0 || value as usize == offset + 1 {
                continue;
            }
            let goal = value as usize - 1;
            let row_delta = (offset / dim) as i64 - (goal / dim) as i64;
            let col_delta = (offset % dim) as i64 - (goal % dim) as i64;
            total += (row_delta.unsigned_abs() + col_delta.unsigned_abs()) as u32;
        }
        total
    }

    /// Is this the goal board?
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }
}
