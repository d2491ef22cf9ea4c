//! Dual A* solver for the sliding-tile puzzle.
//!
//! Every legal slide preserves the parity of the tile permutation, while a
//! single transposition of two tiles flips it, so exactly one of a board and
//! its twin can reach the goal. The solver runs one best-first search on
//! each, advancing them in lockstep (one expansion per queue per round) and
//! stopping at the first goal: a goal on the original side yields the optimal
//! solution, a goal on the twin side proves the original unsolvable. No
//! permutation-parity arithmetic is ever performed.
//!
//! Priority is `g + manhattan` with the heuristic value cached per node.
//! Expansion skips only the immediate predecessor board — there is no
//! visited set, by design; the consistent heuristic keeps longer cycles
//! non-competitive without it.

mod node;
mod racing;
mod search;


use crate::board::Board;

use search::{Search, Step};

/// Result of solving one initial board.
///
/// The whole search runs inside [`Solver::new`]; the constructed value is
/// immutable and query-only.
///
/// # Example
/// ```
/// use npuzzle_engine::{Board, Solver};
///
/// let board: Board = "3\n1 2 3\n4 5 6\n7 0 8".parse().unwrap();
/// let solver = Solver::new(board);
/// assert!(solver.is_solvable());
/// assert_eq!(solver.moves(), 1);
/// ```
#[derive(Debug)]
pub struct Solver {
    moves: i32,
    solution: Option<Vec<Board>>,
}

impl Solver {
    /// Solve `initial` with the synchronized dual search.
    #[must_use]
    pub fn new(initial: Board) -> Self {
        // fix the twin before seeding: both queues must agree on one twin
        let twin = initial.twin().clone();
        let mut primary = Search::seeded(initial);
        let mut secondary = Search::seeded(twin);

        loop {
            match primary.step() {
                Step::Goal(goal) => return Solver::solved(&primary, goal),
                Step::Expanded => {}
                Step::Exhausted => return Solver::unsolvable(),
            }
            match secondary.step() {
                // the twin reached the goal first: the original cannot
                Step::Goal(_) => return Solver::unsolvable(),
                Step::Expanded | Step::Exhausted => {}
            }
        }
    }

    /// Solve `initial` with the two searches racing on separate threads
    /// instead of in lockstep. Same verdict and optimal move count as
    /// [`Solver::new`].
    #[must_use]
    pub fn racing(initial: Board) -> Self {
        racing::solve(initial)
    }

    pub(crate) fn solved(search: &Search, goal: usize) -> Self {
        #[cfg(feature = "logging")]
        log::debug!(
            "solved in {} moves after {} expansions",
            search.moves_of(goal),
            search.expansions()
        );
        Solver {
            moves: search.moves_of(goal) as i32,
            solution: Some(search.path(goal)),
        }
    }

    pub(crate) fn unsolvable() -> Self {
        Solver {
            moves: -1,
            solution: None,
        }
    }

    /// Can the initial board reach the goal?
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.moves >= 0
    }

    /// Minimum number of slides to the goal, or -1 if unsolvable.
    #[must_use]
    pub fn moves(&self) -> i32 {
        self.moves
    }

    /// Boards from the initial board to the goal inclusive
    /// (`moves() + 1` entries), or `None` if unsolvable.
    #[must_use]
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }
}
