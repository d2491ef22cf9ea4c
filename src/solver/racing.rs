//! Parallel variant: the two searches race on separate threads.
//!
//! Each worker owns its whole search (queue and node arena); the only shared
//! state is the stop flag and the verdict slot. The twin is computed and
//! memoized before either worker starts, so both sides see the same twin and
//! the memo cell is never contended.

use parking_lot::Mutex;
use std::thread;

use crate::board::Board;
use crate::sync::StopFlag;

use super::search::{Search, Step};
use super::Solver;

enum Winner {
    /// Arena index of the goal node on the original side.
    Original(usize),
    Twin,
}

fn run_to_goal(search: &mut Search, stop: &StopFlag) -> Option<usize> {
    loop {
        if stop.is_stopped() {
            return None;
        }
        match search.step() {
            Step::Goal(goal) => return Some(goal),
            Step::Expanded => {}
            Step::Exhausted => return None,
        }
    }
}

pub(crate) fn solve(initial: Board) -> Solver {
    let twin = initial.twin().clone();
    let stop = StopFlag::new();
    let verdict: Mutex<Option<Winner>> = Mutex::new(None);

    let primary = {
        let verdict = &verdict;
        let primary_stop = stop.clone();
        let twin_stop = stop.clone();

        thread::scope(|scope| {
            let primary_worker = scope.spawn(move || {
                let mut search = Search::seeded(initial);
                if let Some(goal) = run_to_goal(&mut search, &primary_stop) {
                    *verdict.lock() = Some(Winner::Original(goal));
                    primary_stop.stop();
                }
                search
            });
            let twin_worker = scope.spawn(move || {
                let mut search = Search::seeded(twin);
                if run_to_goal(&mut search, &twin_stop).is_some() {
                    *verdict.lock() = Some(Winner::Twin);
                    twin_stop.stop();
                }
            });

            let _ = twin_worker.join();
            primary_worker.join()
        })
    };

    match (verdict.into_inner(), primary) {
        (Some(Winner::Original(goal)), Ok(search)) => Solver::solved(&search, goal),
        _ => Solver::unsolvable(),
    }
}
