//! Single best-first search instance.
//!
//! The driver is written once and instantiated twice by the solver — one
//! instance rooted at the initial board, one at its twin. Nodes live in an
//! append-only arena; predecessor links are parent indices, so path
//! reconstruction is a walk toward index 0 with no back-pointers.

use std::collections::BinaryHeap;

use crate::board::Board;

use super::node::{FrontierEntry, SearchNode};

/// Outcome of one `step` call.
pub(crate) enum Step {
    /// The popped node is the goal; its arena index.
    Goal(usize),
    /// The popped node was expanded.
    Expanded,
    /// The frontier is empty. Unreachable for a valid board (every expansion
    /// enqueues at least one child), kept so the loop is total.
    Exhausted,
}

pub(crate) struct Search {
    nodes: Vec<SearchNode>,
    frontier: BinaryHeap<FrontierEntry>,
    seq: u64,
    expansions: u64,
}

impl Search {
    pub(crate) fn seeded(root: Board) -> Self {
        let mut search = Search {
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            seq: 0,
            expansions: 0,
        };
        search.enqueue(SearchNode::root(root));
        search
    }

    fn enqueue(&mut self, node: SearchNode) {
        let entry = FrontierEntry {
            priority: node.priority,
            seq: self.seq,
            node: self.nodes.len(),
        };
        self.seq += 1;
        self.nodes.push(node);
        self.frontier.push(entry);
    }

    /// Pop the minimum-priority node. A goal node is reported without being
    /// expanded; otherwise every neighbor except the immediate predecessor's
    /// board is enqueued. The single-step lookback is the only cycle check:
    /// longer cycles are re-enqueued and priced out by their higher `g`.
    pub(crate) fn step(&mut self) -> Step {
        let Some(entry) = self.frontier.pop() else {
            return Step::Exhausted;
        };
        let index = entry.node;
        if self.nodes[index].board.is_goal() {
            return Step::Goal(index);
        }

        self.expansions += 1;
        let moves = self.nodes[index].moves + 1;
        let neighbors = self.nodes[index].board.neighbors();
        let parent = self.nodes[index].parent;
        for board in neighbors {
            if let Some(previous) = parent {
                if board == self.nodes[previous].board {
                    continue;
                }
            }
            self.enqueue(SearchNode::child(board, moves, index));
        }
        Step::Expanded
    }

    pub(crate) fn moves_of(&self, index: usize) -> u32 {
        self.nodes[index].moves
    }

    /// Boards from the root to `index` inclusive, by walking parent links
    /// and reversing.
    pub(crate) fn path(&self, index: usize) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[index].moves as usize + 1);
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            path.push(self.nodes[current].board.clone());
            cursor = self.nodes[current].parent;
        }
        path.reverse();
        path
    }

    #[cfg_attr(not(feature = "logging"), allow(dead_code))]
    pub(crate) fn expansions(&self) -> u64 {
        self.expansions
    }
}
