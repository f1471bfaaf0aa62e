//! Performance Test
//!
//! [Perft](https://www.chessprogramming.org/Perft)
//!
//! A simple debugging and testing function used to count
//! the number of nodes at a specific depth.
//! A node is reached by one full turn: a step, a capture, or a whole capture chain.

use std::ops::{Add, AddAssign};
use std::panic;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use crate::coretypes::{PlyKind, Side};
use crate::movegen;
use crate::movelist::Line;
use crate::position::Position;

/// Debugging information about results of perft test.
/// nodes: Number of nodes at lowest depth of perft.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl Add for PerftInfo {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PerftInfo {
            nodes: self.nodes + rhs.nodes,
        }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

/// Count the number of full-turn paths of length `ply` from `position`, `side` to move.
/// Paths that end early because a side has no move are not counted.
/// With more than one thread, the root turns are shared between worker threads.
pub fn perft(position: Position, side: Side, ply: PlyKind, threads: usize) -> PerftInfo {
    // Guard easy to calculate inputs.
    if ply == 0 {
        return PerftInfo::new(1);
    } else if ply <= 2 || threads <= 1 {
        return perft_recurse(&position, side, ply);
    }

    let turns = movegen::full_turns(&position, side);
    if turns.is_empty() {
        return PerftInfo::new(0);
    }

    let turns = Arc::new(Mutex::new(turns));
    let total_perft_info = Arc::new(Mutex::new(PerftInfo::new(0)));
    let mut handles = Vec::with_capacity(threads);

    for _ in 0..threads {
        let turns = Arc::clone(&turns);
        let total_perft_info = Arc::clone(&total_perft_info);

        handles.push(thread::spawn(move || {
            perft_executor(position, side, ply, turns, total_perft_info);
        }));
    }

    for handle in handles {
        if let Err(payload) = handle.join() {
            panic::resume_unwind(payload);
        }
    }

    let total = *total_perft_info
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    total
}

/// perft_executor steals one root turn at a time and counts the nodes below it.
/// When there are no turns left to steal, it adds its count to the total and returns.
fn perft_executor(
    position: Position,
    side: Side,
    ply: PlyKind,
    turns: Arc<Mutex<Vec<Line>>>,
    total_perft_info: Arc<Mutex<PerftInfo>>,
) {
    debug_assert!(ply > 1);
    let steal = || turns.lock().unwrap_or_else(PoisonError::into_inner).pop();
    let mut perft_info = PerftInfo::new(0);

    while let Some(turn) = steal() {
        let mut child = position;
        child.do_line(&turn);
        perft_info += perft_recurse(&child, !side, ply - 1);
    }

    *total_perft_info
        .lock()
        .unwrap_or_else(PoisonError::into_inner) += perft_info;
}

/// Ply must be non-zero.
fn perft_recurse(position: &Position, side: Side, ply: PlyKind) -> PerftInfo {
    debug_assert_ne!(ply, 0);
    let turns = movegen::full_turns(position, side);
    if ply == 1 {
        PerftInfo::new(turns.len() as u64)
    } else {
        let mut perft_info = PerftInfo::new(0);
        for turn in turns {
            let mut child = *position;
            child.do_line(&turn);
            perft_info += perft_recurse(&child, !side, ply - 1);
        }
        perft_info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    #[test]
    fn perft_start_position() {
        let position = Position::start_position();
        assert_eq!(perft(position, Side::White, 0, 1).nodes, 1);
        assert_eq!(perft(position, Side::White, 1, 1).nodes, 7);
        assert_eq!(perft(position, Side::White, 2, 1).nodes, 49);
    }

    #[test]
    fn threads_agree() {
        let position = Position::start_position();
        let single = perft(position, Side::White, 4, 1);
        let multi = perft(position, Side::White, 4, 3);
        assert_eq!(single, multi);
    }

    #[test]
    fn chain_is_one_node() {
        let position = Position::parse_layout(
            "......../......../.b.b..../......../.....b../......w./......../........",
        )
        .unwrap();
        assert_eq!(perft(position, Side::White, 1, 1).nodes, 1);
        // Black has no piece left after the chain.
        assert_eq!(perft(position, Side::White, 2, 1).nodes, 0);
    }
}
