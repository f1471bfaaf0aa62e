//! MoveList types used in Checkers engine.
//!
//! The underlying type of MoveList may change at any time during
//! pre-1.0 development, so a MoveList type alias makes changes easy.

use std::fmt::Display;

use arrayvec::ArrayVec;

use crate::coretypes::Move;
use crate::coretypes::MAX_LINE_LEN;
use crate::coretypes::MAX_MOVES;

/// MoveList is a container that can hold at most `MAX_MOVES`, the most number of moves per any position.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;
/// Line is a sequence of moves making up one full turn of a side:
/// a single step, a single capture, or a chain of captures by the same piece.
pub type Line = ArrayVec<Move, MAX_LINE_LEN>;

/// Returns a string with the displayed string format of an ArrayVec.
/// Display cannot be implemented on external types.
pub fn display<T: Display, const CAP: usize>(arrayvec: &ArrayVec<T, CAP>) -> String {
    let mut displayed = String::new();
    for item in arrayvec.iter() {
        displayed.push_str(&item.to_string());
        displayed.push(' ');
    }
    displayed.pop();

    displayed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Square;

    #[test]
    fn display_line() {
        let mut line = Line::new();
        assert_eq!(display(&line), "");
        line.push(Move::capture(Square::new(5, 0), Square::new(3, 2), Square::new(4, 1)));
        line.push(Move::capture(Square::new(3, 2), Square::new(1, 4), Square::new(2, 3)));
        assert_eq!(display(&line), "50x32 32x14");
    }
}
