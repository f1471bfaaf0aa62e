//! Legal move generation for checkers positions.
//!
//! All functions here are pure functions of their inputs. Ordering of the
//! generated moves is deterministic: squares are scanned row by row, and each
//! piece lists its moves by diagonal direction. Randomized ordering is applied
//! by the caller that owns a random source, see `Engine::generate_moves_for_side`.

use crate::coretypes::{Move, PieceKind, Side, Square, DIAGONALS};
use crate::movelist::{Line, MoveList};
use crate::position::Position;

/// Moves generated for a single piece or a whole side.
/// If `has_capture` is true, every move in `list` is a capture.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Moves {
    pub list: MoveList,
    pub has_capture: bool,
}

impl Moves {
    pub fn new() -> Self {
        Self {
            list: MoveList::new(),
            has_capture: false,
        }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the generated move equal to `move_`, which carries the captured square if any.
    pub fn find(&self, move_: &Move) -> Option<Move> {
        self.list.iter().find(|legal| *legal == move_).copied()
    }
}

impl Default for Moves {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate all legal moves for a side.
///
/// Forced capture: if any piece of the side can capture, only captures are returned,
/// quiet moves of every other piece are discarded.
pub fn side_moves(position: &Position, side: Side) -> Moves {
    let mut moves = Moves::new();

    for (square, piece) in position.pieces() {
        if piece.side() != side {
            continue;
        }
        let piece_moves = piece_moves(position, square);

        if piece_moves.has_capture && !moves.has_capture {
            moves.has_capture = true;
            moves.list.clear();
        }
        if piece_moves.has_capture == moves.has_capture {
            moves.list.extend(piece_moves.list);
        }
    }

    moves
}

/// Generate all legal moves for the piece on `square`.
/// If the piece has any capture, only its captures are returned.
/// An empty square has no moves.
pub fn piece_moves(position: &Position, square: Square) -> Moves {
    let mut moves = Moves::new();
    let piece = match position[square] {
        Some(piece) => piece,
        None => return moves,
    };

    match piece.kind() {
        PieceKind::Man => man_captures(position, square, piece.side(), &mut moves.list),
        PieceKind::King => king_captures(position, square, piece.side(), &mut moves.list),
    }
    if !moves.list.is_empty() {
        moves.has_capture = true;
        return moves;
    }

    match piece.kind() {
        PieceKind::Man => man_steps(position, square, piece.side(), &mut moves.list),
        PieceKind::King => king_steps(position, square, &mut moves.list),
    }
    moves
}

/// Men jump an adjacent opposing piece in any of the four diagonals,
/// landing on the empty square right behind it.
fn man_captures(position: &Position, origin: Square, side: Side, list: &mut MoveList) {
    for step in DIAGONALS {
        let jumped = origin.offset(step);
        let landing = jumped.offset(step);
        if !position.is_vacant(landing) {
            continue;
        }
        if let Some(piece) = position[jumped] {
            if piece.side() != side {
                list.push(Move::capture(origin, landing, jumped));
            }
        }
    }
}

/// Kings slide over any number of empty squares towards the first piece of a diagonal.
/// If it is an opposing piece, every empty square past it, up to the next piece, is a landing square.
fn king_captures(position: &Position, origin: Square, side: Side, list: &mut MoveList) {
    for step in DIAGONALS {
        let mut jumped: Option<Square> = None;
        let mut square = origin.offset(step);

        while square.is_on_board() {
            match (position[square], jumped) {
                (None, Some(captured)) => list.push(Move::capture(origin, square, captured)),
                (None, None) => (),
                (Some(piece), None) if piece.side() != side => jumped = Some(square),
                // Own piece, or a second piece after the jumped one.
                (Some(_), _) => break,
            }
            square = square.offset(step);
        }
    }
}

/// Men step to one of the two forward diagonal squares.
fn man_steps(position: &Position, origin: Square, side: Side, list: &mut MoveList) {
    let forward = side.forward();
    for col_step in [-1, 1] {
        let target = origin.offset((forward, col_step));
        if position.is_vacant(target) {
            list.push(Move::new(origin, target));
        }
    }
}

/// Kings step to any empty square of a diagonal until blocked.
fn king_steps(position: &Position, origin: Square, list: &mut MoveList) {
    for step in DIAGONALS {
        let mut target = origin.offset(step);
        while position.is_vacant(target) {
            list.push(Move::new(origin, target));
            target = target.offset(step);
        }
    }
}

/// Expand every legal turn of a side into its complete sequence of moves.
/// A capture is followed by further captures of the same piece until it has none left,
/// each branching continuation producing its own turn.
pub fn full_turns(position: &Position, side: Side) -> Vec<Line> {
    let moves = side_moves(position, side);
    let mut turns = Vec::with_capacity(moves.len());

    for move_ in moves.list {
        let mut line = Line::new();
        line.push(move_);
        if move_.is_capture() {
            extend_chain(&position.with_move(move_), line, &mut turns);
        } else {
            turns.push(line);
        }
    }

    turns
}

fn extend_chain(position: &Position, line: Line, turns: &mut Vec<Line>) {
    let landing = match line.last() {
        Some(last) => last.to(),
        None => return,
    };
    let continuations = piece_moves(position, landing);

    if !continuations.has_capture {
        turns.push(line);
        return;
    }
    for move_ in continuations.list {
        let mut longer = line.clone();
        longer.push(move_);
        extend_chain(&position.with_move(move_), longer, turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Layout;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn start_position_moves() {
        let position = Position::start_position();
        let white = side_moves(&position, Side::White);
        let black = side_moves(&position, Side::Black);
        assert_eq!(white.len(), 7);
        assert_eq!(black.len(), 7);
        assert!(!white.has_capture);
        assert!(white.list.iter().all(|m| m.from().row == 5 && m.to().row == 4));
        assert!(black.list.iter().all(|m| m.from().row == 2 && m.to().row == 3));
    }

    #[test]
    fn man_captures_backwards() {
        let position = Position::parse_layout(
            "......../......../......../......../......../..w...../...b..../........",
        )
        .unwrap();
        let moves = piece_moves(&position, sq(5, 2));
        assert!(moves.has_capture);
        assert_eq!(moves.list.as_slice(), &[Move::new(sq(5, 2), sq(7, 4))]);
        assert_eq!(moves.list[0].captured(), Some(sq(6, 3)));
    }

    #[test]
    fn man_cannot_jump_own_piece_or_off_board() {
        let position = Position::parse_layout(
            "......../......../......../......../...w..../..w...../.b....../........",
        )
        .unwrap();
        // (5,2) has an own piece at (4,3), and (6,1) lands on (7,0).
        let moves = piece_moves(&position, sq(5, 2));
        assert!(moves.has_capture);
        assert_eq!(moves.list.as_slice(), &[Move::new(sq(5, 2), sq(7, 0))]);

        let edge = Position::parse_layout(
            "......../......../......../......../......../......../b......./.w......",
        )
        .unwrap();
        let moves = piece_moves(&edge, sq(7, 1));
        assert!(!moves.has_capture);
        assert_eq!(moves.list.as_slice(), &[Move::new(sq(7, 1), sq(6, 2))]);
    }

    #[test]
    fn king_long_capture_has_every_landing() {
        let position = Position::parse_layout(
            "W......./......../..b...../......../......../......../......../........",
        )
        .unwrap();
        let moves = piece_moves(&position, sq(0, 0));
        assert!(moves.has_capture);
        let landings: Vec<Square> = moves.list.iter().map(|m| m.to()).collect();
        assert_eq!(landings, vec![sq(3, 3), sq(4, 4), sq(5, 5), sq(6, 6), sq(7, 7)]);
        assert!(moves.list.iter().all(|m| m.captured() == Some(sq(2, 2))));
    }

    #[test]
    fn king_capture_stops_at_second_piece() {
        let position = Position::parse_layout(
            "W......./.b....../......../...b..../......../......../......../........",
        )
        .unwrap();
        let moves = piece_moves(&position, sq(0, 0));
        assert!(moves.has_capture);
        assert_eq!(moves.list.as_slice(), &[Move::new(sq(0, 0), sq(2, 2))]);

        let blocked = Position::parse_layout(
            "W......./.b....../..b...../......../......../......../......../........",
        )
        .unwrap();
        let moves = piece_moves(&blocked, sq(0, 0));
        assert!(!moves.has_capture);
        assert!(moves.is_empty());
    }

    #[test]
    fn king_steps_until_blocked() {
        let position = Position::parse_layout(
            "......../......../......../...W..../......../.....W../......../........",
        )
        .unwrap();
        let moves = piece_moves(&position, sq(3, 3));
        assert!(!moves.has_capture);
        // 3 up-left, 3 up-right, 3 down-left, 1 down-right before its own king.
        assert_eq!(moves.len(), 10);
        assert!(!moves.list.contains(&Move::new(sq(3, 3), sq(5, 5))));
    }

    #[test]
    fn forced_capture_discards_quiet_moves() {
        let position = Position::parse_layout(
            "......../......../......../......../...b..../..w...../......../w.......",
        )
        .unwrap();
        let moves = side_moves(&position, Side::White);
        assert!(moves.has_capture);
        assert!(moves.list.iter().all(Move::is_capture));
        assert_eq!(moves.list.as_slice(), &[Move::new(sq(5, 2), sq(3, 4))]);

        let black = side_moves(&position, Side::Black);
        assert!(black.has_capture);
        assert_eq!(black.list.as_slice(), &[Move::new(sq(4, 3), sq(6, 1))]);
    }

    #[test]
    fn empty_square_has_no_moves() {
        let moves = piece_moves(&Position::new(), sq(4, 4));
        assert!(moves.is_empty());
        assert!(!moves.has_capture);
    }

    #[test]
    fn full_turns_expand_chains() {
        let position = Position::parse_layout(
            "......../......../.b.b..../......../.....b../......w./......../........",
        )
        .unwrap();
        let turns = full_turns(&position, Side::White);
        assert_eq!(turns.len(), 1);
        let line = &turns[0];
        assert_eq!(line.len(), 3);
        assert_eq!(line[2].to(), sq(3, 0));
        for pair in line.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from());
        }
    }
}
