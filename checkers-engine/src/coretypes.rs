//! The fundamental and simple types of `checkers_engine`.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::Not;
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_ROWS: usize = 8;
pub const NUM_COLS: usize = 8;
pub const NUM_SQUARES: usize = NUM_ROWS * NUM_COLS;

/// Cell codes of the position matrix shared with the outside world.
pub const EMPTY_CODE: u8 = 0;
pub const WHITE_MAN_CODE: u8 = 1;
pub const BLACK_MAN_CODE: u8 = 2;
pub const WHITE_KING_CODE: u8 = 3;
pub const BLACK_KING_CODE: u8 = 4;

// Number of ordered square pairs that share a diagonal on an 8x8 board.
// A generated move list holds at most one move per such pair.
pub const MAX_MOVES: usize = 560;

// A capture chain removes one opposing piece per move, so it can never be
// longer than the number of other squares on the board.
pub const MAX_LINE_LEN: usize = NUM_SQUARES - 1;

/// The four diagonal directions as (row, col) steps.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for search depth, counted in normal-move plies.
pub type PlyKind = u8;

/// Side can represent the owner of a piece, or a player.
/// The discriminant matches the parity convention of cell codes:
/// white pieces have odd codes, black pieces even codes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    White = 0,
    Black = 1,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Man,
    King,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) side: Side,
    pub(crate) kind: PieceKind,
}

/// A board coordinate. Row 0 is black's back row, row 7 is white's.
/// White men advance towards row 0, black men towards row 7.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

/// A single ply of a piece from one square to another, possibly jumping
/// over and capturing an opposing piece.
///
/// Two moves are equal when their `from` and `to` squares match.
/// The captured square is derived from the position and does not identify a move.
#[derive(Debug, Copy, Clone)]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) captured: Option<Square>,
}

////////////////////////////////
// Implementations and Traits //
////////////////////////////////

impl Side {
    /// Returns the side owning a cell code, assuming code is non-zero.
    pub const fn from_code(code: u8) -> Self {
        match code % 2 {
            1 => Side::White,
            _ => Side::Black,
        }
    }

    /// Row step of a man moving forward.
    pub const fn forward(&self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which a man of this side is promoted.
    pub const fn promotion_row(&self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => (NUM_ROWS - 1) as i8,
        }
    }

    /// Row a man of this side starts advancing from.
    pub const fn back_row(&self) -> i8 {
        match self {
            Side::White => (NUM_ROWS - 1) as i8,
            Side::Black => 0,
        }
    }
}

impl Not for Side {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Side::White => f.write_str("white"),
            Side::Black => f.write_str("black"),
        }
    }
}

impl FromStr for Side {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s {
            "w" | "white" => Ok(Side::White),
            "b" | "black" => Ok(Side::Black),
            _ => Err((ErrorKind::ParseSideMalformed, s).into()),
        }
    }
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    pub const fn side(&self) -> Side {
        self.side
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns the cell code of this piece.
    pub const fn code(&self) -> u8 {
        match (self.side, self.kind) {
            (Side::White, PieceKind::Man) => WHITE_MAN_CODE,
            (Side::Black, PieceKind::Man) => BLACK_MAN_CODE,
            (Side::White, PieceKind::King) => WHITE_KING_CODE,
            (Side::Black, PieceKind::King) => BLACK_KING_CODE,
        }
    }

    /// Converts a cell code into the piece it encodes.
    /// Returns Ok(None) for an empty cell, Err for codes above 4.
    pub fn from_code(code: u8) -> error::Result<Option<Self>> {
        match code {
            EMPTY_CODE => Ok(None),
            WHITE_MAN_CODE..=BLACK_KING_CODE => {
                let kind = if code > BLACK_MAN_CODE {
                    PieceKind::King
                } else {
                    PieceKind::Man
                };
                Ok(Some(Self::new(Side::from_code(code), kind)))
            }
            _ => Err((ErrorKind::InvalidCellCode, code).into()),
        }
    }

    /// The same piece, promoted to a king.
    pub const fn promoted(&self) -> Self {
        Self::new(self.side, PieceKind::King)
    }

    /// Layout character: `w`, `b` for men, `W`, `B` for kings.
    pub const fn to_char(&self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::Man) => 'w',
            (Side::Black, PieceKind::Man) => 'b',
            (Side::White, PieceKind::King) => 'W',
            (Side::Black, PieceKind::King) => 'B',
        }
    }

    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'w' => Some(Self::new(Side::White, PieceKind::Man)),
            'b' => Some(Self::new(Side::Black, PieceKind::Man)),
            'W' => Some(Self::new(Side::White, PieceKind::King)),
            'B' => Some(Self::new(Side::Black, PieceKind::King)),
            _ => None,
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.to_char()
    }
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns true if the square lies within the 8x8 board.
    pub const fn is_on_board(&self) -> bool {
        self.row >= 0 && self.row < NUM_ROWS as i8 && self.col >= 0 && self.col < NUM_COLS as i8
    }

    /// Returns the square offset by a (row, col) step, which may be off the board.
    pub const fn offset(&self, step: (i8, i8)) -> Self {
        Self::new(self.row + step.0, self.col + step.1)
    }

    /// Iterator over every square of the board, row by row.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..NUM_ROWS as i8).flat_map(|row| (0..NUM_COLS as i8).map(move |col| Square::new(row, col)))
    }

    /// Returns true for the squares pieces stand on in the start position.
    pub const fn is_playable(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let mut digits = s.chars().map(|ch| ch.to_digit(10));
        match (digits.next(), digits.next(), digits.next()) {
            (Some(Some(row)), Some(Some(col)), None) => {
                let square = Square::new(row as i8, col as i8);
                if square.is_on_board() {
                    Ok(square)
                } else {
                    Err((ErrorKind::ParseSquareMalformed, s).into())
                }
            }
            _ => Err((ErrorKind::ParseSquareMalformed, s).into()),
        }
    }
}

impl Move {
    /// Create a non-capturing move.
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// Create a move that jumps over and removes the piece on `captured`.
    pub const fn capture(from: Square, to: Square, captured: Square) -> Self {
        Self {
            from,
            to,
            captured: Some(captured),
        }
    }

    pub const fn from(&self) -> Square {
        self.from
    }
    pub const fn to(&self) -> Square {
        self.to
    }
    pub const fn captured(&self) -> Option<Square> {
        self.captured
    }
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

/// Displays as `52-43` for a step and `52x34` for a capture.
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, separator, self.to)
    }
}

/// Parses `52-43`, `52x34` or `5243`. The parsed move never carries a captured
/// square, it is meant to be matched against generated moves.
impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let s = s.trim();
        if !s.is_ascii() {
            return Err((ErrorKind::ParseMoveMalformed, s).into());
        }
        let (from_str, to_str) = match s.len() {
            4 => s.split_at(2),
            5 if matches!(s.as_bytes()[2], b'-' | b'x') => (&s[..2], &s[3..]),
            _ => return Err((ErrorKind::ParseMoveMalformed, s).into()),
        };
        let from = Square::from_str(from_str)
            .map_err(|_| error::Error::from((ErrorKind::ParseMoveMalformed, s)))?;
        let to = Square::from_str(to_str)
            .map_err(|_| error::Error::from((ErrorKind::ParseMoveMalformed, s)))?;
        Ok(Move::new(from, to))
    }
}
