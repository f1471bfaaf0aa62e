//! Holds Position struct, the board the engine reasons about.
//! Position represents the placement of every piece on an 8x8 checkers board.

use std::fmt::{self, Display};
use std::ops::{Index, IndexMut};

use crate::coretypes::{Move, Piece, PieceKind, Side, Square, NUM_COLS, NUM_ROWS};
use crate::error;
use crate::movelist::Line;

/// The raw matrix of cell codes exchanged with the outside world.
/// Indexed as `matrix[row][col]`.
pub type Matrix = [[u8; NUM_COLS]; NUM_ROWS];

/// struct Position
/// Square-centric board, each square may contain a piece or be empty.
///
/// Position is a plain value: exploring a hypothetical move works on a copy
/// (see `with_move`), never on a board shared with other branches.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    board: [[Option<Piece>; NUM_COLS]; NUM_ROWS],
}

impl Position {
    /// Creates an empty Position, where all squares are None.
    pub fn new() -> Self {
        Self {
            board: [[None; NUM_COLS]; NUM_ROWS],
        }
    }

    /// Standard checkers start position.
    /// Black men fill rows 0 to 2, white men rows 5 to 7, on playable squares.
    pub fn start_position() -> Self {
        let mut position = Self::new();
        for square in Square::iter().filter(Square::is_playable) {
            if square.row < 3 {
                position[square] = Some(Piece::new(Side::Black, PieceKind::Man));
            } else if square.row > 4 {
                position[square] = Some(Piece::new(Side::White, PieceKind::Man));
            }
        }
        position
    }

    /// Build a Position from a matrix of cell codes.
    /// Fails if any code is not one of 0..=4.
    pub fn from_matrix(matrix: &Matrix) -> error::Result<Self> {
        let mut position = Self::new();
        for square in Square::iter() {
            position[square] = Piece::from_code(matrix[square.row as usize][square.col as usize])?;
        }
        Ok(position)
    }

    /// Returns the matrix of cell codes for this position.
    pub fn to_matrix(&self) -> Matrix {
        let mut matrix = [[0; NUM_COLS]; NUM_ROWS];
        for square in Square::iter() {
            if let Some(piece) = self[square] {
                matrix[square.row as usize][square.col as usize] = piece.code();
            }
        }
        matrix
    }

    /// Returns the piece on a square. Square must be on the board.
    pub fn get(&self, square: Square) -> Option<Piece> {
        self[square]
    }

    /// Places or removes a piece on a square. Square must be on the board.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self[square] = piece;
    }

    /// Returns true if the square is on the board and holds no piece.
    pub fn is_vacant(&self, square: Square) -> bool {
        square.is_on_board() && self[square].is_none()
    }

    /// Iterator over every occupied square and its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| self[square].map(|piece| (square, piece)))
    }

    /// Returns the number of (men, kings) owned by side.
    pub fn count(&self, side: Side) -> (u32, u32) {
        self.pieces()
            .filter(|(_, piece)| piece.side() == side)
            .fold((0, 0), |(men, kings), (_, piece)| match piece.kind() {
                PieceKind::Man => (men + 1, kings),
                PieceKind::King => (men, kings + 1),
            })
    }

    /// Apply a move to self, in place.
    /// `do_move` does not check if the move is legal or not,
    /// it simply executes it while assuming legality.
    /// Current behavior:
    /// Does nothing if there is no piece on from square.
    /// Removes the captured piece if the move is a capture.
    /// Promotes a man that lands on its promotion row.
    pub fn do_move(&mut self, move_: Move) {
        if let Some(captured) = move_.captured() {
            self[captured] = None;
        }

        if let Some(mut piece) = self[move_.from()].take() {
            if !piece.is_king() && move_.to().row == piece.side().promotion_row() {
                piece = piece.promoted();
            }
            self[move_.to()] = Some(piece);
        }
    }

    /// Returns a copy of self with the move applied.
    pub fn with_move(&self, move_: Move) -> Self {
        let mut position = *self;
        position.do_move(move_);
        position
    }

    /// Apply every move of a line in order.
    pub fn do_line(&mut self, line: &Line) {
        for move_ in line {
            self.do_move(*move_);
        }
    }

    /// Returns pretty-printed board representation of Self.
    /// The board has borders and row/column indicators.
    pub fn pretty(&self) -> String {
        const ROW_SEP: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut pretty = String::with_capacity(626);

        pretty.push_str(ROW_SEP);
        for row in 0..NUM_ROWS as i8 {
            pretty.push_str("| ");

            for col in 0..NUM_COLS as i8 {
                pretty.push(match self[Square::new(row, col)] {
                    Some(piece) => char::from(piece),
                    None => ' ',
                });
                pretty.push_str(" | ");
            }
            pretty.push_str(&row.to_string());
            pretty.push('\n');
            pretty.push_str(ROW_SEP);
        }
        pretty.push_str("  0   1   2   3   4   5   6   7\n");

        pretty
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start_position()
    }
}

/// Be careful with accessing by Square, as a square off the board will panic.
impl Index<Square> for Position {
    type Output = Option<Piece>;
    fn index(&self, square: Square) -> &Self::Output {
        debug_assert!(square.is_on_board(), "square {square:?} is off the board");
        &self.board[square.row as usize][square.col as usize]
    }
}

impl IndexMut<Square> for Position {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        debug_assert!(square.is_on_board(), "square {square:?} is off the board");
        &mut self.board[square.row as usize][square.col as usize]
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
