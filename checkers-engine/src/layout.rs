//! Text layout of a position.
//!
//! A layout lists the 8 rows of the board from row 0 to row 7, separated by `/`.
//! Each row has 8 characters: `.` for an empty square, `w` and `b` for men,
//! `W` and `B` for kings.
//!
//! Example, the start position:
//! `.b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.`

use crate::coretypes::{Piece, Square, NUM_COLS, NUM_ROWS};
use crate::error::{self, ErrorKind};
use crate::position::Position;

/// Allows conversion of a type to and from its text layout.
pub trait Layout: Sized {
    /// Attempt to parse a layout string into Self.
    fn parse_layout(layout: &str) -> error::Result<Self>;

    /// Returns the layout string of self.
    fn to_layout(&self) -> String;
}

impl Layout for Position {
    fn parse_layout(layout: &str) -> error::Result<Self> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != NUM_ROWS {
            return Err((ErrorKind::LayoutMalformed, "expected 8 rows").into());
        }

        let mut position = Position::new();
        for (row, row_str) in rows.into_iter().enumerate() {
            if row_str.chars().count() != NUM_COLS {
                return Err((ErrorKind::LayoutMalformed, format!("row {row} must be 8 squares")).into());
            }
            for (col, ch) in row_str.chars().enumerate() {
                let square = Square::new(row as i8, col as i8);
                position[square] = match ch {
                    '.' => None,
                    _ => Some(Piece::from_char(ch).ok_or_else(|| {
                        error::Error::from((ErrorKind::LayoutMalformed, format!("unknown piece {ch}")))
                    })?),
                };
            }
        }

        Ok(position)
    }

    fn to_layout(&self) -> String {
        let mut layout = String::with_capacity(NUM_ROWS * (NUM_COLS + 1));
        for row in 0..NUM_ROWS as i8 {
            if row > 0 {
                layout.push('/');
            }
            for col in 0..NUM_COLS as i8 {
                layout.push(match self[Square::new(row, col)] {
                    Some(piece) => piece.to_char(),
                    None => '.',
                });
            }
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Side;

    const START: &str = ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.";

    #[test]
    fn parse_start_position() {
        let position = Position::parse_layout(START).unwrap();
        assert_eq!(position, Position::start_position());
        assert_eq!(position.to_layout(), START);
    }

    #[test]
    fn parse_kings() {
        let position = Position::parse_layout("W......./......../......../......../......../......../......../.......B").unwrap();
        assert_eq!(position.count(Side::White), (0, 1));
        assert_eq!(position.count(Side::Black), (0, 1));
    }

    #[test]
    fn reject_malformed_layouts() {
        let errors = [
            "",
            "......../......../......../......../......../......../........",
            "......../......../......../......../......../......../......../.......",
            "......../......../......../......../......../......../......../......x.",
        ];
        for layout in errors {
            let error = Position::parse_layout(layout).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::LayoutMalformed, "{layout}");
        }
    }
}
