//! Evaluation functions that score a position for a side.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::coretypes::{PieceKind, Side};
use crate::error;
use crate::position::Position;

/// Score of a position. Higher is better for the side the score was computed for.
pub type Score = f64;

/// Score of a won position: the opponent has no material, or cannot move.
pub const INF: Score = 1e9;

/// Bonus per row a man has advanced from its own back row.
pub const ADVANCEMENT_BONUS: Score = 0.05;

/// Selects the formula used by `calc_score`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ScoringMode {
    /// Material only, kings weigh 4 men.
    Number,
    /// Material plus a bonus for advanced men, kings weigh 5 men.
    NumberAndPotential,
}

impl ScoringMode {
    /// Parse the `BotScoringType` setting.
    /// Unknown names fall back to the default formula.
    pub fn from_setting(name: &str) -> Self {
        match name {
            "NumberAndPotential" => Self::NumberAndPotential,
            _ => Self::Number,
        }
    }

    /// Weight of a king relative to a man.
    pub const fn king_weight(&self) -> Score {
        match self {
            Self::Number => 4.0,
            Self::NumberAndPotential => 5.0,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::NumberAndPotential => "NumberAndPotential",
        }
    }
}

impl Default for ScoringMode {
    fn default() -> Self {
        Self::Number
    }
}

impl Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMode {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        Ok(Self::from_setting(s))
    }
}

/// Material of one side, men possibly weighted up by advancement.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
struct Material {
    men: Score,
    kings: Score,
}

impl Material {
    fn is_empty(&self) -> bool {
        self.men + self.kings == 0.0
    }

    fn weighted(&self, king_weight: Score) -> Score {
        self.men + self.kings * king_weight
    }
}

/// Score `position` for `side` as the ratio of its weighted material to its opponent's.
///
/// * The opponent has no material: `INF`.
/// * Otherwise, `side` has no material: `0`.
/// * Otherwise `(men + kings * Q) / (opponent men + opponent kings * Q)`.
///
/// Under `NumberAndPotential` every man counts `1 + 0.05 * rows advanced`.
pub fn calc_score(position: &Position, side: Side, mode: ScoringMode) -> Score {
    let mut own = Material::default();
    let mut opponent = Material::default();

    for (square, piece) in position.pieces() {
        let material = if piece.side() == side {
            &mut own
        } else {
            &mut opponent
        };
        match piece.kind() {
            PieceKind::King => material.kings += 1.0,
            PieceKind::Man => {
                material.men += 1.0;
                if mode == ScoringMode::NumberAndPotential {
                    let advanced = (square.row - piece.side().back_row()).abs();
                    material.men += ADVANCEMENT_BONUS * Score::from(advanced);
                }
            }
        }
    }

    if opponent.is_empty() {
        return INF;
    }
    if own.is_empty() {
        return 0.0;
    }
    let king_weight = mode.king_weight();
    own.weighted(king_weight) / opponent.weighted(king_weight)
}
