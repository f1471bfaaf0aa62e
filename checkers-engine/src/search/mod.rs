//! Search functions.

mod alpha_beta;

use std::fmt::{self, Display};
use std::str::FromStr;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::coretypes::{PlyKind, Side};
use crate::error;
use crate::evaluation::{Score, ScoringMode};
use crate::movelist::display;
use crate::movelist::Line;
use crate::position::Position;

use alpha_beta::AlphaBeta;

/// Selects whether the evaluator exits early once alpha meets beta.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Optimization {
    /// Plain minimax, every branch is fully evaluated.
    O0,
    /// Alpha-Beta pruning.
    Pruning,
}

impl Optimization {
    /// Parse the `Optimization` setting. Only "O0" disables pruning.
    pub fn from_setting(name: &str) -> Self {
        match name {
            "O0" => Self::O0,
            _ => Self::Pruning,
        }
    }

    pub const fn prunes(&self) -> bool {
        matches!(self, Self::Pruning)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::O0 => "O0",
            Self::Pruning => "O1",
        }
    }
}

impl Default for Optimization {
    fn default() -> Self {
        Self::Pruning
    }
}

impl Display for Optimization {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Optimization {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        Ok(Self::from_setting(s))
    }
}

/// The results found from running a search on some root position.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best full turn found for the root side. Empty if the root side has no move.
    pub line: Line,
    /// Score of the best turn, from the root side's view.
    pub score: Score,
    /// The side to move for the root position that was searched.
    pub side: Side,
    /// Maximum number of normal-move plies searched after the root turn.
    pub depth: PlyKind,
    /// Total number of nodes visited, root enumerator and evaluator.
    pub nodes: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        (self.nodes as f64 / self.elapsed.as_secs_f64()).round()
    }

    /// Returns true if the root side had no legal move.
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    line     : {}\n", display(&self.line)));
        displayed.push_str(&format!("    score    : {:.4}\n", self.score));
        displayed.push_str(&format!("    side     : {}\n", self.side));
        displayed.push_str(&format!("    depth    : {}\n", self.depth));
        displayed.push_str(&format!("    nodes    : {}\n", self.nodes));
        displayed.push_str(&format!("    nps      : {}\n", self.nps()));
        displayed.push_str(&format!(
            "    elapsed  : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}

/// Search `position` for the best full turn of `side`.
///
/// # Arguments
///
/// * `depth`: Number of normal-move plies evaluated after the root turn. 0 scores the root turn directly
/// * `scoring`: Formula used to score leaf positions
/// * `optimization`: Enables or disables alpha-beta early exits
/// * `rng`: Random source used to shuffle side moves at every node
pub fn search<R: Rng>(
    position: &Position,
    side: Side,
    depth: PlyKind,
    scoring: ScoringMode,
    optimization: Optimization,
    rng: &mut R,
) -> SearchResult {
    let start = Instant::now();
    let mut alpha_beta = AlphaBeta::new(rng, scoring, optimization, depth, side);
    let score = alpha_beta.run(position);
    let line = alpha_beta.best_line();

    let result = SearchResult {
        line,
        score,
        side,
        depth,
        nodes: alpha_beta.nodes,
        elapsed: start.elapsed(),
    };
    log::debug!(
        "search side={} depth={} scoring={} optimization={} nodes={} elapsed={:?} line={}",
        result.side,
        result.depth,
        scoring,
        optimization,
        result.nodes,
        result.elapsed,
        display(&result.line),
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Square;
    use crate::layout::Layout;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(position: &Position, side: Side, depth: PlyKind, optimization: Optimization) -> SearchResult {
        let mut rng = StdRng::seed_from_u64(0);
        search(position, side, depth, ScoringMode::Number, optimization, &mut rng)
    }

    #[test]
    fn parse_optimization() {
        assert_eq!(Optimization::from_setting("O0"), Optimization::O0);
        assert_eq!(Optimization::from_setting("O1"), Optimization::Pruning);
        assert_eq!(Optimization::from_setting(""), Optimization::Pruning);
        assert!(!Optimization::O0.prunes());
        assert!(Optimization::default().prunes());
    }

    #[test]
    fn no_move_gives_empty_line() {
        // Black man blocked on the edge by a white man it cannot jump.
        let position = Position::parse_layout(
            "......../......../......../......../......../......../.......b/......w.",
        )
        .unwrap();
        let result = run(&position, Side::Black, 3, Optimization::Pruning);
        assert!(result.is_empty());
        assert_eq!(result.score, -1.0);
    }

    #[test]
    fn takes_the_only_capture_chain() {
        let position = Position::parse_layout(
            "......../......../.b.b..../......../.....b../......w./......../........",
        )
        .unwrap();
        let result = run(&position, Side::White, 2, Optimization::Pruning);
        assert_eq!(result.line.len(), 3);
        assert_eq!(result.line[0].from(), Square::new(5, 6));
        assert_eq!(result.line[2].to(), Square::new(3, 0));
    }

    #[test]
    fn winning_capture_scores_inf() {
        let position = Position::parse_layout(
            "......../......../......../......../...b..../..w...../......../........",
        )
        .unwrap();
        let result = run(&position, Side::White, 2, Optimization::O0);
        assert_eq!(result.line.len(), 1);
        assert_eq!(result.score, crate::evaluation::INF);
    }
}
