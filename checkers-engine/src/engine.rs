//! Engine struct acts as a simplified API for the move generator and search of the Checkers engine.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::coretypes::{PlyKind, Side, Square};
use crate::evaluation::ScoringMode;
use crate::movegen::{self, Moves};
use crate::movelist::Line;
use crate::position::Position;
use crate::search::{self, Optimization, SearchResult};
use crate::settings::BotSettings;

/// Seed of the random source when randomness is disabled.
const FIXED_SEED: u64 = 0;

/// EngineBuilder allows for parameters of an Engine to be set and built once.
///
/// Default values:
///
/// * `scoring`: Number
/// * `optimization`: Pruning
/// * `no_random`: false
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EngineBuilder {
    scoring: ScoringMode,
    optimization: Optimization,
    no_random: bool,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            scoring: ScoringMode::default(),
            optimization: Optimization::default(),
            no_random: false,
        }
    }

    /// Create an EngineBuilder from the bot section of the settings.
    pub fn from_settings(settings: &BotSettings) -> Self {
        Self {
            scoring: settings.scoring(),
            optimization: settings.optimization(),
            no_random: settings.no_random,
        }
    }

    /// Create and return a new Engine.
    pub fn build(&self) -> Engine {
        Engine {
            scoring: self.scoring,
            optimization: self.optimization,
            no_random: self.no_random,
            rng: new_rng(self.no_random),
        }
    }

    /// Set the formula used to score leaf positions.
    pub fn scoring(mut self, scoring: ScoringMode) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set whether the search exits early on alpha-beta cutoffs.
    pub fn optimization(mut self, optimization: Optimization) -> Self {
        self.optimization = optimization;
        self
    }

    /// Set whether the move order is fixed instead of random.
    pub fn no_random(mut self, no_random: bool) -> Self {
        self.no_random = no_random;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn new_rng(no_random: bool) -> StdRng {
    if no_random {
        StdRng::seed_from_u64(FIXED_SEED)
    } else {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(FIXED_SEED);
        StdRng::seed_from_u64(seed)
    }
}

/// Engine owns the search configuration and the random source used to order moves.
///
/// With `no_random`, every search starts from the same random state,
/// so searching the same position twice gives the same line.
#[derive(Debug, Clone)]
pub struct Engine {
    scoring: ScoringMode,
    optimization: Optimization,
    no_random: bool,
    rng: StdRng,
}

impl Engine {
    pub fn new() -> Self {
        EngineBuilder::new().build()
    }

    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    pub fn optimization(&self) -> Optimization {
        self.optimization
    }

    pub fn no_random(&self) -> bool {
        self.no_random
    }

    /// Apply new bot settings. The random source is rebuilt for the new `NoRandom` value.
    pub fn reconfigure(&mut self, settings: &BotSettings) {
        *self = EngineBuilder::from_settings(settings).build();
    }

    /// All legal moves of `side` in random order. Captures only, if any capture exists.
    pub fn generate_moves_for_side(&mut self, position: &Position, side: Side) -> Moves {
        let mut moves = movegen::side_moves(position, side);
        moves.list.shuffle(&mut self.rng);
        moves
    }

    /// All legal moves of the piece on `square`. Captures only, if it has any.
    pub fn generate_moves_for_piece(&self, position: &Position, square: Square) -> Moves {
        movegen::piece_moves(position, square)
    }

    /// Run a blocking search for the best full turn of `side`, looking `depth` plies past it.
    pub fn search(&mut self, position: &Position, side: Side, depth: PlyKind) -> SearchResult {
        if self.no_random {
            self.rng = StdRng::seed_from_u64(FIXED_SEED);
        }
        search::search(
            position,
            side,
            depth,
            self.scoring,
            self.optimization,
            &mut self.rng,
        )
    }

    /// Returns the best full turn of `side`, empty if `side` has no legal move.
    pub fn find_best_turns(&mut self, position: &Position, side: Side, depth: PlyKind) -> Line {
        self.search(position, side, depth).line
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
