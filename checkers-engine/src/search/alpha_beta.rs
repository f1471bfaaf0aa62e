//! Minimax with Alpha-Beta pruning implementation.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::coretypes::{Move, PlyKind, Side, Square};
use crate::evaluation::{calc_score, Score, ScoringMode, INF};
use crate::movegen::{self, Moves};
use crate::movelist::Line;
use crate::position::Position;
use crate::search::Optimization;

/// Properties of this Alpha-Beta search.
/// * The root side maximizes, its opponent minimizes. Scores are always from the root side's view.
/// * Inside the evaluator, the side to move is implied by depth parity:
///   even depths are the opponent's plies, odd depths the root side's.
/// * A capture chain is played by the same side at the same depth, it never consumes depth.
/// * Odd depths only raise alpha, even depths only lower beta.
/// * An early exit returns `max_score + 1` or `min_score - 1` so that the parent's
///   fold never prefers a branch that was not fully evaluated.
pub(crate) struct AlphaBeta<'a, R: Rng> {
    rng: &'a mut R,
    scoring: ScoringMode,
    optimization: Optimization,
    max_depth: PlyKind,
    root: Side,
    // Dense tables indexed by root-enumerator node.
    best_moves: Vec<Option<Move>>,
    next_nodes: Vec<Option<usize>>,
    pub(crate) nodes: u64,
}

impl<'a, R: Rng> AlphaBeta<'a, R> {
    pub(crate) fn new(
        rng: &'a mut R,
        scoring: ScoringMode,
        optimization: Optimization,
        max_depth: PlyKind,
        root: Side,
    ) -> Self {
        Self {
            rng,
            scoring,
            optimization,
            max_depth,
            root,
            best_moves: Vec::new(),
            next_nodes: Vec::new(),
            nodes: 0,
        }
    }

    /// Search the position from the root side's turn and return the score of the best turn found.
    pub(crate) fn run(&mut self, position: &Position) -> Score {
        self.best_moves.clear();
        self.next_nodes.clear();
        self.nodes = 0;
        self.root_turn(*position, None, 0, -1.0)
    }

    /// Replays the recorded best moves from the root node into the full best turn.
    /// Empty if the root side had no move.
    pub(crate) fn best_line(&self) -> Line {
        let mut line = Line::new();
        let mut node = Some(0);

        while let Some(index) = node {
            match self.best_moves.get(index).copied().flatten() {
                Some(best_move) => {
                    line.push(best_move);
                    node = self.next_nodes[index];
                }
                None => break,
            }
        }
        line
    }

    /// Side moves in random order.
    fn shuffled_side_moves(&mut self, position: &Position, side: Side) -> Moves {
        let mut moves = movegen::side_moves(position, side);
        moves.list.shuffle(&mut *self.rng);
        moves
    }

    /// Root-move enumerator. Explores the root side's own turn, including every
    /// continuation of a capture chain, and records the best move per node.
    ///
    /// * `chain_from`: None at the root node, else the square of the piece continuing its chain.
    /// * `node`: index of this node in the best move tables.
    /// * `alpha`: best score found by the parent node so far.
    fn root_turn(
        &mut self,
        position: Position,
        chain_from: Option<Square>,
        node: usize,
        alpha: Score,
    ) -> Score {
        self.nodes += 1;
        self.best_moves.push(None);
        self.next_nodes.push(None);
        debug_assert_eq!(self.best_moves.len(), node + 1);

        let moves = match chain_from {
            Some(square) => movegen::piece_moves(&position, square),
            None => self.shuffled_side_moves(&position, self.root),
        };

        // Chain is over, the opponent plays next.
        if chain_from.is_some() && !moves.has_capture {
            return self.evaluate(position, !self.root, 0, alpha, INF + 1.0, None);
        }

        let mut best_score = -1.0;
        for move_ in moves.list {
            let next_node = self.best_moves.len();
            let child = position.with_move(move_);

            let score = if moves.has_capture {
                self.root_turn(child, Some(move_.to()), next_node, best_score)
            } else {
                self.evaluate(child, !self.root, 0, best_score, INF + 1.0, None)
            };

            if score > best_score {
                best_score = score;
                self.best_moves[node] = Some(move_);
                self.next_nodes[node] = moves.has_capture.then(|| next_node);
            }
        }

        best_score
    }

    /// Depth-limited minimax evaluator.
    ///
    /// * `side`: side to move.
    /// * `depth`: normal-move plies played since the root turn.
    /// * `chain_from`: square of the piece continuing a capture chain, if any.
    fn evaluate(
        &mut self,
        position: Position,
        side: Side,
        depth: PlyKind,
        mut alpha: Score,
        mut beta: Score,
        chain_from: Option<Square>,
    ) -> Score {
        self.nodes += 1;
        if depth == self.max_depth {
            return calc_score(&position, self.root, self.scoring);
        }

        let moves = match chain_from {
            Some(square) => movegen::piece_moves(&position, square),
            None => self.shuffled_side_moves(&position, side),
        };

        // Chain is over without a move, pass the turn.
        if chain_from.is_some() && !moves.has_capture {
            return self.evaluate(position, !side, depth + 1, alpha, beta, None);
        }

        let maximizing = depth % 2 == 1;
        if moves.is_empty() {
            // The side to move has lost.
            return if maximizing { 0.0 } else { INF };
        }

        let mut min_score = INF + 1.0;
        let mut max_score = -1.0;

        for move_ in moves.list {
            let child = position.with_move(move_);
            let score = if moves.has_capture {
                self.evaluate(child, side, depth, alpha, beta, Some(move_.to()))
            } else {
                self.evaluate(child, !side, depth + 1, alpha, beta, None)
            };

            min_score = Score::min(min_score, score);
            max_score = Score::max(max_score, score);
            if maximizing {
                alpha = Score::max(alpha, max_score);
            } else {
                beta = Score::min(beta, min_score);
            }

            if self.optimization.prunes() && alpha >= beta {
                return if maximizing {
                    max_score + 1.0
                } else {
                    min_score - 1.0
                };
            }
        }

        if maximizing {
            max_score
        } else {
            min_score
        }
    }
}
