use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game::{GameBoard, Side};

use super::agent::Agent;
use super::heuristic::Heuristic;

/// Value of a decided game. Far outside anything the heuristics can
/// produce, so search always prefers a forced win over a good position.
pub const WIN_SCORE: f64 = 1e13;

/// Depth-bounded minimax with alpha-beta pruning, generic over the board.
///
/// Each branch explores its own clone of the board; the authoritative
/// board passed to [`Agent::choose_move`] is never touched.
pub struct MinimaxAgent<B: GameBoard> {
    depth: u32,
    heuristic: Box<dyn Heuristic<B>>,
    rng: StdRng,
}

impl<B: GameBoard> MinimaxAgent<B> {
    pub fn new(depth: u32, heuristic: Box<dyn Heuristic<B>>) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(depth: u32, heuristic: Box<dyn Heuristic<B>>, seed: u64) -> Self {
        MinimaxAgent {
            depth,
            heuristic,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn static_value(&self, board: &B, perspective: Side) -> f64 {
        if board.is_winner(perspective) {
            WIN_SCORE
        } else if board.is_winner(perspective.other()) {
            -WIN_SCORE
        } else if board.is_terminal() {
            0.0
        } else {
            self.heuristic.evaluate(board, perspective)
        }
    }

    /// Returns the backed-up value and the move achieving it. `None` for
    /// the move only at depth-zero/terminal nodes or when `to_move` has no
    /// legal move.
    fn search(
        &self,
        board: &B,
        perspective: Side,
        depth: u32,
        to_move: Side,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<B::Move>) {
        if depth == 0 || board.is_terminal() {
            return (self.static_value(board, perspective), None);
        }

        let moves = board.legal_moves(to_move);
        if moves.is_empty() {
            // Stalemate-like node: nothing to expand, score it statically
            return (self.static_value(board, perspective), None);
        }

        let maximizing = to_move == perspective;
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best_move = None;

        for &mv in &moves {
            let mut child = board.clone();
            child.apply(mv, to_move).expect("enumerated move must apply");
            let (value, _) =
                self.search(&child, perspective, depth - 1, to_move.other(), alpha, beta);

            // Strict comparison keeps the first move on ties, so the
            // deterministic enumeration order decides between equal lines
            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best_value);
            }
            if alpha >= beta {
                break;
            }
        }

        (best_value, best_move)
    }
}

impl<B: GameBoard> Agent<B> for MinimaxAgent<B> {
    fn choose_move(&mut self, board: &B, side: Side) -> Option<B::Move> {
        let legal = board.legal_moves(side);
        if legal.is_empty() {
            return None;
        }

        let (value, best) =
            self.search(board, side, self.depth, side, f64::NEG_INFINITY, f64::INFINITY);
        match best {
            Some(mv) => {
                tracing::debug!(value, ?mv, depth = self.depth, "minimax chose move");
                Some(mv)
            }
            None => {
                // Should not happen with a non-empty move list; substitute
                // a uniform random legal move rather than forfeit
                tracing::warn!("search backed up no move; choosing at random");
                legal.choose(&mut self.rng).copied()
            }
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
