use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game::{GameBoard, Side};

use super::agent::Agent;

/// One-ply tactical agent: take an immediately winning move, otherwise
/// block a spot where the opponent would win immediately, otherwise move
/// at random. The easy tier, no search tree involved.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        GreedyAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GameBoard> Agent<B> for GreedyAgent {
    fn choose_move(&mut self, board: &B, side: Side) -> Option<B::Move> {
        let legal = board.legal_moves(side);
        if legal.is_empty() {
            return None;
        }

        // Take a win if one is on the board
        for &mv in &legal {
            let mut probe = board.clone();
            probe.apply(mv, side).expect("enumerated move must apply");
            if probe.is_winner(side) {
                return Some(mv);
            }
        }

        // Deny the opponent a spot they would win on
        for &mv in &legal {
            let mut probe = board.clone();
            if probe.apply(mv, side.other()).is_ok() && probe.is_winner(side.other()) {
                return Some(mv);
            }
        }

        legal.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
