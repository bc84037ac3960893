use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game::{GameBoard, Side};

use super::agent::Agent;

/// An agent that selects uniformly at random from legal moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GameBoard> Agent<B> for RandomAgent {
    fn choose_move(&mut self, board: &B, side: Side) -> Option<B::Move> {
        board.legal_moves(side).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
