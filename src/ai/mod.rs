//! Computer opponents: the minimax/alpha-beta engine plus greedy and
//! random baselines, all behind one [`Agent`] interface.

mod agent;
mod greedy;
pub mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use heuristic::{Heuristic, MazeWeights, ResourceRaceHeuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, WIN_SCORE};
pub use random::RandomAgent;

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{AiConfig, Algorithm};
use crate::game::{GameBoard, Side};

/// Compute the AI's move for the current authoritative board. Never
/// mutates its input; `None` only when `side` has no legal move left.
///
/// The configured difficulty picks the search depth, the algorithm tag
/// picks the agent. `rng` seeds the agent, so a seeded caller gets
/// reproducible games end to end.
pub fn compute_ai_move<B: GameBoard>(
    board: &B,
    side: Side,
    config: &AiConfig,
    heuristic: Box<dyn Heuristic<B>>,
    rng: &mut StdRng,
) -> Option<B::Move> {
    let mut agent: Box<dyn Agent<B>> = match config.algorithm {
        Algorithm::Minimax => Box::new(MinimaxAgent::seeded(
            config.search_depth(),
            heuristic,
            rng.random(),
        )),
        Algorithm::Greedy => Box::new(GreedyAgent::seeded(rng.random())),
        Algorithm::Random => Box::new(RandomAgent::seeded(rng.random())),
    };
    agent.choose_move(board, side)
}
