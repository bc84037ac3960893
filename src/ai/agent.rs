use crate::game::{GameBoard, Side};

/// Universal interface for computer players.
pub trait Agent<B: GameBoard> {
    /// Select a move for `side` on the given board, or `None` when `side`
    /// has no legal move.
    fn choose_move(&mut self, board: &B, side: Side) -> Option<B::Move>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
