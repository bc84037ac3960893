//! Core game logic: the board capability contract shared by both game
//! variants, and the concrete connect-four and maze boards.

pub mod connect4;
pub mod maze;
mod side;

pub use connect4::{Cell, Connect4Board, COLS, ROWS};
pub use maze::{MazeBoard, MazeCell, Pos, Tier};
pub use side::Side;

/// Why a requested move was rejected. Rejection never mutates the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("({x}, {y}) is outside the grid")]
    OutOfBounds { x: usize, y: usize },

    #[error("destination is not one step away")]
    NotAdjacent,

    #[error("destination is a wall")]
    Blocked,

    #[error("destination is occupied by the other side")]
    Occupied,

    #[error("the game is already over")]
    GameOver,
}

/// Capability contract for a two-player, perfect-information, zero-sum
/// grid game. The search engine and every agent operate purely against
/// this trait.
///
/// `apply` is the confirmed-move commit path and mutates in place; search
/// contexts clone the board first, and each recursion branch owns its copy
/// exclusively.
pub trait GameBoard: Clone {
    type Move: Copy + Eq + std::fmt::Debug;

    /// Enumerate legal moves for `side` in a deterministic order
    /// (ascending column, or up/right/down/left for the maze). Empty only
    /// when the position is terminal or the side is boxed in.
    fn legal_moves(&self, side: Side) -> Vec<Self::Move>;

    /// Validate and commit a move. Rejects with [`MoveError`] instead of
    /// mutating on any invalid input.
    fn apply(&mut self, mv: Self::Move, side: Side) -> Result<(), MoveError>;

    /// Whether the game has ended (win, draw, or nothing left to play for).
    fn is_terminal(&self) -> bool;

    /// Whether `side` has a winning configuration.
    fn is_winner(&self, side: Side) -> bool;
}
