use crate::game::{Cell, Connect4Board, GameBoard, MazeBoard, Side, Tier, COLS, ROWS};

/// Trait for scoring a non-terminal position from one side's perspective.
pub trait Heuristic<B: GameBoard>: Send {
    fn evaluate(&self, board: &B, side: Side) -> f64;
}

/// Connect-four heuristic: slides a length-4 window across every row,
/// column, and diagonal, scoring partial runs, plus a bonus for occupying
/// the well-connected center column.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(own: usize, opp: usize, empty: usize) -> f64 {
        if own == 4 {
            100.0
        } else if own == 3 && empty == 1 {
            5.0
        } else if own == 2 && empty == 2 {
            2.0
        } else if opp == 3 && empty == 1 {
            -4.0
        } else {
            0.0
        }
    }

    fn window(board: &Connect4Board, side: Side, cells: [(usize, usize); 4]) -> f64 {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for (row, col) in cells {
            match board.get(row, col) {
                Cell::Taken(s) if s == side => own += 1,
                Cell::Taken(_) => opp += 1,
                Cell::Empty => empty += 1,
            }
        }
        Self::score_window(own, opp, empty)
    }
}

impl Heuristic<Connect4Board> for WindowHeuristic {
    fn evaluate(&self, board: &Connect4Board, side: Side) -> f64 {
        let mut score = 0.0;

        // Center column bonus
        for row in 0..ROWS {
            if board.get(row, COLS / 2) == Cell::Taken(side) {
                score += 3.0;
            }
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                score += Self::window(
                    board,
                    side,
                    [(row, col), (row, col + 1), (row, col + 2), (row, col + 3)],
                );
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                score += Self::window(
                    board,
                    side,
                    [(row, col), (row + 1, col), (row + 2, col), (row + 3, col)],
                );
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                score += Self::window(
                    board,
                    side,
                    [
                        (row, col),
                        (row + 1, col + 1),
                        (row + 2, col + 2),
                        (row + 3, col + 3),
                    ],
                );
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                score += Self::window(
                    board,
                    side,
                    [
                        (row, col),
                        (row - 1, col + 1),
                        (row - 2, col + 2),
                        (row - 3, col + 3),
                    ],
                );
            }
        }

        score
    }
}

/// Weights for the maze heuristic, loadable from TOML. Defaults mirror the
/// in-game collection values.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MazeWeights {
    pub low: f64,
    pub med: f64,
    pub high: f64,
    pub exit: f64,
    pub distance_scale: f64,
}

impl Default for MazeWeights {
    fn default() -> Self {
        MazeWeights {
            low: 5.0,
            med: 10.0,
            high: 20.0,
            exit: 50.0,
            distance_scale: 10.0,
        }
    }
}

impl MazeWeights {
    fn tier_value(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Low => self.low,
            Tier::Med => self.med,
            Tier::High => self.high,
        }
    }
}

/// Maze heuristic: every remaining resource (and the exit) is worth its
/// value scaled by how much closer the evaluated side is, by Manhattan
/// distance. Ties count against the evaluated side, so contested cells
/// read as a risk rather than free value. Accumulated scores are compared
/// only at terminal positions, never here.
pub struct ResourceRaceHeuristic {
    weights: MazeWeights,
}

impl ResourceRaceHeuristic {
    pub fn new(weights: MazeWeights) -> Self {
        ResourceRaceHeuristic { weights }
    }

    fn race_term(&self, value: f64, own_d: usize, opp_d: usize) -> f64 {
        if own_d < opp_d {
            value * (1.0 + (opp_d - own_d) as f64 / self.weights.distance_scale)
        } else {
            -value * (1.0 + (own_d - opp_d) as f64 / self.weights.distance_scale)
        }
    }
}

impl Default for ResourceRaceHeuristic {
    fn default() -> Self {
        Self::new(MazeWeights::default())
    }
}

impl Heuristic<MazeBoard> for ResourceRaceHeuristic {
    fn evaluate(&self, board: &MazeBoard, side: Side) -> f64 {
        let own = board.position(side);
        let opp = board.position(side.other());
        let mut score = 0.0;

        for (pos, tier) in board.resources() {
            score += self.race_term(
                self.weights.tier_value(tier),
                own.manhattan(pos),
                opp.manhattan(pos),
            );
        }
        if let Some(exit) = board.exit() {
            score += self.race_term(self.weights.exit, own.manhattan(exit), opp.manhattan(exit));
        }

        score
    }
}
