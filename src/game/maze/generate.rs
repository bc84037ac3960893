//! Randomized maze generation: depth-first carving on an odd-coordinate
//! skeleton, a braiding pass that opens extra passages, then entity
//! placement.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerateError;

use super::{MazeBoard, MazeCell, Pos, Tier};

/// Maze generation parameters, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub low_resources: usize,
    pub med_resources: usize,
    pub high_resources: usize,
    /// One wall in `width * height / braid_divisor` attempts is opened
    /// after carving, so the maze has cycles instead of a single route
    /// between any two cells.
    pub braid_divisor: usize,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: 25,
            height: 20,
            low_resources: 12,
            med_resources: 6,
            high_resources: 3,
            braid_divisor: 10,
        }
    }
}

impl MazeBoard {
    /// Carve, braid, and populate a fresh maze. All randomness comes from
    /// `rng`; seed it for reproducible boards.
    ///
    /// Fails with [`GenerateError::Degenerate`] if braiding left fewer
    /// than two open cells; the caller regenerates with a new seed rather
    /// than starting a game without agent positions.
    pub fn generate(config: &MazeConfig, rng: &mut impl Rng) -> Result<MazeBoard, GenerateError> {
        let (width, height) = (config.width, config.height);
        if width < 5 || height < 5 {
            return Err(GenerateError::TooSmall { width, height });
        }

        let mut cells = carve(width, height, rng);
        braid(&mut cells, width, height, config.braid_divisor, rng);
        let board = populate(cells, config, rng)?;

        tracing::info!(
            width,
            height,
            resources = board.resources().count(),
            "generated maze"
        );
        Ok(board)
    }
}

/// Randomized depth-first carving. Cells at odd coordinates form the maze
/// skeleton; even coordinates are the walls between them, removed one at a
/// time as the walk tunnels through.
fn carve(width: usize, height: usize, rng: &mut impl Rng) -> Vec<MazeCell> {
    let mut cells = vec![MazeCell::Wall; width * height];
    let open = |cells: &mut Vec<MazeCell>, pos: Pos| {
        cells[pos.y * width + pos.x] = MazeCell::Empty;
    };

    let start = Pos::new(
        1 + 2 * rng.random_range(0..(width - 1) / 2),
        1 + 2 * rng.random_range(0..(height - 1) / 2),
    );
    open(&mut cells, start);

    let mut stack = vec![start];
    let mut directions: [(isize, isize); 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];

    while let Some(&current) = stack.last() {
        directions.shuffle(rng);

        let next = directions.iter().find_map(|&(dx, dy)| {
            let x = current.x.checked_add_signed(dx)?;
            let y = current.y.checked_add_signed(dy)?;
            let pos = Pos::new(x, y);
            (x < width && y < height && cells[y * width + x] == MazeCell::Wall).then_some(pos)
        });

        match next {
            Some(neighbor) => {
                // Knock out the wall between the two skeleton cells
                let between = Pos::new(
                    (current.x + neighbor.x) / 2,
                    (current.y + neighbor.y) / 2,
                );
                open(&mut cells, between);
                open(&mut cells, neighbor);
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }

    cells
}

/// Open a random sample of interior walls so the perfect maze gains
/// cycles. Attempts that land on an already-open cell are no-ops.
fn braid(cells: &mut [MazeCell], width: usize, height: usize, divisor: usize, rng: &mut impl Rng) {
    for _ in 0..(width * height / divisor) {
        let x = rng.random_range(1..width - 1);
        let y = rng.random_range(1..height - 1);
        if cells[y * width + x] == MazeCell::Wall {
            cells[y * width + x] = MazeCell::Empty;
        }
    }
}

/// Place the two agents, the exit, and the resources into the open cells.
fn populate(
    cells: Vec<MazeCell>,
    config: &MazeConfig,
    rng: &mut impl Rng,
) -> Result<MazeBoard, GenerateError> {
    let (width, height) = (config.width, config.height);
    let mut cells = cells;

    let mut pool: Vec<Pos> = cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == MazeCell::Empty)
        .map(|(i, _)| Pos::new(i % width, i / width))
        .collect();
    if pool.len() < 2 {
        return Err(GenerateError::Degenerate { open: pool.len() });
    }
    pool.shuffle(rng);

    // Agents start in opposite-quadrant corners when the maze opened up
    // enough of them; otherwise any random separated pair.
    let in_corner = |pos: &Pos| {
        (pos.x < width / 3 || pos.x > 2 * width / 3)
            && (pos.y < height / 3 || pos.y > 2 * height / 3)
    };
    let mut corners: Vec<Pos> = pool.iter().copied().filter(in_corner).collect();
    let (first, second) = if corners.len() >= 2 {
        let a = corners.swap_remove(rng.random_range(0..corners.len()));
        let b = corners.swap_remove(rng.random_range(0..corners.len()));
        (a, b)
    } else {
        (pool[0], pool[1])
    };
    pool.retain(|&pos| pos != first && pos != second);

    // Exit first, then resources, consuming the pool without replacement.
    // Running out early just means a sparser game.
    if let Some(pos) = pool.pop() {
        cells[pos.y * width + pos.x] = MazeCell::Exit;
    }
    let tiers = [
        (Tier::Low, config.low_resources),
        (Tier::Med, config.med_resources),
        (Tier::High, config.high_resources),
    ];
    for (tier, count) in tiers {
        for _ in 0..count {
            match pool.pop() {
                Some(pos) => cells[pos.y * width + pos.x] = MazeCell::Resource(tier),
                None => break,
            }
        }
    }

    Ok(MazeBoard::from_parts(width, height, cells, [first, second]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Side;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn flood_fill(board: &MazeBoard, start: Pos) -> usize {
        let mut seen = vec![false; board.width() * board.height()];
        let mut queue = VecDeque::from([start]);
        seen[start.y * board.width() + start.x] = true;
        let mut count = 0;
        while let Some(pos) = queue.pop_front() {
            count += 1;
            for (dx, dy) in [(0isize, -1isize), (1, 0), (0, 1), (-1, 0)] {
                let (Some(x), Some(y)) =
                    (pos.x.checked_add_signed(dx), pos.y.checked_add_signed(dy))
                else {
                    continue;
                };
                let next = Pos::new(x, y);
                if !board.in_bounds(next) || board.cell(next) == MazeCell::Wall {
                    continue;
                }
                let idx = y * board.width() + x;
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }
        count
    }

    #[test]
    fn test_every_open_cell_is_reachable() {
        let config = MazeConfig::default();
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = MazeBoard::generate(&config, &mut rng).unwrap();

            let open = (0..board.height())
                .flat_map(|y| (0..board.width()).map(move |x| Pos::new(x, y)))
                .filter(|&pos| board.cell(pos) != MazeCell::Wall)
                .count();
            let reached = flood_fill(&board, board.position(Side::First));
            assert_eq!(reached, open, "seed {seed} carved an isolated pocket");
        }
    }

    #[test]
    fn test_same_seed_same_maze() {
        let config = MazeConfig::default();
        let a = MazeBoard::generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = MazeBoard::generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);

        let c = MazeBoard::generate(&config, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_full_resource_placement() {
        let config = MazeConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let board = MazeBoard::generate(&config, &mut rng).unwrap();

        let low = board.resources().filter(|(_, t)| *t == Tier::Low).count();
        let med = board.resources().filter(|(_, t)| *t == Tier::Med).count();
        let high = board.resources().filter(|(_, t)| *t == Tier::High).count();
        assert_eq!((low, med, high), (12, 6, 3));
        assert!(board.exit().is_some());
    }

    #[test]
    fn test_agents_start_apart_on_open_cells() {
        let config = MazeConfig::default();
        for seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = MazeBoard::generate(&config, &mut rng).unwrap();
            let first = board.position(Side::First);
            let second = board.position(Side::Second);
            assert_ne!(first, second);
            assert_eq!(board.cell(first), MazeCell::Empty);
            assert_eq!(board.cell(second), MazeCell::Empty);
        }
    }

    #[test]
    fn test_small_maze_accepts_resource_shortfall() {
        let config = MazeConfig {
            width: 5,
            height: 5,
            ..MazeConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let board = MazeBoard::generate(&config, &mut rng).unwrap();
        // 5x5 cannot hold 21 resources; whatever fit is fine
        assert!(board.resources().count() < 21);
    }

    #[test]
    fn test_too_small_rejected() {
        let config = MazeConfig {
            width: 3,
            height: 20,
            ..MazeConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            MazeBoard::generate(&config, &mut rng),
            Err(GenerateError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        // A grid with no open cells at all: placement must refuse rather
        // than invent agent positions.
        let config = MazeConfig::default();
        let walls = vec![MazeCell::Wall; config.width * config.height];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            populate(walls, &config, &mut rng),
            Err(GenerateError::Degenerate { open: 0 })
        ));
    }
}
