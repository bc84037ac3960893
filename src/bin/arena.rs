use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_rivals::ai::{
    Agent, GreedyAgent, Heuristic, MinimaxAgent, RandomAgent, ResourceRaceHeuristic,
    WindowHeuristic,
};
use grid_rivals::config::{AppConfig, SearchDepths};
use grid_rivals::error::GenerateError;
use grid_rivals::game::{Connect4Board, GameBoard, MazeBoard, Side};

/// Pit two agents against each other and print match statistics.
#[derive(Parser)]
#[command(name = "arena", about = "Play grid-game agents against each other")]
struct Cli {
    /// Game to play: connect4 or maze
    #[arg(long, default_value = "connect4")]
    game: String,

    /// Agent for the first side: minimax, greedy, or random
    #[arg(long, default_value = "minimax")]
    first: String,

    /// Agent for the second side: minimax, greedy, or random
    #[arg(long, default_value = "random")]
    second: String,

    /// Number of games to play
    #[arg(long, default_value_t = 20)]
    games: usize,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Override the search depth for minimax agents
    #[arg(long)]
    depth: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.ai.depths = SearchDepths {
            easy: depth,
            medium: depth,
            hard: depth,
        };
    }
    config.validate()?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    tracing::info!(seed, "arena starting");

    let tally = match cli.game.as_str() {
        "connect4" => run_connect4(&cli, &config, &mut rng)?,
        "maze" => run_maze(&cli, &config, &mut rng)?,
        other => bail!("unknown game '{other}' (expected 'connect4' or 'maze')"),
    };

    println!(
        "{} games of {}: {} (first) won {}, {} (second) won {}, {} drawn",
        cli.games, cli.game, cli.first, tally[0], cli.second, tally[1], tally[2]
    );
    Ok(())
}

fn build_agent<B: GameBoard + 'static>(
    tag: &str,
    depth: u32,
    heuristic: Box<dyn Heuristic<B>>,
    rng: &mut StdRng,
) -> Result<Box<dyn Agent<B>>> {
    Ok(match tag {
        "minimax" => Box::new(MinimaxAgent::seeded(depth, heuristic, rng.random())),
        "greedy" => Box::new(GreedyAgent::seeded(rng.random())),
        "random" => Box::new(RandomAgent::seeded(rng.random())),
        other => bail!("unknown agent '{other}' (expected 'minimax', 'greedy', or 'random')"),
    })
}

/// Returns [first wins, second wins, draws].
fn run_connect4(cli: &Cli, config: &AppConfig, rng: &mut StdRng) -> Result<[usize; 3]> {
    let depth = config.ai.search_depth();
    let mut tally = [0usize; 3];

    for _ in 0..cli.games {
        let mut agents: [Box<dyn Agent<Connect4Board>>; 2] = [
            build_agent(&cli.first, depth, Box::new(WindowHeuristic), rng)?,
            build_agent(&cli.second, depth, Box::new(WindowHeuristic), rng)?,
        ];
        let mut board = Connect4Board::new();
        let mut side = Side::First;

        while !board.is_terminal() {
            let Some(mv) = agents[side.index()].choose_move(&board, side) else {
                break;
            };
            board
                .apply(mv, side)
                .context("agent produced an illegal move")?;
            side = side.other();
        }

        if board.is_winner(Side::First) {
            tally[0] += 1;
        } else if board.is_winner(Side::Second) {
            tally[1] += 1;
        } else {
            tally[2] += 1;
        }
    }

    Ok(tally)
}

fn run_maze(cli: &Cli, config: &AppConfig, rng: &mut StdRng) -> Result<[usize; 3]> {
    let depth = config.ai.search_depth();
    let mut tally = [0usize; 3];

    for _ in 0..cli.games {
        let mut board = loop {
            match MazeBoard::generate(&config.maze, rng) {
                Ok(board) => break board,
                // Pathological braiding; roll the dice again
                Err(GenerateError::Degenerate { .. }) => continue,
                Err(err) => return Err(err.into()),
            }
        };
        let mut agents: [Box<dyn Agent<MazeBoard>>; 2] = [
            build_agent(
                &cli.first,
                depth,
                Box::new(ResourceRaceHeuristic::new(config.weights.clone())),
                rng,
            )?,
            build_agent(
                &cli.second,
                depth,
                Box::new(ResourceRaceHeuristic::new(config.weights.clone())),
                rng,
            )?,
        ];

        let mut side = Side::First;
        let turn_cap = config.maze.width * config.maze.height * 4;
        for _ in 0..turn_cap {
            if board.is_terminal() {
                break;
            }
            // A boxed-in agent forfeits the turn, not the game
            if let Some(mv) = agents[side.index()].choose_move(&board, side) {
                board
                    .apply(mv, side)
                    .context("agent produced an illegal move")?;
            }
            side = side.other();
        }

        match board.score(Side::First).cmp(&board.score(Side::Second)) {
            std::cmp::Ordering::Greater => tally[0] += 1,
            std::cmp::Ordering::Less => tally[1] += 1,
            std::cmp::Ordering::Equal => tally[2] += 1,
        }
    }

    Ok(tally)
}
