// src/generator/strategies.rs
// Candidate search for element placement. Nothing here writes to the grid.

use crate::config::PlacementStrategy;
use crate::map::{Grid, Position};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Draws per call to `random_free_position` before giving up.
pub const RANDOM_SEARCH_ATTEMPTS: u32 = 100;
/// Half-width of the square window searched around a cluster anchor.
pub const CLUSTER_RADIUS: i32 = 3;
/// Random samples compared by the scattered strategy.
pub const SCATTER_SAMPLES: u32 = 20;

/// Whether a candidate came from the strategy's own search or its uniform-random fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Structured,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub position: Position,
    pub origin: Origin,
}

impl Candidate {
    fn structured(position: Position) -> Self {
        Self { position, origin: Origin::Structured }
    }

    fn fallback(position: Position) -> Self {
        Self { position, origin: Origin::Fallback }
    }
}

/// Dispatch to the named strategy.
pub fn find_candidate<R: Rng>(
    strategy: PlacementStrategy,
    grid: &Grid,
    symbol: &str,
    rng: &mut R,
) -> Option<Candidate> {
    match strategy {
        PlacementStrategy::Random => random_free_position(grid, rng).map(Candidate::structured),
        PlacementStrategy::Clustered => clustered_position(grid, symbol, rng),
        PlacementStrategy::Scattered => scattered_position(grid, symbol, rng),
    }
}

/// Uniformly samples coordinates until one is free, up to [`RANDOM_SEARCH_ATTEMPTS`] draws.
pub fn random_free_position<R: Rng>(grid: &Grid, rng: &mut R) -> Option<Position> {
    for _ in 0..RANDOM_SEARCH_ATTEMPTS {
        let pos = Position::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if grid.is_free(pos) {
            return Some(pos);
        }
    }
    None
}

/// First free cell in the 7x7 window around a random existing occurrence of `symbol`.
///
/// The window is scanned row by row, top-left first. With no occurrences yet,
/// or a full window, falls back to a random free cell.
pub fn clustered_position<R: Rng>(grid: &Grid, symbol: &str, rng: &mut R) -> Option<Candidate> {
    let existing = grid.find_positions_with(symbol);
    let Some(anchor) = existing.choose(rng).copied() else {
        return random_free_position(grid, rng).map(Candidate::fallback);
    };

    for dy in -CLUSTER_RADIUS..=CLUSTER_RADIUS {
        for dx in -CLUSTER_RADIUS..=CLUSTER_RADIUS {
            let pos = anchor.offset(dx, dy);
            if grid.is_free(pos) {
                return Some(Candidate::structured(pos));
            }
        }
    }
    random_free_position(grid, rng).map(Candidate::fallback)
}

/// Greedy farthest-point pick: of [`SCATTER_SAMPLES`] random free cells, the one
/// whose Manhattan distance to the nearest existing `symbol` is largest.
pub fn scattered_position<R: Rng>(grid: &Grid, symbol: &str, rng: &mut R) -> Option<Candidate> {
    let existing = grid.find_positions_with(symbol);
    let mut best: Option<(Position, i32)> = None;

    for _ in 0..SCATTER_SAMPLES {
        let Some(pos) = random_free_position(grid, rng) else {
            continue;
        };
        if existing.is_empty() {
            return Some(Candidate::structured(pos));
        }
        let nearest = nearest_distance(pos, &existing);
        if best.is_none_or(|(_, d)| nearest > d) {
            best = Some((pos, nearest));
        }
    }

    match best {
        Some((pos, _)) => Some(Candidate::structured(pos)),
        None => random_free_position(grid, rng).map(Candidate::fallback),
    }
}

fn nearest_distance(pos: Position, others: &[Position]) -> i32 {
    others.iter().map(|o| pos.manhattan(o)).min().unwrap_or(i32::MAX)
}
