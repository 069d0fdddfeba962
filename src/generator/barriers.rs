// src/generator/barriers.rs
// Barrier shape writers. Every write goes through `Grid::place_at`.

use crate::map::{Grid, Position};
use rand::Rng;
use std::ops::RangeInclusive;

/// Attempt ceiling for random barriers, per requested cell.
pub const RANDOM_BARRIER_ATTEMPTS_PER_CELL: u32 = 10;

/// Sets every cell of the four border lines. Corners are written twice.
pub fn perimeter(grid: &mut Grid, symbol: &str) {
    let (w, h) = (grid.width(), grid.height());
    for x in 0..w {
        grid.place_at(Position::new(x, 0), symbol);
        grid.place_at(Position::new(x, h - 1), symbol);
    }
    for y in 0..h {
        grid.place_at(Position::new(0, y), symbol);
        grid.place_at(Position::new(w - 1, y), symbol);
    }
}

/// Scatters up to `count` barrier cells over free coordinates.
///
/// Gives up silently after `count * 10` draws; returns how many cells were set.
pub fn random<R: Rng>(grid: &mut Grid, count: u32, symbol: &str, rng: &mut R) -> u32 {
    let max_attempts = count.saturating_mul(RANDOM_BARRIER_ATTEMPTS_PER_CELL);
    let mut placed = 0;
    let mut attempts = 0;

    while placed < count && attempts < max_attempts {
        let pos = Position::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if grid.is_free(pos) {
            grid.place_at(pos, symbol);
            placed += 1;
        }
        attempts += 1;
    }
    placed
}

/// A Bresenham segment (error term seeded with `dx - dy`) addressed by step index.
///
/// The major axis advances on every step. After `k` steps the minor axis has
/// advanced `ceil((2k * minor - major) / (2 * major))` times, which is exactly
/// where the incremental error-term walk puts it. That lets a writer jump
/// straight to the steps that land on the grid instead of walking from an
/// endpoint that may be billions of cells away.
#[derive(Debug, Clone, Copy)]
struct Segment {
    start: (i64, i64),
    step: (i64, i64),
    delta: (i64, i64),
}

impl Segment {
    fn new(start: Position, end: Position) -> Self {
        let (x0, y0) = (i64::from(start.x), i64::from(start.y));
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        Self {
            start: (x0, y0),
            step: (if x0 < x1 { 1 } else { -1 }, if y0 < y1 { 1 } else { -1 }),
            delta: ((x1 - x0).abs(), (y1 - y0).abs()),
        }
    }

    fn x_major(&self) -> bool {
        self.delta.0 >= self.delta.1
    }

    /// Number of steps; the segment has `steps() + 1` points.
    fn steps(&self) -> i64 {
        self.delta.0.max(self.delta.1)
    }

    fn point(&self, k: i64) -> (i64, i64) {
        let (dx, dy) = self.delta;
        let (major, minor) = if self.x_major() { (dx, dy) } else { (dy, dx) };
        let minor_steps = if major == 0 {
            0
        } else {
            let num = 2 * i128::from(k) * i128::from(minor) - i128::from(major);
            let den = 2 * i128::from(major);
            // ceil(num / den); the result never exceeds `minor`.
            (-((-num).div_euclid(den))) as i64
        };
        if self.x_major() {
            (self.start.0 + k * self.step.0, self.start.1 + minor_steps * self.step.1)
        } else {
            (self.start.0 + minor_steps * self.step.0, self.start.1 + k * self.step.1)
        }
    }

    /// Step indices whose major-axis coordinate lies on a `width x height` grid.
    fn steps_on_grid(&self, width: i32, height: i32) -> RangeInclusive<i64> {
        let (origin, dir, limit) = if self.x_major() {
            (self.start.0, self.step.0, i64::from(width))
        } else {
            (self.start.1, self.step.1, i64::from(height))
        };
        let (lo, hi) = if dir > 0 {
            (-origin, limit - 1 - origin)
        } else {
            (origin - limit + 1, origin)
        };
        lo.max(0)..=hi.min(self.steps())
    }
}

/// Integer Bresenham rasterization from `start` to `end`, endpoints included.
pub fn line_points(start: Position, end: Position) -> impl Iterator<Item = Position> {
    let segment = Segment::new(start, end);
    // Every point lies between the two endpoints, so it fits in i32.
    (0..=segment.steps()).map(move |k| {
        let (x, y) = segment.point(k);
        Position::new(x as i32, y as i32)
    })
}

/// Writes the rasterized segment; points off the grid are skipped.
///
/// Only the steps that cross the grid are visited, so far-off endpoints cost nothing.
pub fn line(grid: &mut Grid, start: Position, end: Position, symbol: &str) {
    let segment = Segment::new(start, end);
    for k in segment.steps_on_grid(grid.width(), grid.height()) {
        let (x, y) = segment.point(k);
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            grid.place_at(Position::new(x, y), symbol);
        }
    }
}

/// Writes a `width x height` box anchored at `(x, y)`.
///
/// Hollow boxes only get their border. Cells off the grid are skipped; the box itself is never clamped.
pub fn rectangle(grid: &mut Grid, x: i32, y: i32, width: i32, height: i32, filled: bool, symbol: &str) {
    let (x, y) = (i64::from(x), i64::from(y));
    let (w, h) = (i64::from(width), i64::from(height));
    // Offsets into the box that land on the grid.
    let cols = (-x).max(0)..=(w - 1).min(i64::from(grid.width()) - 1 - x);
    let rows = (-y).max(0)..=(h - 1).min(i64::from(grid.height()) - 1 - y);

    for i in cols {
        for j in rows.clone() {
            let on_border = i == 0 || i == w - 1 || j == 0 || j == h - 1;
            if filled || on_border {
                // x + i and y + j are on the grid, so they fit in i32.
                grid.place_at(Position::new((x + i) as i32, (y + j) as i32), symbol);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn set_cells(grid: &Grid) -> Vec<Position> {
        let mut cells: Vec<Position> = grid.occupied().iter().copied().collect();
        cells.sort_by_key(|p| (p.y, p.x));
        cells
    }

    #[test]
    fn test_perimeter_covers_border_only() {
        let mut grid = Grid::new(6, 4).unwrap();
        perimeter(&mut grid, "#");
        for y in 0..4 {
            for x in 0..6 {
                let pos = Position::new(x, y);
                let border = x == 0 || x == 5 || y == 0 || y == 3;
                assert_eq!(grid.get(pos).is_some(), border, "at {:?}", pos);
            }
        }
        assert_eq!(grid.occupied_count(), 2 * 6 + 2 * 4 - 4);
    }

    #[test]
    fn test_perimeter_on_single_row() {
        let mut grid = Grid::new(5, 1).unwrap();
        perimeter(&mut grid, "#");
        assert_eq!(grid.occupied_count(), 5);
    }

    #[test]
    fn test_horizontal_line() {
        let mut grid = Grid::new(8, 8).unwrap();
        line(&mut grid, Position::new(0, 0), Position::new(4, 0), "#");
        assert_eq!(set_cells(&grid), (0..=4).map(|x| Position::new(x, 0)).collect::<Vec<_>>());
    }

    #[test]
    fn test_line_all_octants_hit_both_endpoints() {
        let center = Position::new(5, 5);
        let targets = [(9, 7), (7, 9), (3, 9), (1, 7), (1, 3), (3, 1), (7, 1), (9, 3), (5, 5)];
        for (tx, ty) in targets {
            let end = Position::new(tx, ty);
            let points: Vec<Position> = line_points(center, end).collect();
            assert_eq!(points.first(), Some(&center));
            assert_eq!(points.last(), Some(&end));
            assert_eq!(points.len() as i32, center.chebyshev(&end) + 1);
            for pair in points.windows(2) {
                assert_eq!(pair[0].chebyshev(&pair[1]), 1, "gap in line to {:?}", end);
            }
        }
    }

    #[test]
    fn test_line_reversed_is_same_length() {
        let a = Position::new(0, 0);
        let b = Position::new(7, 3);
        assert_eq!(line_points(a, b).count(), line_points(b, a).count());
    }

    /// The textbook incremental walk, for comparison.
    fn stepwise_line(start: Position, end: Position) -> Vec<Position> {
        let (x1, y1) = (i64::from(end.x), i64::from(end.y));
        let (mut x, mut y) = (i64::from(start.x), i64::from(start.y));
        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let mut points = Vec::new();
        loop {
            points.push(Position::new(x as i32, y as i32));
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
        points
    }

    #[test]
    fn test_line_matches_stepwise_walk() {
        for x0 in -4..=4 {
            for y0 in -4..=4 {
                for x1 in -4..=4 {
                    for y1 in -4..=4 {
                        let (a, b) = (Position::new(x0, y0), Position::new(x1, y1));
                        let expected = stepwise_line(a, b);
                        assert_eq!(line_points(a, b).collect::<Vec<_>>(), expected);

                        let mut grid = Grid::new(3, 2).unwrap();
                        line(&mut grid, a, b, "#");
                        let mut on_grid: Vec<Position> =
                            expected.into_iter().filter(|p| grid.is_valid(*p)).collect();
                        on_grid.sort_by_key(|p| (p.y, p.x));
                        on_grid.dedup();
                        assert_eq!(set_cells(&grid), on_grid, "{:?} -> {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_line_with_far_endpoints() {
        let mut grid = Grid::new(5, 5).unwrap();
        line(&mut grid, Position::new(-2_000_000_000, 2), Position::new(2_000_000_000, 2), "#");
        assert_eq!(set_cells(&grid), (0..5).map(|x| Position::new(x, 2)).collect::<Vec<_>>());

        let mut grid = Grid::new(5, 5).unwrap();
        line(&mut grid, Position::new(-1_000_000_000, -1_000_000_000), Position::new(1_000_000_000, 1_000_000_000), "#");
        assert_eq!(set_cells(&grid), (0..5).map(|i| Position::new(i, i)).collect::<Vec<_>>());

        let mut grid = Grid::new(5, 5).unwrap();
        line(&mut grid, Position::new(3, i32::MAX), Position::new(3, i32::MIN), "#");
        assert_eq!(set_cells(&grid), (0..5).map(|y| Position::new(3, y)).collect::<Vec<_>>());

        let mut grid = Grid::new(5, 5).unwrap();
        line(&mut grid, Position::new(i32::MIN, 0), Position::new(i32::MAX, 1), "#");
        assert_eq!(grid.occupied_count(), 5);
    }

    #[test]
    fn test_line_entirely_off_grid() {
        let mut grid = Grid::new(5, 5).unwrap();
        line(&mut grid, Position::new(i32::MIN, -7), Position::new(i32::MAX, -7), "#");
        line(&mut grid, Position::new(10, 10), Position::new(i32::MAX, i32::MAX), "#");
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_line_clips_out_of_bounds() {
        let mut grid = Grid::new(5, 5).unwrap();
        line(&mut grid, Position::new(-2, 2), Position::new(7, 2), "#");
        assert_eq!(set_cells(&grid), (0..5).map(|x| Position::new(x, 2)).collect::<Vec<_>>());
    }

    #[test]
    fn test_hollow_rectangle() {
        let mut grid = Grid::new(10, 10).unwrap();
        rectangle(&mut grid, 2, 2, 3, 3, false, "#");
        assert_eq!(grid.occupied_count(), 8);
        assert!(grid.is_free(Position::new(3, 3)));
        for pos in [(2, 2), (3, 2), (4, 2), (2, 3), (4, 3), (2, 4), (3, 4), (4, 4)] {
            assert_eq!(grid.get(pos.into()), Some("#"));
        }
    }

    #[test]
    fn test_filled_rectangle() {
        let mut grid = Grid::new(10, 10).unwrap();
        rectangle(&mut grid, 2, 2, 3, 3, true, "#");
        assert_eq!(grid.occupied_count(), 9);
        assert_eq!(grid.get(Position::new(3, 3)), Some("#"));
    }

    #[test]
    fn test_rectangle_partially_off_grid() {
        let mut grid = Grid::new(4, 4).unwrap();
        rectangle(&mut grid, 2, 2, 5, 5, true, "#");
        assert_eq!(set_cells(&grid), vec![
            Position::new(2, 2),
            Position::new(3, 2),
            Position::new(2, 3),
            Position::new(3, 3),
        ]);
    }

    #[test]
    fn test_rectangle_with_far_anchor_and_huge_size() {
        let mut grid = Grid::new(4, 4).unwrap();
        rectangle(&mut grid, -2_000_000_000, -2_000_000_000, i32::MAX, i32::MAX, false, "#");
        // Only the far right/bottom edges could reach the grid, and they do not.
        assert_eq!(grid.occupied_count(), 0);

        rectangle(&mut grid, i32::MAX, i32::MAX, i32::MAX, i32::MAX, true, "#");
        assert_eq!(grid.occupied_count(), 0);

        rectangle(&mut grid, -1_000_000_000, 1, i32::MAX, 2, true, "#");
        assert_eq!(set_cells(&grid), (1..3)
            .flat_map(|y| (0..4).map(move |x| Position::new(x, y)))
            .collect::<Vec<_>>());
    }

    #[test]
    fn test_hollow_rectangle_edge_crossing_grid() {
        let mut grid = Grid::new(4, 4).unwrap();
        // Left edge at x = 2, the rest of the box far off to the right and below.
        rectangle(&mut grid, 2, -1_000, 1_000_000, 1_000_000_000, false, "#");
        assert_eq!(set_cells(&grid), (0..4).map(|y| Position::new(2, y)).collect::<Vec<_>>());
    }

    #[test]
    fn test_degenerate_rectangle_writes_nothing() {
        let mut grid = Grid::new(4, 4).unwrap();
        rectangle(&mut grid, 1, 1, 0, 3, true, "#");
        rectangle(&mut grid, 1, 1, 3, -1, false, "#");
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_random_barriers_fill_free_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let placed = random(&mut grid, 5, "~", &mut rng);
        assert_eq!(placed, 5);
        assert_eq!(grid.find_positions_with("~").len(), 5);
    }

    #[test]
    fn test_random_barriers_stop_on_full_grid() {
        let mut grid = Grid::new(2, 2).unwrap();
        rectangle(&mut grid, 0, 0, 2, 2, true, "#");
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(random(&mut grid, 4, "~", &mut rng), 0);
        assert!(grid.find_positions_with("~").is_empty());
    }
}
