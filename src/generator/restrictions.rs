// src/generator/restrictions.rs

use crate::config::RestrictionSpec;
use crate::map::{Grid, Position};
use log::warn;

/// A restricted element found too close to a forbidden neighbour after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionViolation {
    pub element: String,
    pub position: Position,
}

/// True when no cell in the `(2r+1) x (2r+1)` square around `pos` holds a forbidden symbol.
///
/// The square is clipped to the grid before scanning and includes `pos` itself,
/// so the cost is bounded by the grid size whatever the radius.
pub fn neighbourhood_clear(grid: &Grid, pos: Position, forbidden: &[String], radius: u32) -> bool {
    if forbidden.is_empty() {
        return true;
    }
    let r = i64::from(radius);
    let x_lo = (i64::from(pos.x) - r).max(0);
    let x_hi = (i64::from(pos.x) + r).min(i64::from(grid.width()) - 1);
    let y_lo = (i64::from(pos.y) - r).max(0);
    let y_hi = (i64::from(pos.y) + r).min(i64::from(grid.height()) - 1);

    // Bounds are within the grid here, so the narrowing casts are lossless.
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            if let Some(cell) = grid.get(Position::new(x as i32, y as i32)) {
                if forbidden.iter().any(|f| f == cell) {
                    return false;
                }
            }
        }
    }
    true
}

/// Gate for element placement: the cell must be free and every restriction on `symbol` satisfied.
pub fn can_place(grid: &Grid, restrictions: &[RestrictionSpec], pos: Position, symbol: &str) -> bool {
    if !grid.is_free(pos) {
        return false;
    }
    restrictions
        .iter()
        .filter(|r| r.element == symbol)
        .all(|r| neighbourhood_clear(grid, pos, &r.cannot_touch, r.min_distance))
}

/// Re-checks every placed occurrence of every restricted element.
///
/// Report only: the grid is left untouched. Each violation is logged as it is found.
pub fn validate(grid: &Grid, restrictions: &[RestrictionSpec]) -> Vec<RestrictionViolation> {
    let mut violations = Vec::new();
    for restriction in restrictions {
        for pos in grid.find_positions_with(&restriction.element) {
            if !neighbourhood_clear(grid, pos, &restriction.cannot_touch, restriction.min_distance) {
                warn!("Restriction violated: '{}' at ({}, {})", restriction.element, pos.x, pos.y);
                violations.push(RestrictionViolation {
                    element: restriction.element.clone(),
                    position: pos,
                });
            }
        }
    }
    violations
}
