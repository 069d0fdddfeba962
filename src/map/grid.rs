// src/map/grid.rs

use super::Position;
use crate::error::{PlannerError, Result};
use std::collections::HashSet;

/// A dense `width * height` field of optional symbols.
///
/// The cell array is the source of truth. `occupied` is a derived index of
/// every non-empty coordinate and is only ever touched by [`Grid::place_at`],
/// so the two cannot diverge. Cells are set, never cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<String>>,
    occupied: HashSet<Position>,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlannerError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; (width as usize) * (height as usize)],
            occupied: HashSet::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, pos: Position) -> usize {
        (pos.y as usize) * (self.width as usize) + pos.x as usize
    }

    /// True when the coordinate lies within `[0, width) x [0, height)`.
    pub fn is_valid(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// True when the coordinate is in bounds and the cell is unset.
    pub fn is_free(&self, pos: Position) -> bool {
        self.is_valid(pos) && self.cells[self.index(pos)].is_none()
    }

    /// Symbol at `pos`, or `None` when the cell is empty or out of bounds.
    pub fn get(&self, pos: Position) -> Option<&str> {
        if !self.is_valid(pos) {
            return None;
        }
        self.cells[self.index(pos)].as_deref()
    }

    /// The single write path. Out-of-bounds coordinates are ignored.
    pub fn place_at(&mut self, pos: Position, symbol: &str) {
        if !self.is_valid(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = Some(symbol.to_string());
        self.occupied.insert(pos);
    }

    pub fn occupied(&self) -> &HashSet<Position> {
        &self.occupied
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn free_count(&self) -> usize {
        self.area() - self.occupied.len()
    }

    /// Every coordinate holding `symbol`, in row-major order.
    pub fn find_positions_with(&self, symbol: &str) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.as_deref() == Some(symbol))
            .map(|(i, _)| {
                let i = i as i32;
                Position::new(i % self.width, i / self.width)
            })
            .collect()
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<String>]> {
        self.cells.chunks(self.width as usize)
    }
}
