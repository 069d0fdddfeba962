// src/map/position.rs

use serde::{Deserialize, Serialize};

/// An integer cell coordinate. May lie outside the grid; bounds are the grid's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Sum of absolute coordinate differences.
    pub fn manhattan(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Largest absolute coordinate difference (king-move distance).
    pub fn chebyshev(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_distances() {
        let a = Position::new(1, 1);
        let b = Position::new(4, -1);
        assert_eq!(a.manhattan(&b), 5);
        assert_eq!(a.chebyshev(&b), 3);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_value_equality_in_sets() {
        let mut set = HashSet::new();
        set.insert(Position::new(2, 3));
        set.insert(Position::from((2, 3)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Position::new(1, 3).offset(1, 0)));
    }
}
