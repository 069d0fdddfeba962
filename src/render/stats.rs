// src/render/stats.rs

use crate::config::Dimensions;
use crate::error::Result;
use crate::map::Grid;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Symbol frequencies and free space of a finished grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapStatistics {
    pub dimensions: Dimensions,
    /// Count per distinct symbol, ordered by symbol.
    pub symbols: BTreeMap<String, usize>,
    pub occupied: usize,
    pub free: usize,
}

impl MapStatistics {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut symbols = BTreeMap::new();
        for cell in grid.rows().flatten().flatten() {
            *symbols.entry(cell.clone()).or_insert(0) += 1;
        }
        Self {
            dimensions: Dimensions { width: grid.width(), height: grid.height() },
            symbols,
            occupied: grid.occupied_count(),
            free: grid.free_count(),
        }
    }

    pub fn count(&self, symbol: &str) -> usize {
        self.symbols.get(symbol).copied().unwrap_or(0)
    }

    /// Fraction of cells holding a symbol, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        let area = self.occupied + self.free;
        if area == 0 {
            return 0.0;
        }
        self.occupied as f64 / area as f64
    }

    /// Analysis document with `dimensions` and `statistics` sections.
    pub fn to_json_pretty(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Analysis<'a> {
            dimensions: Dimensions,
            statistics: AnalysisStats<'a>,
        }
        #[derive(Serialize)]
        struct AnalysisStats<'a> {
            elements: &'a BTreeMap<String, usize>,
            total: usize,
            empty: usize,
        }

        let analysis = Analysis {
            dimensions: self.dimensions,
            statistics: AnalysisStats {
                elements: &self.symbols,
                total: self.occupied,
                empty: self.free,
            },
        };
        Ok(serde_json::to_string_pretty(&analysis)?)
    }
}

impl fmt::Display for MapStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Map statistics:")?;
        writeln!(f, "Dimensions: {}x{}", self.dimensions.width, self.dimensions.height)?;
        writeln!(f, "Free cells: {}", self.free)?;
        for (symbol, count) in &self.symbols {
            writeln!(f, "  '{}': {}", symbol, count)?;
        }
        Ok(())
    }
}
