// src/config/config.rs

use crate::error::{PlannerError, Result};
use crate::map::Position;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reserved by the text dump format for empty cells.
pub const EMPTY_CELL: char = '.';

pub const DEFAULT_BARRIER_SYMBOL: &str = "#";
pub const DEFAULT_RANDOM_BARRIER_COUNT: u32 = 10;
pub const DEFAULT_ELEMENT_COUNT: u32 = 1;
pub const DEFAULT_MIN_DISTANCE: u32 = 1;

fn default_symbol() -> String {
    DEFAULT_BARRIER_SYMBOL.to_string()
}

fn default_random_count() -> u32 {
    DEFAULT_RANDOM_BARRIER_COUNT
}

fn default_element_count() -> u32 {
    DEFAULT_ELEMENT_COUNT
}

fn default_min_distance() -> u32 {
    DEFAULT_MIN_DISTANCE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
}

/// A barrier shape, tagged by `"type"` in the JSON source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BarrierSpec {
    /// The four border lines of the map.
    Perimeter {
        #[serde(default = "default_symbol")]
        symbol: String,
    },
    /// Up to `count` cells at random free coordinates.
    Random {
        #[serde(default = "default_random_count")]
        count: u32,
        #[serde(default = "default_symbol")]
        symbol: String,
    },
    /// A rasterized segment, both endpoints included.
    Line {
        start: Position,
        end: Position,
        #[serde(default = "default_symbol")]
        symbol: String,
    },
    /// An axis-aligned box anchored at its top-left corner.
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        #[serde(default)]
        filled: bool,
        #[serde(default = "default_symbol")]
        symbol: String,
    },
}

impl BarrierSpec {
    pub fn symbol(&self) -> &str {
        match self {
            BarrierSpec::Perimeter { symbol }
            | BarrierSpec::Random { symbol, .. }
            | BarrierSpec::Line { symbol, .. }
            | BarrierSpec::Rectangle { symbol, .. } => symbol,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BarrierSpec::Perimeter { .. } => "perimeter",
            BarrierSpec::Random { .. } => "random",
            BarrierSpec::Line { .. } => "line",
            BarrierSpec::Rectangle { .. } => "rectangle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStrategy {
    #[default]
    Random,
    Clustered,
    Scattered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub symbol: String,
    #[serde(default = "default_element_count")]
    pub count: u32,
    #[serde(default)]
    pub placement: PlacementStrategy,
}

/// Forbids `element` from sitting within `min_distance` (Chebyshev) of any `cannot_touch` symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictionSpec {
    pub element: String,
    #[serde(default)]
    pub cannot_touch: Vec<String>,
    #[serde(default = "default_min_distance")]
    pub min_distance: u32,
}

/// The full declarative description of a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub dimensions: Dimensions,
    #[serde(default)]
    pub barriers: Vec<BarrierSpec>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
    #[serde(default)]
    pub restrictions: Vec<RestrictionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions { width: 50, height: 30 },
            barriers: vec![BarrierSpec::Perimeter { symbol: default_symbol() }],
            elements: Vec::new(),
            restrictions: Vec::new(),
            seed: None,
        }
    }
}

impl MapConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MapConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Build from an already-parsed JSON tree.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: MapConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading map configuration from {:?}", path);
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the semantic rules serde cannot express.
    pub fn validate(&self) -> Result<()> {
        let Dimensions { width, height } = self.dimensions;
        if width <= 0 || height <= 0 {
            return Err(PlannerError::InvalidDimensions { width, height });
        }

        for (i, barrier) in self.barriers.iter().enumerate() {
            check_symbol(barrier.symbol(), &format!("barrier #{} ({})", i, barrier.kind()))?;
        }
        for (i, element) in self.elements.iter().enumerate() {
            check_symbol(&element.symbol, &format!("element #{}", i))?;
        }
        for (i, restriction) in self.restrictions.iter().enumerate() {
            if restriction.element.is_empty() {
                return Err(PlannerError::InvalidConfig(format!(
                    "restriction #{} has an empty element symbol",
                    i
                )));
            }
        }
        Ok(())
    }
}

fn check_symbol(symbol: &str, owner: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(PlannerError::InvalidConfig(format!("{} has an empty symbol", owner)));
    }
    if symbol.chars().count() > 1 {
        warn!("{} uses multi-character symbol '{}'; text output will be misaligned", owner, symbol);
    } else if symbol.starts_with(EMPTY_CELL) {
        warn!("{} uses '{}', which text output reserves for empty cells", owner, EMPTY_CELL);
    }
    Ok(())
}
