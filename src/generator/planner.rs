// src/generator/planner.rs

use super::barriers;
use super::report::{GenerationReport, Shortfall};
use super::restrictions;
use super::strategies::{self, Origin};
use crate::config::{BarrierSpec, ElementSpec, MapConfig, RestrictionSpec};
use crate::error::Result;
use crate::map::{Grid, Position};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Placement attempts allowed per requested element instance.
pub const ELEMENT_ATTEMPTS_PER_INSTANCE: u32 = 20;

/// Turns a [`MapConfig`] into a populated [`Grid`].
///
/// Generation runs three ordered phases: barriers, elements, then a
/// report-only restriction check. Cells are only ever set, so the grid grows
/// monotonically and is handed back intact whatever the outcome.
pub struct GridPlanner {
    config: MapConfig,
    grid: Grid,
    rng: StdRng,
    report: GenerationReport,
    generated: bool,
}

impl GridPlanner {
    /// Seeds from `config.seed` when present, otherwise from the OS.
    pub fn new(config: MapConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    /// Same seed and same config always yield the same grid.
    pub fn with_seed(config: MapConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: MapConfig, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.dimensions.width, config.dimensions.height)?;
        Ok(Self {
            config,
            grid,
            rng,
            report: GenerationReport::default(),
            generated: false,
        })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    /// Run all three phases and return the finished grid.
    ///
    /// The phases run once per planner. Later calls return the same grid and
    /// leave the report as it was.
    pub fn generate(&mut self) -> &Grid {
        if self.generated {
            warn!("Map already generated; returning the existing grid");
            return &self.grid;
        }
        self.generated = true;
        info!(
            "Generating {}x{} map...",
            self.grid.width(),
            self.grid.height()
        );

        self.generate_barriers();
        self.generate_elements();
        if !self.validate_restrictions() {
            warn!("Some restrictions may have been violated");
        }

        info!(
            "Map generated: {} occupied, {} free",
            self.grid.occupied_count(),
            self.grid.free_count()
        );
        &self.grid
    }

    fn generate_barriers(&mut self) {
        let Self { config, grid, rng, .. } = self;
        for barrier in &config.barriers {
            debug!("Placing {} barrier '{}'", barrier.kind(), barrier.symbol());
            match barrier {
                BarrierSpec::Perimeter { symbol } => barriers::perimeter(grid, symbol),
                BarrierSpec::Random { count, symbol } => {
                    let placed = barriers::random(grid, *count, symbol, rng);
                    if placed < *count {
                        debug!("Random barrier '{}' stopped at {}/{}", symbol, placed, count);
                    }
                }
                BarrierSpec::Line { start, end, symbol } => barriers::line(grid, *start, *end, symbol),
                BarrierSpec::Rectangle { x, y, width, height, filled, symbol } => {
                    barriers::rectangle(grid, *x, *y, *width, *height, *filled, symbol)
                }
            }
        }
    }

    fn generate_elements(&mut self) {
        let Self { config, grid, rng, report, .. } = self;
        for element in &config.elements {
            let placed = place_element(grid, &config.restrictions, element, rng, report);
            if placed < element.count {
                warn!(
                    "Only {}/{} elements '{}' were placed",
                    placed, element.count, element.symbol
                );
                report.shortfalls.push(Shortfall {
                    symbol: element.symbol.clone(),
                    placed,
                    requested: element.count,
                });
            } else {
                debug!("Placed {} '{}'", placed, element.symbol);
            }
        }
    }

    /// Records any violations in the report; returns true when there were none.
    fn validate_restrictions(&mut self) -> bool {
        let violations = restrictions::validate(&self.grid, &self.config.restrictions);
        let clean = violations.is_empty();
        self.report.violations = violations;
        clean
    }

    /// Whether `symbol` may go at `pos` given the current grid and the configured restrictions.
    pub fn can_place(&self, pos: Position, symbol: &str) -> bool {
        restrictions::can_place(&self.grid, &self.config.restrictions, pos, symbol)
    }

    /// Direct write, bypassing restrictions. Out-of-bounds coordinates are ignored.
    pub fn place_at(&mut self, pos: Position, symbol: &str) {
        self.grid.place_at(pos, symbol);
    }

    pub fn find_positions_with(&self, symbol: &str) -> Vec<Position> {
        self.grid.find_positions_with(symbol)
    }
}

fn place_element(
    grid: &mut Grid,
    rules: &[RestrictionSpec],
    element: &ElementSpec,
    rng: &mut StdRng,
    report: &mut GenerationReport,
) -> u32 {
    let max_attempts = element.count.saturating_mul(ELEMENT_ATTEMPTS_PER_INSTANCE);
    let mut placed = 0;
    let mut attempts = 0;

    while placed < element.count && attempts < max_attempts {
        attempts += 1;
        let Some(candidate) =
            strategies::find_candidate(element.placement, grid, &element.symbol, rng)
        else {
            continue;
        };
        if restrictions::can_place(grid, rules, candidate.position, &element.symbol) {
            grid.place_at(candidate.position, &element.symbol);
            placed += 1;
            if candidate.origin == Origin::Fallback {
                report.record_fallback(&element.symbol);
            }
        }
    }
    placed
}
