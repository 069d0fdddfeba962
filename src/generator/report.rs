// src/generator/report.rs

use super::restrictions::RestrictionViolation;
use std::collections::BTreeMap;

/// An element spec that could not reach its requested count within its attempt budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    pub symbol: String,
    pub placed: u32,
    pub requested: u32,
}

/// Non-fatal outcomes of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub shortfalls: Vec<Shortfall>,
    pub violations: Vec<RestrictionViolation>,
    /// Per symbol, how many placements came from a strategy's uniform-random fallback.
    pub fallback_placements: BTreeMap<String, u32>,
}

impl GenerationReport {
    pub fn is_clean(&self) -> bool {
        self.shortfalls.is_empty() && self.violations.is_empty()
    }

    pub fn fallbacks_for(&self, symbol: &str) -> u32 {
        self.fallback_placements.get(symbol).copied().unwrap_or(0)
    }

    pub(crate) fn record_fallback(&mut self, symbol: &str) {
        *self.fallback_placements.entry(symbol.to_string()).or_insert(0) += 1;
    }
}
