// src/generator/mod.rs
pub mod barriers;
pub mod planner;
pub mod report;
pub mod restrictions;
pub mod strategies;

pub use planner::GridPlanner;
pub use report::{GenerationReport, Shortfall};
pub use restrictions::RestrictionViolation;
pub use strategies::{Candidate, Origin};
