// src/lib.rs

pub mod config;
pub mod error;
pub mod generator;
pub mod map;
pub mod render;

pub use config::MapConfig;
pub use error::{PlannerError, Result};
pub use generator::{GenerationReport, GridPlanner};
pub use map::{Grid, Position};
