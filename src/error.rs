// src/error.rs

use std::io;
use thiserror::Error;

/// Errors surfaced while loading configuration or moving grids in and out of text.
///
/// Generation itself never fails: placement shortfalls and restriction
/// violations are reported through [`crate::generator::GenerationReport`].
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("cannot parse grid: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
