// src/render/mod.rs
// Thin I/O around a finished grid: text dump, console display, statistics.
pub mod stats;
pub mod text;

pub use stats::MapStatistics;
pub use text::{load_grid, parse_grid, render_framed, render_grid, save_grid};
