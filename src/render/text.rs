// src/render/text.rs
// Plain-text grid dump: one row per line, one cell per character, '.' for empty.

use crate::config::EMPTY_CELL;
use crate::error::{PlannerError, Result};
use crate::map::{Grid, Position};
use log::info;
use std::fs;
use std::path::Path;

fn render_row(row: &[Option<String>]) -> String {
    row.iter()
        .map(|cell| match cell {
            Some(symbol) => symbol.clone(),
            None => EMPTY_CELL.to_string(),
        })
        .collect()
}

/// Rows joined by newlines, without a trailing newline.
pub fn render_grid(grid: &Grid) -> String {
    grid.rows().map(render_row).collect::<Vec<_>>().join("\n")
}

/// Console form: the grid between two rules of `=` as wide as the grid.
pub fn render_framed(grid: &Grid) -> String {
    let rule = "=".repeat(grid.width() as usize);
    format!("{}\n{}\n{}", rule, render_grid(grid), rule)
}

/// Write the text dump, each row newline-terminated.
pub fn save_grid<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::with_capacity(grid.area() + grid.height() as usize);
    for row in grid.rows() {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    fs::write(path, out)?;
    info!("Map saved to {:?}", path);
    Ok(())
}

/// Rebuild a grid from a text dump.
///
/// Blank lines are skipped and the widest row sets the width; short rows are
/// padded with empty cells. `.` and spaces read as empty.
pub fn parse_grid(text: &str) -> Result<Grid> {
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect();
    let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    if width == 0 {
        return Err(PlannerError::Parse("no rows found".to_string()));
    }

    let mut grid = Grid::new(width as i32, lines.len() as i32)?;
    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            if ch == EMPTY_CELL || ch == ' ' {
                continue;
            }
            grid.place_at(Position::new(x as i32, y as i32), &ch.to_string());
        }
    }
    Ok(grid)
}

pub fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    parse_grid(&fs::read_to_string(path)?)
}
