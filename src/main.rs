#![warn(non_snake_case)]
//! # tilemap_planner Entry Point
//!
//! Loads a JSON map configuration, runs the planner, prints the framed map and
//! its statistics, and writes the plain-text dump to disk.
//!
//! ```text
//! tilemap_planner [CONFIG] [OUTPUT] [--seed N] [--quiet]
//! ```
//!
//! Without a config the stock 50x30 bordered map is generated. `OUTPUT`
//! defaults to `generated_map.txt`. Set `RUST_LOG=debug` for per-shape logs.
//!
//! ## License
//! Licensed under the MIT License.

use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use tilemap_planner::render::{self, MapStatistics};
use tilemap_planner::{GridPlanner, MapConfig};

const DEFAULT_OUTPUT: &str = "generated_map.txt";

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// JSON map configuration; the stock bordered map is used when omitted.
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
    /// Where the plain-text map is written.
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Overrides the seed in the configuration.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
    /// Skip printing the framed map.
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => MapConfig::from_path(path)?,
        None => {
            info!("No configuration given, using the default map");
            MapConfig::default()
        }
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut planner = GridPlanner::new(config)?;
    let grid = planner.generate();

    if !args.quiet {
        println!("\n{}\n", render::render_framed(grid));
    }
    println!("{}", MapStatistics::from_grid(grid));

    render::save_grid(grid, &args.output)?;

    let report = planner.report();
    if !report.is_clean() {
        info!(
            "Finished with {} shortfall(s) and {} restriction violation(s)",
            report.shortfalls.len(),
            report.violations.len()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging.
    env_logger::init();
    info!("tilemap_planner starting...");

    // Exits with status 2 on bad arguments.
    let args = CliArgs::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Map generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
