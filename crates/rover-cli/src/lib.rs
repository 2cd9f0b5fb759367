//! Command-line front end for the rover navigation engine.
//!
//! Parses flags (and optionally a TOML mission file), runs one mission
//! through [`rover_engine::NavigationEngine`], and prints the result as a
//! single JSON object:
//!
//! ```text
//! $ rover --grid-size 5 --obstacles "[(1,2),(3,3)]" --commands MMRM
//! {"final_position": [0, 2], "final_direction": "E", "status": "Obstacle encountered"}
//! ```
//!
//! Syntax errors in the flags are reported on stderr. Missions that parse
//! but break the navigation rules (non-positive size, obstacles off the
//! grid, unknown commands) still print a result with status
//! `"Invalid input"`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod error;
pub mod mission;
pub mod obstacles;
pub mod report;

use std::io::Write;

use log::info;
use rover_core::NavigationResult;
use rover_engine::NavigationEngine;

pub use args::Args;
pub use error::CliError;
pub use mission::MissionFile;
pub use obstacles::{parse_obstacles, ObstacleParseError};
pub use report::Report;

/// Exit code for errors that prevent a result from being printed.
pub const EXIT_USAGE: u8 = 2;

/// Run one mission described by `args` and write its JSON result to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<NavigationResult, CliError> {
    let file = args
        .mission
        .as_deref()
        .map(MissionFile::load)
        .transpose()?;
    let mission = mission::resolve(args, file)?;

    let (result, stats) = NavigationEngine::new().run_with_stats(&mission);
    info!(
        "{}: {} commands processed, {} moves, {} turns",
        result.status,
        stats.commands_processed,
        stats.moves,
        stats.turns()
    );

    report::write_report(out, &Report::from(&result), args.pretty)?;
    out.flush()?;
    Ok(result)
}
