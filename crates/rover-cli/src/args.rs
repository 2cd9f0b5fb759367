//! Command-line flags.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use simplelog::LevelFilter;

/// Drive a rover across a square grid and print where it ends up.
#[derive(Debug, Parser)]
#[command(name = "rover", version, about)]
pub struct Args {
    /// Side length of the square grid.
    #[arg(long, alias = "grid_size", allow_negative_numbers = true)]
    pub grid_size: Option<i32>,

    /// Obstacle cells, e.g. "[(1,2), (3,3)]". Defaults to no obstacles.
    #[arg(long)]
    pub obstacles: Option<String>,

    /// Command string over M (move), L (turn left), R (turn right).
    #[arg(long, alias = "cmds")]
    pub commands: Option<String>,

    /// TOML file with any of `grid_size`, `obstacles`, `commands`.
    /// Flags given on the command line take precedence.
    #[arg(long, value_name = "FILE")]
    pub mission: Option<PathBuf>,

    /// Print the result as indented JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
