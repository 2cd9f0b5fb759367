//! Mission files and their resolution against command-line flags.
//!
//! Override hierarchy: defaults, then the mission file, then flags.
//!
//! ```toml
//! grid_size = 5
//! obstacles = [[1, 2], [3, 3]]
//! commands = "MMRM"
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use log::{debug, info};
use rover_core::Position;
use rover_engine::MissionConfig;
use serde::Deserialize;

use crate::args::Args;
use crate::error::CliError;
use crate::obstacles::parse_obstacles;

/// On-disk mission. Every field is optional so a file may supply only
/// part of a mission and leave the rest to flags.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MissionFile {
    /// Side length of the square grid.
    pub grid_size: Option<i32>,
    /// Obstacle cells as `[x, y]` pairs.
    pub obstacles: Option<Vec<[i32; 2]>>,
    /// Command string.
    pub commands: Option<String>,
}

impl MissionFile {
    /// Read and parse a mission file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path).map_err(|e| CliError::MissionFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let file = Self::parse(&contents).map_err(|e| CliError::MissionFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!("loaded mission file {}", path.display());
        debug!("mission file: {file:?}");
        Ok(file)
    }

    /// Parse mission TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Merge flags over an optional mission file into a [`MissionConfig`].
///
/// Grid size and commands must come from one of the two sources; obstacles
/// default to none. Only syntax is checked here, so an out-of-range
/// obstacle or a bad command character still reaches the engine.
pub fn resolve(args: &Args, file: Option<MissionFile>) -> Result<MissionConfig, CliError> {
    let file = file.unwrap_or_default();

    let size = args
        .grid_size
        .or(file.grid_size)
        .ok_or(CliError::MissingArgument { name: "grid-size" })?;

    let obstacles: IndexSet<Position> = match (&args.obstacles, file.obstacles) {
        (Some(text), _) => parse_obstacles(text)?,
        (None, Some(pairs)) => pairs.into_iter().map(|[x, y]| Position::new(x, y)).collect(),
        (None, None) => IndexSet::new(),
    };

    let commands = args
        .commands
        .clone()
        .or(file.commands)
        .ok_or(CliError::MissingArgument { name: "commands" })?;

    Ok(MissionConfig::new(size, obstacles, commands))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rover").chain(argv.iter().copied())).unwrap()
    }

    fn p(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn parses_full_file() {
        let file = MissionFile::parse(
            r#"
            grid_size = 5
            obstacles = [[1, 2], [3, 3]]
            commands = "MMRM"
            "#,
        )
        .unwrap();
        assert_eq!(file.grid_size, Some(5));
        assert_eq!(file.obstacles, Some(vec![[1, 2], [3, 3]]));
        assert_eq!(file.commands.as_deref(), Some("MMRM"));
    }

    #[test]
    fn empty_file_is_all_none() {
        assert_eq!(MissionFile::parse("").unwrap(), MissionFile::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(MissionFile::parse("gridsize = 5").is_err());
    }

    #[test]
    fn flags_alone() {
        let cfg = resolve(
            &args(&["--grid-size", "5", "--obstacles", "[(1,2)]", "--commands", "M"]),
            None,
        )
        .unwrap();
        assert_eq!(cfg, MissionConfig::new(5, [p(1, 2)], "M"));
    }

    #[test]
    fn obstacles_default_to_none() {
        let cfg = resolve(&args(&["--grid-size", "5", "--commands", "M"]), None).unwrap();
        assert!(cfg.obstacles.is_empty());
    }

    #[test]
    fn flags_override_file() {
        let file = MissionFile {
            grid_size: Some(10),
            obstacles: Some(vec![[4, 4]]),
            commands: Some("LL".into()),
        };
        let cfg = resolve(&args(&["--grid-size", "3", "--obstacles", "[]"]), Some(file)).unwrap();
        assert_eq!(cfg.size, 3);
        assert!(cfg.obstacles.is_empty());
        assert_eq!(cfg.commands, "LL");
    }

    #[test]
    fn file_fills_missing_flags() {
        let file = MissionFile {
            grid_size: Some(10),
            obstacles: Some(vec![[4, 4], [4, 4], [1, 0]]),
            commands: None,
        };
        let cfg = resolve(&args(&["--commands", "RM"]), Some(file)).unwrap();
        assert_eq!(cfg, MissionConfig::new(10, [p(4, 4), p(1, 0)], "RM"));
    }

    #[test]
    fn missing_size_and_commands() {
        let err = resolve(&args(&["--commands", "M"]), None).unwrap_err();
        assert!(matches!(err, CliError::MissingArgument { name: "grid-size" }));

        let err = resolve(&args(&["--grid-size", "5"]), None).unwrap_err();
        assert!(matches!(err, CliError::MissingArgument { name: "commands" }));
    }

    #[test]
    fn obstacle_syntax_errors_surface() {
        let err = resolve(
            &args(&["--grid-size", "5", "--commands", "M", "--obstacles", "(1,2)"]),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Obstacles(_)));
    }

    #[test]
    fn semantic_problems_pass_through() {
        let cfg = resolve(
            &args(&["--grid-size", "-1", "--commands", "MXM", "--obstacles", "[(9,9)]"]),
            None,
        )
        .unwrap();
        assert_eq!(cfg.size, -1);
        assert_eq!(cfg.commands, "MXM");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let err = MissionFile::load(Path::new("/nonexistent/mission.toml")).unwrap_err();
        match err {
            CliError::MissionFile { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/mission.toml"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
