//! Mission configuration, validation, and error types.
//!
//! [`MissionConfig`] bundles the three inputs of one navigation call.
//! [`validate()`](MissionConfig::validate) checks them before anything is
//! built; [`compile()`](MissionConfig::compile) additionally returns the
//! decoded command sequence the engine interprets.

use std::error::Error;
use std::fmt;

use indexmap::IndexSet;
use rover_core::{Command, CommandError, CommandSeq, Position};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MissionConfig::validate()`].
///
/// The engine reports every one of these as an invalid-input result; the
/// variant only tells the caller (and the debug log) which check failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid size is zero or negative.
    NonPositiveSize {
        /// The configured size.
        size: i32,
    },
    /// An obstacle lies outside `[0, size)` on some axis.
    ObstacleOutOfRange {
        /// The offending obstacle.
        obstacle: Position,
        /// The configured grid size.
        size: i32,
    },
    /// The command string contains a character outside `M`/`L`/`R`.
    InvalidCommand {
        /// Character offset of the offending command.
        index: usize,
        /// The character that was found.
        found: char,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { size } => {
                write!(f, "grid size must be positive, got {size}")
            }
            Self::ObstacleOutOfRange { obstacle, size } => {
                write!(f, "obstacle {obstacle} outside {size}x{size} grid")
            }
            Self::InvalidCommand { index, found } => {
                write!(f, "invalid command {found:?} at index {index}")
            }
        }
    }
}

impl Error for ConfigError {}

impl From<CommandError> for ConfigError {
    fn from(e: CommandError) -> Self {
        match e {
            CommandError::UnknownCommand { index, found } => Self::InvalidCommand { index, found },
        }
    }
}

// ── MissionConfig ──────────────────────────────────────────────────

/// The inputs of one navigation call.
///
/// # Examples
///
/// ```
/// use rover_core::Position;
/// use rover_engine::{ConfigError, MissionConfig};
///
/// let ok = MissionConfig::new(5, [Position::new(1, 2)], "MMRM");
/// assert!(ok.validate().is_ok());
///
/// let bad = MissionConfig::new(5, [Position::new(5, 0)], "M");
/// assert!(matches!(bad.validate(), Err(ConfigError::ObstacleOutOfRange { .. })));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionConfig {
    /// Side length of the square grid. Must be positive.
    pub size: i32,
    /// Obstacle cells. Every one must lie inside the grid.
    pub obstacles: IndexSet<Position>,
    /// Command string over the alphabet `M`, `L`, `R`.
    pub commands: String,
}

impl MissionConfig {
    /// Bundle the three mission inputs. Duplicate obstacles collapse.
    pub fn new(
        size: i32,
        obstacles: impl IntoIterator<Item = Position>,
        commands: impl Into<String>,
    ) -> Self {
        Self {
            size,
            obstacles: obstacles.into_iter().collect(),
            commands: commands.into(),
        }
    }

    /// Check the mission without building anything.
    ///
    /// Checks run in order (size, obstacles, commands) and the first
    /// violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.compile().map(|_| ())
    }

    /// Validate the mission and decode its command string.
    pub fn compile(&self) -> Result<CommandSeq, ConfigError> {
        if self.size <= 0 {
            return Err(ConfigError::NonPositiveSize { size: self.size });
        }
        if let Some(&obstacle) = self.obstacles.iter().find(|o| !o.is_within(self.size)) {
            return Err(ConfigError::ObstacleOutOfRange {
                obstacle,
                size: self.size,
            });
        }
        Ok(Command::parse_sequence(&self.commands)?)
    }
}
