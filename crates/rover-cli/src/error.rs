//! Front-end error types.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::obstacles::ObstacleParseError;

/// Errors that stop the binary before a navigation result is printed.
#[derive(Debug)]
pub enum CliError {
    /// The obstacle list text could not be parsed.
    Obstacles(ObstacleParseError),
    /// A required value came from neither the flags nor the mission file.
    MissingArgument {
        /// Flag name, without leading dashes.
        name: &'static str,
    },
    /// The mission file could not be read or parsed.
    MissionFile {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying failure.
        reason: String,
    },
    /// The result could not be serialized.
    Output(serde_json::Error),
    /// Writing to stdout failed.
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Obstacles(e) => write!(f, "invalid obstacle list: {e}"),
            Self::MissingArgument { name } => write!(f, "missing required argument --{name}"),
            Self::MissionFile { path, reason } => {
                write!(f, "cannot load mission file {}: {reason}", path.display())
            }
            Self::Output(e) => write!(f, "cannot render result: {e}"),
            Self::Io(e) => write!(f, "cannot write result: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Obstacles(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::MissingArgument { .. } | Self::MissionFile { .. } => None,
        }
    }
}

impl From<ObstacleParseError> for CliError {
    fn from(e: ObstacleParseError) -> Self {
        Self::Obstacles(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
