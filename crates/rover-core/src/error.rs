//! Error types for command decoding.

use std::error::Error;
use std::fmt;

/// Errors from decoding a command string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A character outside the `M`/`L`/`R` alphabet.
    UnknownCommand {
        /// Character offset of the offending command.
        index: usize,
        /// The character that was found.
        found: char,
    },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { index, found } => {
                write!(f, "unknown command {found:?} at index {index}")
            }
        }
    }
}

impl Error for CommandError {}
